//! "Manage Jenkins" and its subsections.

use serde::Serialize;
use thirtyfour::prelude::*;

use super::main_page::Dashboard;
use super::{FromDriver, Page, PageExt};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};

/// Subsections reachable from the "Manage Jenkins" page and submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ManageSection {
    ConfigureSystem,
    GlobalToolConfiguration,
    Plugins,
    ManageNodes,
    ConfigureGlobalSecurity,
    Credentials,
    ConfigureCredentialProviders,
    Users,
    SystemInformation,
    SystemLog,
    LoadStatistics,
    AboutJenkins,
    ManageOldData,
    JenkinsCli,
    ScriptConsole,
    PrepareForShutdown,
    ReloadConfiguration,
}

impl ManageSection {
    /// Sections that open a page of their own.
    pub const PAGES: [ManageSection; 16] = [
        ManageSection::ConfigureSystem,
        ManageSection::GlobalToolConfiguration,
        ManageSection::Plugins,
        ManageSection::ManageNodes,
        ManageSection::ConfigureGlobalSecurity,
        ManageSection::Credentials,
        ManageSection::ConfigureCredentialProviders,
        ManageSection::Users,
        ManageSection::SystemInformation,
        ManageSection::SystemLog,
        ManageSection::LoadStatistics,
        ManageSection::AboutJenkins,
        ManageSection::ManageOldData,
        ManageSection::JenkinsCli,
        ManageSection::ScriptConsole,
        ManageSection::PrepareForShutdown,
    ];

    pub fn menu_label(self) -> &'static str {
        match self {
            ManageSection::ConfigureSystem => "Configure System",
            ManageSection::GlobalToolConfiguration => "Global Tool Configuration",
            ManageSection::Plugins => "Plugins",
            ManageSection::ManageNodes => "Manage Nodes and Clouds",
            ManageSection::ConfigureGlobalSecurity => "Configure Global Security",
            ManageSection::Credentials => "Manage Credentials",
            ManageSection::ConfigureCredentialProviders => "Configure Credential Providers",
            ManageSection::Users => "Manage Users",
            ManageSection::SystemInformation => "System Information",
            ManageSection::SystemLog => "System Log",
            ManageSection::LoadStatistics => "Load Statistics",
            ManageSection::AboutJenkins => "About Jenkins",
            ManageSection::ManageOldData => "Manage Old Data",
            ManageSection::JenkinsCli => "Jenkins CLI",
            ManageSection::ScriptConsole => "Script Console",
            ManageSection::PrepareForShutdown => "Prepare for Shutdown",
            ManageSection::ReloadConfiguration => "Reload Configuration from Disk",
        }
    }

    /// Leading text of the section's heading once it has loaded. The reload
    /// entry has no page; it raises a confirmation alert with this text.
    pub fn expected_text(self) -> &'static str {
        match self {
            ManageSection::ManageNodes => "Manage nodes and clouds",
            ManageSection::Credentials => "Credentials",
            ManageSection::Users => "Users",
            ManageSection::SystemLog => "Log Recorders",
            ManageSection::LoadStatistics => "Load statistics: Jenkins",
            ManageSection::AboutJenkins => "Jenkins\nVersion",
            ManageSection::ReloadConfiguration => "Reload Configuration from Disk: are you sure?",
            other => other.menu_label(),
        }
    }

    fn heading_locator(self) -> Locator {
        match self {
            ManageSection::AboutJenkins => {
                Locator::xpath("//div[contains(@class, 'app-about-heading')]")
            }
            _ => Locator::xpath("//h1"),
        }
    }

    pub fn opens_alert(self) -> bool {
        self == ManageSection::ReloadConfiguration
    }
}

pub struct ManageJenkinsPage {
    driver: WebDriver,
}

impl Page for ManageJenkinsPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Manage Jenkins"
    }
}

impl FromDriver for ManageJenkinsPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl Dashboard for ManageJenkinsPage {}

impl ManageJenkinsPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Open a section through its tile on this page.
    pub async fn open_section(self, section: ManageSection) -> Result<ManageSectionPage> {
        let tile = Locator::xpath(format!(
            "//section//a[.//dt[normalize-space(.)={}]]",
            xpath_literal(section.menu_label())
        ));
        self.wait5().click(&tile).await?;
        Ok(ManageSectionPage::new(self.driver, section))
    }

    /// Open a section through the dropdown of the "Manage Jenkins" breadcrumb item.
    pub async fn select_section_from_breadcrumb(
        self,
        section: ManageSection,
    ) -> Result<ManageSectionPage> {
        let menu = self.breadcrumb().job_dropdown().await?;
        menu.select(ManageSectionPage::new(self.driver.clone(), section))
            .await
    }
}

/// Any page under "Manage Jenkins", identified by its section.
pub struct ManageSectionPage {
    driver: WebDriver,
    section: ManageSection,
}

impl ManageSectionPage {
    pub fn new(driver: WebDriver, section: ManageSection) -> Self {
        Self { driver, section }
    }

    pub fn section(&self) -> ManageSection {
        self.section
    }
}

impl Page for ManageSectionPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        self.section.menu_label()
    }

    fn heading_locator(&self) -> Locator {
        self.section.heading_locator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sections_have_distinct_labels() {
        let labels: HashSet<&str> = ManageSection::PAGES.iter().map(|s| s.menu_label()).collect();
        assert_eq!(labels.len(), ManageSection::PAGES.len());
        assert!(!ManageSection::PAGES.contains(&ManageSection::ReloadConfiguration));
    }

    #[test]
    fn test_expected_text_defaults_to_label() {
        assert_eq!(ManageSection::ScriptConsole.expected_text(), "Script Console");
        assert_eq!(ManageSection::Users.expected_text(), "Users");
        assert!(ManageSection::ReloadConfiguration.opens_alert());
        assert!(!ManageSection::Plugins.opens_alert());
    }
}
