//! A single build and the pages hanging off it.

use thirtyfour::prelude::*;

use crate::error::Result;
use crate::locator::Locator;
use crate::pages::dropdown::DropdownMenu;
use crate::pages::job_sidemenu::WorkspacePage;
use crate::pages::{submit_button, task_link, task_named, FromDriver, Page, PageExt};

/// "Build #N (date)" with its own side menu.
pub struct BuildPage {
    driver: WebDriver,
}

impl Page for BuildPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn heading_locator(&self) -> Locator {
        Locator::xpath("//h1[contains(@class, 'build-caption')] | //h1")
    }
}

impl FromDriver for BuildPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl BuildPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn heading(&self) -> Result<String> {
        self.assert_text().await
    }

    /// Whether the heading starts with "Build #", i.e. a build page rendered.
    pub async fn is_build_heading_displayed(&self) -> bool {
        match self.heading().await {
            Ok(text) => text.trim_start().starts_with("Build #"),
            Err(_) => false,
        }
    }

    pub async fn description(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='description']/div[1]"))
            .await
    }

    pub async fn click_console_output(self) -> Result<ConsoleOutputPage> {
        let target = ConsoleOutputPage::new(self.driver.clone());
        self.open_task(target).await
    }

    pub async fn click_edit_build_information(self) -> Result<EditBuildInformationPage> {
        let target = EditBuildInformationPage::new(self.driver.clone());
        self.open_task(target).await
    }

    pub async fn click_delete_build(self, number: u32) -> Result<DeleteBuildPage> {
        let target = DeleteBuildPage::new(self.driver.clone(), number);
        self.open_task(target).await
    }

    /// Dropdown of the build's breadcrumb item.
    pub async fn build_dropdown(&self) -> Result<DropdownMenu> {
        self.breadcrumb().build_dropdown().await
    }

    /// Whole main panel: build causes, changes, test result summaries.
    pub async fn panel_text(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='main-panel']"))
            .await
    }

    /// First line of the cause that started the build ("Started by user admin").
    pub async fn build_cause(&self) -> Result<String> {
        let text = self.panel_text().await?;
        Ok(text
            .lines()
            .map(str::trim)
            .find(|l| l.starts_with("Started by"))
            .unwrap_or_default()
            .to_string())
    }

    /// Target of the side-menu link to the aggregated downstream test report.
    pub async fn aggregated_test_report_href(&self) -> Result<String> {
        let link = self.wait5().visible(&task_link("aggregatedTestReport")).await?;
        Ok(link.attr("href").await?.unwrap_or_default())
    }

    /// Exempt the build from log rotation.
    pub async fn keep_forever(self) -> Result<Self> {
        self.wait5()
            .click(&Locator::xpath("//button[normalize-space(.)='Keep this build forever']"))
            .await?;
        self.wait5()
            .visible(&Locator::xpath("//button[normalize-space(.)=\"Don't keep this build forever\"]"))
            .await?;
        Ok(self)
    }
}

/// Build "Changes" page.
pub struct ChangesBuildPage {
    driver: WebDriver,
}

impl Page for ChangesBuildPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Changes"
    }
}

impl ChangesBuildPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// "No changes." for a build with no SCM.
    pub async fn changes_text(&self) -> Result<String> {
        self.wait10()
            .text(&Locator::xpath("//div[@id='main-panel']//span[@class='jenkins-icon-adjacent'] | //div[@id='main-panel']/p"))
            .await
    }
}

pub struct ConsoleOutputPage {
    driver: WebDriver,
}

impl Page for ConsoleOutputPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Console Output"
    }
}

impl FromDriver for ConsoleOutputPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl ConsoleOutputPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn console_text(&self) -> Result<String> {
        self.wait10()
            .text(&Locator::xpath("//pre[contains(@class, 'console-output')]"))
            .await
    }

    /// Poll until the log shows its final "Finished: ..." line.
    pub async fn finished_line(&self) -> Result<String> {
        let line = Locator::xpath("//pre[contains(@class, 'console-output')][contains(., 'Finished: ')]");
        let text = self.wait15().text(&line).await?;
        Ok(text
            .lines()
            .rev()
            .find(|l| l.starts_with("Finished: "))
            .unwrap_or_default()
            .to_string())
    }
}

pub struct EditBuildInformationPage {
    driver: WebDriver,
}

impl Page for EditBuildInformationPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Edit Build Information"
    }
}

impl EditBuildInformationPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn enter_display_name(self, name: &str) -> Result<Self> {
        self.wait5()
            .type_text(&Locator::xpath("//input[@name='displayName']"), name)
            .await?;
        Ok(self)
    }

    pub async fn enter_description(self, text: &str) -> Result<Self> {
        self.wait5()
            .type_text(&Locator::xpath("//textarea[@name='description']"), text)
            .await?;
        Ok(self)
    }

    pub async fn save(self) -> Result<BuildPage> {
        self.wait5().click(&submit_button()).await?;
        Ok(self.navigate())
    }
}

/// "Delete build ‘#N’" confirmation page.
pub struct DeleteBuildPage {
    driver: WebDriver,
    label: String,
}

impl Page for DeleteBuildPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        &self.label
    }

    fn heading_locator(&self) -> Locator {
        Locator::xpath("//form[@name='delete']//p | //h1")
    }
}

impl DeleteBuildPage {
    pub fn new(driver: WebDriver, number: u32) -> Self {
        Self {
            driver,
            label: format!("Delete build ‘#{}’", number),
        }
    }

    /// Confirm; Jenkins then shows the job page, which the caller names.
    pub async fn confirm<P: FromDriver>(self) -> Result<P> {
        self.wait5().click(&submit_button()).await?;
        Ok(self.navigate())
    }
}

/// Pipeline "Replay" editor.
pub struct ReplayPage {
    driver: WebDriver,
}

impl Page for ReplayPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Replay"
    }
}

impl ReplayPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn run(self) -> Result<BuildPage> {
        self.wait5().click(&task_named("Run")).await?;
        Ok(self.navigate())
    }
}

pub struct PipelineStepsPage {
    driver: WebDriver,
}

impl Page for PipelineStepsPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Pipeline Steps"
    }

    fn heading_locator(&self) -> Locator {
        Locator::xpath("//a[contains(text(), 'Pipeline Steps')]")
    }
}

impl PipelineStepsPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }
}

/// Entries of a build's dropdown, in the build history table or the breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOption {
    Changes,
    ConsoleOutput,
    EditBuildInformation,
    DeleteBuild,
    Replay,
    PipelineSteps,
    Workspaces,
}

impl BuildOption {
    pub const FREESTYLE: [BuildOption; 4] = [
        BuildOption::Changes,
        BuildOption::ConsoleOutput,
        BuildOption::EditBuildInformation,
        BuildOption::DeleteBuild,
    ];

    pub const PIPELINE: [BuildOption; 7] = [
        BuildOption::Changes,
        BuildOption::ConsoleOutput,
        BuildOption::EditBuildInformation,
        BuildOption::DeleteBuild,
        BuildOption::Replay,
        BuildOption::PipelineSteps,
        BuildOption::Workspaces,
    ];

    pub fn target(self, driver: WebDriver, build: u32) -> Box<dyn Page> {
        match self {
            BuildOption::Changes => Box::new(ChangesBuildPage::new(driver)),
            BuildOption::ConsoleOutput => Box::new(ConsoleOutputPage::new(driver)),
            BuildOption::EditBuildInformation => Box::new(EditBuildInformationPage::new(driver)),
            BuildOption::DeleteBuild => Box::new(DeleteBuildPage::new(driver, build)),
            BuildOption::Replay => Box::new(ReplayPage::new(driver)),
            BuildOption::PipelineSteps => Box::new(PipelineStepsPage::new(driver)),
            BuildOption::Workspaces => Box::new(WorkspacePage::of_build(driver)),
        }
    }

    /// Heading of the page the entry leads to.
    pub fn expected_text(self, job: &str, build: u32) -> String {
        match self {
            BuildOption::Changes => "Changes".to_string(),
            BuildOption::ConsoleOutput => "Console Output".to_string(),
            BuildOption::EditBuildInformation => "Edit Build Information".to_string(),
            BuildOption::DeleteBuild => format!("Delete build #{}", build),
            BuildOption::Replay => format!("Replay #{}", build),
            BuildOption::PipelineSteps => "Pipeline Steps".to_string(),
            BuildOption::Workspaces => format!("Workspaces for {} #{}", job, build),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_option_expected_text() {
        assert_eq!(BuildOption::DeleteBuild.expected_text("P", 1), "Delete build #1");
        assert_eq!(BuildOption::Replay.expected_text("P", 3), "Replay #3");
        assert_eq!(
            BuildOption::Workspaces.expected_text("Pipe", 1),
            "Workspaces for Pipe #1"
        );
    }

    #[test]
    fn test_pipeline_options_extend_freestyle() {
        for option in BuildOption::FREESTYLE {
            assert!(BuildOption::PIPELINE.contains(&option));
        }
        assert!(!BuildOption::FREESTYLE.contains(&BuildOption::Replay));
    }
}
