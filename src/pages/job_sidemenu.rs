//! Pages reached from a job's side menu.

use thirtyfour::prelude::*;

use crate::error::Result;
use crate::locator::Locator;
use crate::pages::{JobType, Page, PageExt};

pub struct ChangesPage {
    driver: WebDriver,
}

impl Page for ChangesPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Changes"
    }
}

impl ChangesPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Whole main panel, e.g. "Changes\nNo builds." for a fresh job.
    pub async fn panel_text(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='main-panel']"))
            .await
    }
}

/// Workspace browser. Jobs label the entry "Workspace", builds "Workspaces".
pub struct WorkspacePage {
    driver: WebDriver,
    label: &'static str,
}

impl Page for WorkspacePage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        self.label
    }
}

impl WorkspacePage {
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver,
            label: "Workspace",
        }
    }

    pub fn of_build(driver: WebDriver) -> Self {
        Self {
            driver,
            label: "Workspaces",
        }
    }

    pub async fn heading(&self) -> Result<String> {
        self.assert_text().await
    }
}

/// Pipeline stage view. The side menu calls it "Full Stage View", the job
/// dropdown just "Stage View".
pub struct FullStageViewPage {
    driver: WebDriver,
    label: &'static str,
}

impl Page for FullStageViewPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        self.label
    }

    fn heading_locator(&self) -> Locator {
        Locator::xpath("//h2")
    }
}

impl FullStageViewPage {
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver,
            label: "Full Stage View",
        }
    }

    pub fn in_dropdown(driver: WebDriver) -> Self {
        Self {
            driver,
            label: "Stage View",
        }
    }

    /// "<job> - Stage View"
    pub async fn heading(&self) -> Result<String> {
        self.assert_text().await
    }
}

/// Scan log, events and credentials pages of multibranch pipelines and
/// organization folders. Their headings repeat the task label.
pub struct FolderTaskPage {
    driver: WebDriver,
    label: String,
}

impl Page for FolderTaskPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        &self.label
    }
}

impl FolderTaskPage {
    pub fn new(driver: WebDriver, label: impl Into<String>) -> Self {
        Self {
            driver,
            label: label.into(),
        }
    }

    /// "Scan <kind> Log"
    pub fn scan_log(driver: WebDriver, job_type: JobType) -> Self {
        Self::new(driver, format!("Scan {} Log", job_type.label()))
    }

    /// "<kind> Events"
    pub fn events(driver: WebDriver, job_type: JobType) -> Self {
        Self::new(driver, format!("{} Events", job_type.label()))
    }

    pub fn credentials(driver: WebDriver) -> Self {
        Self::new(driver, "Credentials")
    }

    pub async fn heading(&self) -> Result<String> {
        self.assert_text().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_task_labels() {
        assert_eq!(
            format!("Scan {} Log", JobType::OrganizationFolder.label()),
            "Scan Organization Folder Log"
        );
        assert_eq!(
            format!("{} Events", JobType::MultibranchPipeline.label()),
            "Multibranch Pipeline Events"
        );
    }
}
