//! "Build History of Jenkins": the timeline widget above the build table.

use thirtyfour::prelude::*;

use super::builds::{BuildPage, ConsoleOutputPage};
use super::dropdown::DropdownMenu;
use super::main_page::Dashboard;
use super::{FromDriver, Page, PageExt};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};

pub struct BuildHistoryPage {
    driver: WebDriver,
}

impl Page for BuildHistoryPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Build History"
    }
}

impl FromDriver for BuildHistoryPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl Dashboard for BuildHistoryPage {}

fn table() -> Locator {
    Locator::xpath("//table[@id='projectStatus']")
}

fn rows() -> Locator {
    Locator::xpath("//table[@id='projectStatus']/tbody/tr")
}

fn build_badge(job: &str, number: u32) -> Locator {
    Locator::xpath(format!(
        "//table[@id='projectStatus']//a[contains(@class, 'jenkins-table__badge') and contains(@href, {})]",
        xpath_literal(&format!("/job/{}/{}/", job, number))
    ))
}

fn project_link(job: &str) -> Locator {
    Locator::xpath(format!(
        "//table[@id='projectStatus']//a[@href={}]",
        xpath_literal(&format!("/job/{}/", job))
    ))
}

fn bubble() -> Locator {
    Locator::xpath("//div[contains(@class, 'simileAjax-bubble-contentContainer')]")
}

impl BuildHistoryPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Rows of the build table. A matrix build counts once per configuration.
    pub async fn row_count(&self) -> Result<usize> {
        self.wait5().visible(&table()).await?;
        Ok(self.driver.find_all(rows().by()).await?.len())
    }

    pub async fn is_build_listed(&self, job: &str, number: u32) -> bool {
        self.wait10().is_visible(&build_badge(job, number)).await
    }

    /// Status column ("stable", "broken since this build") of the job's newest row.
    pub async fn status_of(&self, job: &str) -> Result<String> {
        self.driver.refresh().await?;
        let cell = Locator::xpath(format!(
            "//table[@id='projectStatus']/tbody/tr[.//a[@href={}]][1]/td[4]",
            xpath_literal(&format!("/job/{}/", job))
        ));
        self.wait10().text(&cell).await
    }

    pub async fn open_console(self, job: &str) -> Result<ConsoleOutputPage> {
        let link = Locator::xpath(format!(
            "//table[@id='projectStatus']//a[contains(@href, {}) and contains(@href, 'console')]",
            xpath_literal(&format!("/job/{}/", job))
        ));
        self.wait5().click(&link).await?;
        Ok(self.navigate())
    }

    pub async fn open_build(self, job: &str, number: u32) -> Result<BuildPage> {
        self.wait10().click(&build_badge(job, number)).await?;
        Ok(self.navigate())
    }

    pub async fn project_dropdown(&self, job: &str) -> Result<DropdownMenu> {
        DropdownMenu::attached_to(&self.driver, &project_link(job)).await
    }

    pub async fn build_dropdown(&self, job: &str, number: u32) -> Result<DropdownMenu> {
        DropdownMenu::attached_to(&self.driver, &build_badge(job, number)).await
    }

    // ------------------------------------------------------------------
    // Timeline
    // ------------------------------------------------------------------

    fn timeline_label(job: &str) -> Locator {
        Locator::xpath(format!(
            "//div[contains(@class, 'timeline-event-label') and contains(text(), {})]",
            xpath_literal(job)
        ))
    }

    pub async fn is_on_timeline(&self, job: &str) -> bool {
        self.wait10().is_visible(&Self::timeline_label(job)).await
    }

    /// Click the job's label on the timeline; opens its bubble.
    pub async fn open_timeline_bubble(self, job: &str) -> Result<Self> {
        self.driver.refresh().await?;
        self.wait10().click(&Self::timeline_label(job)).await?;
        self.wait10().visible(&bubble()).await?;
        Ok(self)
    }

    pub async fn bubble_text(&self) -> Result<String> {
        self.wait10().text(&bubble()).await
    }

    pub async fn close_bubble(self) -> Result<Self> {
        self.wait15()
            .click(&Locator::xpath(
                "//div[contains(@class, 'simileAjax-bubble-close')]",
            ))
            .await?;
        Ok(self)
    }

    pub async fn is_bubble_closed(&self) -> bool {
        self.wait5().gone(&bubble()).await.is_ok()
    }

    pub async fn open_build_from_bubble(self) -> Result<BuildPage> {
        self.wait10()
            .click(&Locator::xpath(
                "//div[contains(@class, 'simileAjax-bubble-contentContainer')]//a",
            ))
            .await?;
        Ok(self.navigate())
    }
}
