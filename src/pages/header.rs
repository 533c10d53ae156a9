//! Header bar and breadcrumb, present on every page after login.

use thirtyfour::prelude::*;

use super::dropdown::DropdownMenu;
use super::manage::{ManageSection, ManageSectionPage};
use super::MainPage;
use crate::config::{WAIT_2, WAIT_5};
use crate::error::{Result, UiTestError};
use crate::locator::{hover, Locator, Wait};

pub struct Header {
    driver: WebDriver,
}

impl Header {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    fn wait(&self) -> Wait<'_> {
        Wait::new(&self.driver, WAIT_5)
    }

    pub async fn click_logo(self) -> Result<MainPage> {
        self.wait().click(&Locator::id("jenkins-head-icon")).await?;
        Ok(MainPage::new(self.driver))
    }

    /// Name of the logged-in user as shown in the header.
    pub async fn user_name(&self) -> Result<String> {
        self.wait()
            .text(&Locator::xpath("//a[contains(@href, '/user/')]/span"))
            .await
    }

    pub async fn logout(self) -> Result<()> {
        self.wait()
            .click(&Locator::xpath("//a[@href='/logout']"))
            .await
    }
}

/// The `Dashboard > job > build` trail under the header.
pub struct Breadcrumb {
    driver: WebDriver,
}

impl Breadcrumb {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    fn items() -> Locator {
        Locator::xpath("//ol[@id='breadcrumbs']/li[a]")
    }

    fn item_link(position: usize) -> Locator {
        Locator::xpath(format!("(//ol[@id='breadcrumbs']/li[a])[{}]/a", position))
    }

    pub async fn click_dashboard(self) -> Result<MainPage> {
        Wait::new(&self.driver, WAIT_2)
            .click(&Self::item_link(1))
            .await?;
        Ok(MainPage::new(self.driver))
    }

    /// Breadcrumb items joined the way they render: `Dashboard > admin > My Views`.
    /// Separator items carry no text and are skipped.
    pub async fn full_text(&self) -> Result<String> {
        let mut parts = Vec::new();
        for item in Wait::new(&self.driver, WAIT_2)
            .all_visible(&Locator::xpath("//ol[@id='breadcrumbs']/li"))
            .await?
        {
            let text = item.text().await?;
            let text = text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }
        Ok(parts.join(" > "))
    }

    /// Open the dropdown attached to the breadcrumb item at `position` (1-based).
    pub async fn item_dropdown(&self, position: usize) -> Result<DropdownMenu> {
        DropdownMenu::attached_to(&self.driver, &Self::item_link(position)).await
    }

    pub async fn dashboard_dropdown(&self) -> Result<DropdownMenu> {
        self.item_dropdown(1).await
    }

    /// Dropdown of the job (or user) right after `Dashboard`.
    pub async fn job_dropdown(&self) -> Result<DropdownMenu> {
        self.item_dropdown(2).await
    }

    /// Dropdown of the last build of a job page trail.
    pub async fn build_dropdown(&self) -> Result<DropdownMenu> {
        let count = self.driver.find_all(Self::items().by()).await?.len();
        if count < 3 {
            return Err(UiTestError::NotFound(
                "breadcrumb has no build item".to_string(),
            ));
        }
        self.item_dropdown(count).await
    }

    /// `Dashboard > Manage Jenkins > section` through the nested submenu.
    pub async fn select_manage_section(&self, section: ManageSection) -> Result<ManageSectionPage> {
        self.dashboard_dropdown().await?;
        let manage = Locator::xpath(
            "//div[@id='breadcrumb-menu-target']//li/a[span[text()='Manage Jenkins']]",
        );
        let elem = Wait::new(&self.driver, WAIT_2).visible(&manage).await?;
        hover(&self.driver, &elem).await?;

        let submenu = DropdownMenu::opened(
            self.driver.clone(),
            Locator::xpath(
                "//div[@id='breadcrumb-menu-target']//li[a/span[text()='Manage Jenkins']]//div//li/a/span",
            ),
        )
        .await?;
        submenu
            .select(ManageSectionPage::new(self.driver.clone(), section))
            .await
    }
}
