use thirtyfour::prelude::*;

use super::jobs::{AnyJob, ConfigPage, JobKind, JobType};
use super::{CreateItemErrorPage, FromDriver, Page, PageExt};
use crate::error::Result;
use crate::locator::Locator;

/// "New Item": name field, item type list and the OK button.
pub struct NewJobPage {
    driver: WebDriver,
}

impl Page for NewJobPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "New Item"
    }

    fn heading_locator(&self) -> Locator {
        Locator::xpath("//label[@for='name']")
    }
}

impl FromDriver for NewJobPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

fn ok_button() -> Locator {
    Locator::id("ok-button")
}

impl NewJobPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn enter_item_name(self, name: &str) -> Result<Self> {
        self.wait5().type_text(&Locator::id("name"), name).await?;
        Ok(self)
    }

    pub async fn select_job_type(self, job_type: JobType) -> Result<Self> {
        let item = Locator::css(format!("li.{}", job_type.item_class()));
        self.wait5().click(&item).await?;
        Ok(self)
    }

    pub async fn is_ok_button_enabled(&self) -> Result<bool> {
        let button = self.wait2().present(&ok_button()).await?;
        Ok(button.is_enabled().await?)
    }

    /// Live validation message under the name field ("» ‘!’ is an unsafe character").
    pub async fn item_invalid_message(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::id("itemname-invalid"))
            .await
    }

    pub async fn item_name_required_message(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::id("itemname-required"))
            .await
    }

    async fn press_ok(&self) -> Result<()> {
        self.wait5().click(&ok_button()).await
    }

    pub async fn click_ok<K: JobKind>(self) -> Result<ConfigPage<K>> {
        self.press_ok().await?;
        Ok(self.navigate())
    }

    pub async fn click_ok_as(self, job_type: JobType) -> Result<ConfigPage<AnyJob>> {
        self.press_ok().await?;
        Ok(ConfigPage::of(self.driver, job_type))
    }

    /// Press OK for a name Jenkins rejects server-side.
    pub async fn click_ok_expecting_error(self) -> Result<CreateItemErrorPage> {
        self.press_ok().await?;
        Ok(self.navigate())
    }
}
