use std::marker::PhantomData;
use thirtyfour::prelude::*;

use super::{AnyJob, FolderLike, JobKind, JobType, Pipeline, ProjectPage};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};
use crate::pages::{submit_button, FromDriver, Page, PageExt};

/// The job configuration form.
pub struct ConfigPage<K> {
    driver: WebDriver,
    job_type: JobType,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Page for ConfigPage<K> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Configure"
    }

    fn heading_locator(&self) -> Locator {
        if self.job_type.is_buildable() {
            Locator::xpath("//div[@id='side-panel']//h1")
        } else {
            Locator::xpath("//ol[@id='breadcrumbs']/li[last()]")
        }
    }
}

impl<K: JobKind> FromDriver for ConfigPage<K> {
    fn from_driver(driver: WebDriver) -> Self {
        Self::with_type(driver, K::JOB_TYPE)
    }
}

impl ConfigPage<AnyJob> {
    pub fn of(driver: WebDriver, job_type: JobType) -> Self {
        Self::with_type(driver, job_type)
    }
}

fn enable_toggle() -> Locator {
    Locator::xpath("//label[@for='enable-disable-project']")
}

impl<K> ConfigPage<K> {
    pub(crate) fn with_type(driver: WebDriver, job_type: JobType) -> Self {
        Self {
            driver,
            job_type,
            _kind: PhantomData,
        }
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub async fn set_description(self, text: &str) -> Result<Self> {
        self.wait5()
            .type_text(&Locator::xpath("//textarea[@name='description']"), text)
            .await?;
        Ok(self)
    }

    pub async fn preview_description(&self) -> Result<String> {
        self.wait5()
            .click(&Locator::css("a.textarea-show-preview"))
            .await?;
        self.wait5()
            .text(&Locator::css("div.textarea-preview"))
            .await
    }

    /// Flip the Enabled/Disabled switch at the top of the form.
    pub async fn toggle_enabled(self) -> Result<Self> {
        self.wait5().click(&enable_toggle()).await?;
        Ok(self)
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        let label = self.wait5().text(&enable_toggle()).await?;
        Ok(label.trim() == "Enabled")
    }

    pub async fn save(self) -> Result<ProjectPage<K>> {
        self.wait5().click(&submit_button()).await?;
        Ok(ProjectPage::with_type(self.driver, self.job_type))
    }

    pub async fn apply(self) -> Result<Self> {
        self.wait5()
            .click(&Locator::xpath("//button[@name='Apply']"))
            .await?;
        Ok(self)
    }
}

impl<K: FolderLike> ConfigPage<K> {
    pub async fn set_display_name(self, name: &str) -> Result<Self> {
        self.wait5()
            .type_text(&Locator::xpath("//input[@name='_.displayNameOrNull']"), name)
            .await?;
        Ok(self)
    }
}

impl ConfigPage<Pipeline> {
    /// Fill the script editor from one of the bundled samples ("hello", "github-maven").
    pub async fn select_script_sample(self, value: &str) -> Result<Self> {
        let option = Locator::xpath(format!(
            "//div[@class='samples']/select/option[@value={}]",
            xpath_literal(value)
        ));
        self.wait5().click(&option).await?;
        Ok(self)
    }

    /// Type into the Ace script editor. Ace hides its textarea, so focus the
    /// editor and send keys to whatever took focus.
    pub async fn enter_script(self, script: &str) -> Result<Self> {
        self.wait5()
            .click(&Locator::css("#workflow-editor-1 .ace_content"))
            .await?;
        self.driver.active_element().await?.send_keys(script).await?;
        Ok(self)
    }
}
