use std::marker::PhantomData;
use thirtyfour::prelude::*;

use super::{JobKind, JobType, ProjectPage};
use crate::error::Result;
use crate::locator::Locator;
use crate::pages::{submit_button, FromDriver, Page, PageExt, RenameErrorPage};

/// "Rename": one field and a submit button.
pub struct RenamePage<K> {
    driver: WebDriver,
    job_type: JobType,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Page for RenamePage<K> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Rename"
    }
}

impl<K: JobKind> FromDriver for RenamePage<K> {
    fn from_driver(driver: WebDriver) -> Self {
        Self::with_type(driver, K::JOB_TYPE)
    }
}

impl<K: JobKind> RenamePage<K> {
    pub fn new(driver: WebDriver) -> Self {
        Self::from_driver(driver)
    }
}

impl<K> RenamePage<K> {
    pub(crate) fn with_type(driver: WebDriver, job_type: JobType) -> Self {
        Self {
            driver,
            job_type,
            _kind: PhantomData,
        }
    }

    pub async fn enter_new_name(self, name: &str) -> Result<Self> {
        self.wait5()
            .type_text(&Locator::xpath("//input[@name='newName']"), name)
            .await?;
        Ok(self)
    }

    pub async fn submit(self) -> Result<ProjectPage<K>> {
        self.wait5().click(&submit_button()).await?;
        Ok(ProjectPage::with_type(self.driver, self.job_type))
    }

    /// Submit a name Jenkins refuses.
    pub async fn submit_expecting_error(self) -> Result<RenameErrorPage> {
        self.wait5().click(&submit_button()).await?;
        Ok(self.navigate())
    }
}
