use std::marker::PhantomData;
use thirtyfour::prelude::*;

use super::{JobType, ProjectPage};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};
use crate::pages::{submit_button, Page, PageExt};

/// "Move": pick a destination folder.
pub struct MovePage<K> {
    driver: WebDriver,
    job_type: JobType,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Page for MovePage<K> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Move"
    }
}

impl<K> MovePage<K> {
    pub(crate) fn with_type(driver: WebDriver, job_type: JobType) -> Self {
        Self {
            driver,
            job_type,
            _kind: PhantomData,
        }
    }

    /// Choose a top-level folder as destination.
    pub async fn select_folder(self, folder: &str) -> Result<Self> {
        let option = Locator::xpath(format!(
            "//select[@name='destination']/option[@value={}]",
            xpath_literal(&format!("/{}", folder))
        ));
        self.wait5().click(&option).await?;
        Ok(self)
    }

    pub async fn confirm(self) -> Result<ProjectPage<K>> {
        self.wait5().click(&submit_button()).await?;
        Ok(ProjectPage::with_type(self.driver, self.job_type))
    }
}
