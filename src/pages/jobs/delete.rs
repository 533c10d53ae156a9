use thirtyfour::prelude::*;
use tracing::debug;

use super::JobType;
use crate::config::WAIT_2;
use crate::error::Result;
use crate::locator::wait_for_alert;
use crate::pages::{submit_button, MainPage, Page, PageExt};

/// How Jenkins asks before deleting an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStyle {
    /// Browser `confirm()` dialog.
    Alert,
    /// Separate page with a "Yes" button.
    ConfirmationPage,
}

/// The prompt shown after choosing "Delete ..." for a job.
///
/// Accepting lands on the dashboard; cancelling returns to `Back`, the page
/// the delete was started from.
pub struct DeleteConfirmation<Back> {
    driver: WebDriver,
    job_type: JobType,
    back: Back,
}

impl<Back: Page> Page for DeleteConfirmation<Back> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        self.job_type.delete_label()
    }
}

impl<Back: Page> DeleteConfirmation<Back> {
    pub fn new(driver: WebDriver, job_type: JobType, back: Back) -> Self {
        Self {
            driver,
            job_type,
            back,
        }
    }

    pub fn style(&self) -> DeleteStyle {
        self.job_type.delete_style()
    }

    /// Alert text, or the confirmation page heading.
    pub async fn prompt_text(&self) -> Result<String> {
        match self.style() {
            DeleteStyle::Alert => wait_for_alert(&self.driver, WAIT_2).await,
            DeleteStyle::ConfirmationPage => self.assert_text().await,
        }
    }

    pub async fn accept(self) -> Result<MainPage> {
        match self.style() {
            DeleteStyle::Alert => {
                wait_for_alert(&self.driver, WAIT_2).await?;
                self.driver.accept_alert().await?;
            }
            DeleteStyle::ConfirmationPage => {
                self.wait5().click(&submit_button()).await?;
            }
        }
        debug!("Deleted {:?}", self.job_type);
        Ok(MainPage::new(self.driver))
    }

    pub async fn cancel(self) -> Result<Back> {
        match self.style() {
            DeleteStyle::Alert => {
                wait_for_alert(&self.driver, WAIT_2).await?;
                self.driver.dismiss_alert().await?;
            }
            DeleteStyle::ConfirmationPage => {
                self.driver.back().await?;
            }
        }
        Ok(self.back)
    }
}
