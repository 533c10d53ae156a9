use std::marker::PhantomData;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use super::{JobKind, JobType, ProjectPage};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};
use crate::pages::{FromDriver, Page, PageExt};

/// "This build requires parameters": one form row per declared parameter.
pub struct BuildWithParametersPage<K> {
    driver: WebDriver,
    job_type: JobType,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Page for BuildWithParametersPage<K> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Build with Parameters"
    }
}

impl<K: JobKind> FromDriver for BuildWithParametersPage<K> {
    fn from_driver(driver: WebDriver) -> Self {
        Self::with_type(driver, K::JOB_TYPE)
    }
}

fn in_form(xpath: &str) -> Locator {
    Locator::xpath(format!("//form[@name='parameters']{}", xpath))
}

impl<K> BuildWithParametersPage<K> {
    pub(crate) fn with_type(driver: WebDriver, job_type: JobType) -> Self {
        Self {
            driver,
            job_type,
            _kind: PhantomData,
        }
    }

    pub async fn is_parameter_displayed(&self, name: &str) -> bool {
        let label = in_form(&format!(
            "//div[contains(@class, 'jenkins-form-label')][normalize-space(.)={}]",
            xpath_literal(name)
        ));
        self.wait5().is_visible(&label).await
    }

    /// Label of the boolean parameter's checkbox, i.e. its name.
    pub async fn boolean_parameter_name(&self) -> Result<String> {
        self.wait5()
            .text(&in_form("//input[@type='checkbox']/following-sibling::label"))
            .await
    }

    pub async fn is_boolean_parameter_checked(&self) -> Result<bool> {
        let input = self
            .wait5()
            .present(&in_form("//input[@type='checkbox']"))
            .await?;
        Ok(input.is_selected().await?)
    }

    pub async fn parameter_description(&self) -> Result<String> {
        self.wait5()
            .text(&in_form("//div[contains(@class, 'jenkins-form-description')]"))
            .await
    }

    /// Options of the choice parameter's select, in declaration order.
    pub async fn choices(&self) -> Result<Vec<String>> {
        let elem = self.wait5().visible(&in_form("//select")).await?;
        let mut choices = Vec::new();
        for option in SelectElement::new(&elem).await?.options().await? {
            choices.push(option.text().await?.trim().to_string());
        }
        Ok(choices)
    }

    /// Start the build with the values as shown.
    pub async fn build(self) -> Result<ProjectPage<K>> {
        self.wait5()
            .click(&in_form("//button[normalize-space(.)='Build']"))
            .await?;
        Ok(ProjectPage::with_type(self.driver, self.job_type))
    }
}
