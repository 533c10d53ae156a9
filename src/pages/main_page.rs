//! The dashboard: job table plus the global side menu.

use std::future::Future;
use thirtyfour::prelude::*;
use tracing::debug;

use super::build_history::BuildHistoryPage;
use super::dropdown::DropdownMenu;
use super::jobs::{
    AnyJob, BuildWithParametersPage, ConfigPage, DeleteConfirmation, JobKind, JobType, MovePage,
    ProjectPage, RenamePage,
};
use super::manage::ManageJenkinsPage;
use super::new_job::NewJobPage;
use super::people::{MyViewsPage, PeoplePage};
use super::{task_link, FromDriver, Page, PageExt};
use crate::error::Result;
use crate::locator::{hover, xpath_literal, Locator};

/// Pages carrying the global side menu: New Item, People, Build History,
/// Manage Jenkins, My Views.
pub trait Dashboard: Page + Sized {
    fn click_new_item(self) -> impl Future<Output = Result<NewJobPage>> + Send {
        async move {
            self.wait5().click(&task_link("/view/all/newJob")).await?;
            Ok(self.navigate())
        }
    }

    fn click_people(self) -> impl Future<Output = Result<PeoplePage>> + Send {
        async move {
            self.wait5().click(&task_link("/asynchPeople/")).await?;
            Ok(self.navigate())
        }
    }

    fn click_build_history(self) -> impl Future<Output = Result<BuildHistoryPage>> + Send {
        async move {
            self.wait5().click(&task_link("/view/all/builds")).await?;
            Ok(self.navigate())
        }
    }

    fn click_manage_jenkins(self) -> impl Future<Output = Result<ManageJenkinsPage>> + Send {
        async move {
            self.wait5().click(&task_link("/manage")).await?;
            Ok(self.navigate())
        }
    }

    fn click_my_views(self) -> impl Future<Output = Result<MyViewsPage>> + Send {
        async move {
            self.wait5().click(&task_link("/me/my-views")).await?;
            Ok(self.navigate())
        }
    }
}

pub struct MainPage {
    driver: WebDriver,
}

impl Page for MainPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }
}

impl FromDriver for MainPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl Dashboard for MainPage {}

pub(crate) fn job_link(name: &str) -> Locator {
    Locator::xpath(format!(
        "//table[@id='projectstatus']//a[@href={}]",
        xpath_literal(&format!("job/{}/", name))
    ))
}

impl MainPage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// The "Create a job" call to action shown while the dashboard is empty.
    pub async fn click_create_a_job(self) -> Result<NewJobPage> {
        self.wait5()
            .click(&Locator::xpath("//a[@href='newJob']"))
            .await?;
        Ok(self.navigate())
    }

    // ------------------------------------------------------------------
    // Dashboard content
    // ------------------------------------------------------------------

    pub async fn is_welcome_displayed(&self) -> bool {
        self.wait5()
            .is_visible(&Locator::xpath("//h1[text()='Welcome to Jenkins!']"))
            .await
    }

    pub async fn is_job_displayed(&self, name: &str) -> bool {
        self.wait2().is_visible(&job_link(name)).await
    }

    /// Names in the job table, top to bottom.
    pub async fn job_names(&self) -> Result<Vec<String>> {
        let cells = self
            .wait5()
            .all_visible(&Locator::xpath(
                "//table[@id='projectstatus']//a[contains(@class, 'jenkins-table__link')]/span",
            ))
            .await?;
        let mut names = Vec::with_capacity(cells.len());
        for cell in cells {
            names.push(cell.text().await?);
        }
        Ok(names)
    }

    /// Tooltip of the last-build status icon in the job's row ("Success", "Not built").
    pub async fn last_build_status(&self, name: &str) -> Result<String> {
        let icon = Locator::xpath(format!(
            "//tr[@id={}]/td[1]//*[name()='svg']",
            xpath_literal(&format!("job_{}", name))
        ));
        let elem = self.wait5().visible(&icon).await?;
        Ok(elem.attr("tooltip").await?.unwrap_or_default())
    }

    /// Health report behind the weather icon of the job's row.
    pub async fn weather_tooltip(&self, name: &str) -> Result<String> {
        let icon = Locator::xpath(format!(
            "//tr[@id={}]/td[2]//*[name()='svg']",
            xpath_literal(&format!("job_{}", name))
        ));
        let elem = self.wait5().visible(&icon).await?;
        hover(&self.driver, &elem).await?;
        self.wait5()
            .text(&Locator::css("div.tippy-content"))
            .await
    }

    pub async fn open_job<K: JobKind>(self, name: &str) -> Result<ProjectPage<K>> {
        self.wait5().click(&job_link(name)).await?;
        Ok(self.navigate())
    }

    pub async fn open_job_of_type(self, name: &str, job_type: JobType) -> Result<ProjectPage<AnyJob>> {
        self.wait5().click(&job_link(name)).await?;
        Ok(ProjectPage::of(self.driver, job_type))
    }

    /// Schedule a build through the green arrow at the end of the job's row.
    pub async fn schedule_build(self, name: &str) -> Result<Self> {
        let arrow = Locator::xpath(format!(
            "//a[@href={}]",
            xpath_literal(&format!("job/{}/build?delay=0sec", name))
        ));
        self.wait5().click(&arrow).await?;
        debug!("Build scheduled for {}", name);
        Ok(self)
    }

    /// The row's arrow on a job that takes parameters leads to the parameter form.
    pub async fn schedule_parameterized_build<K: JobKind>(
        self,
        name: &str,
    ) -> Result<BuildWithParametersPage<K>> {
        let arrow = Locator::xpath(format!(
            "//a[contains(@href, {})]",
            xpath_literal(&format!("job/{}/build", name))
        ));
        self.wait5().click(&arrow).await?;
        Ok(self.navigate())
    }

    // ------------------------------------------------------------------
    // Job dropdown
    // ------------------------------------------------------------------

    pub async fn job_dropdown(&self, name: &str) -> Result<DropdownMenu> {
        DropdownMenu::attached_to(&self.driver, &job_link(name)).await
    }

    /// Entries of the job's dropdown, as rendered.
    pub async fn job_menu_labels(&self, name: &str) -> Result<Vec<String>> {
        self.job_dropdown(name).await?.labels().await
    }

    pub async fn configure_from_dropdown<K: JobKind>(self, name: &str) -> Result<ConfigPage<K>> {
        let menu = self.job_dropdown(name).await?;
        menu.select(ConfigPage::from_driver(self.driver.clone())).await
    }

    pub async fn rename_from_dropdown<K: JobKind>(self, name: &str) -> Result<RenamePage<K>> {
        let menu = self.job_dropdown(name).await?;
        menu.select(RenamePage::new(self.driver.clone())).await
    }

    pub async fn move_from_dropdown(self, name: &str, job_type: JobType) -> Result<MovePage<AnyJob>> {
        let menu = self.job_dropdown(name).await?;
        menu.select(MovePage::with_type(self.driver.clone(), job_type))
            .await
    }

    pub async fn delete_from_dropdown(
        self,
        name: &str,
        job_type: JobType,
    ) -> Result<DeleteConfirmation<MainPage>> {
        let menu = self.job_dropdown(name).await?;
        let driver = self.driver.clone();
        menu.select(DeleteConfirmation::new(driver, job_type, self))
            .await
    }

    pub async fn build_now_from_dropdown(self, name: &str) -> Result<Self> {
        let menu = self.job_dropdown(name).await?;
        menu.click_label("Build Now").await?;
        Ok(self)
    }
}
