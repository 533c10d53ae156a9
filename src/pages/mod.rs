//! Page objects for the Jenkins UI.
//!
//! A page object wraps the driver handle and the locators of one rendered
//! view. Actions return the page object of the view they lead to, so a test
//! reads as a chain of transitions. Page objects hold the driver and what the
//! caller told them (job type, build number), never anything read back from
//! the browser; constructing one never touches it.

pub mod build_history;
pub mod builds;
pub mod dropdown;
pub mod header;
pub mod job_sidemenu;
pub mod jobs;
pub mod main_page;
pub mod manage;
pub mod new_job;
pub mod people;

use std::future::Future;
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::config::{WAIT_10, WAIT_15, WAIT_2, WAIT_5};
use crate::error::Result;
use crate::locator::{wait_for_alert, xpath_literal, Locator, Wait};
use header::{Breadcrumb, Header};

pub use build_history::BuildHistoryPage;
pub use builds::{
    BuildOption, BuildPage, ChangesBuildPage, ConsoleOutputPage, DeleteBuildPage,
    EditBuildInformationPage, PipelineStepsPage, ReplayPage,
};
pub use dropdown::{DropdownMenu, MenuSource};
pub use job_sidemenu::{ChangesPage, FolderTaskPage, FullStageViewPage, WorkspacePage};
pub use jobs::{
    AnyJob, BuildStep, BuildWithParametersPage, ConfigPage, DeleteConfirmation, Folder, Freestyle,
    JobKind, JobOption, JobType, MovePage, MultiConfiguration, MultibranchPipeline,
    OrganizationFolder, ParameterType, Pipeline, PostBuildAction, ProjectPage, RenamePage,
    TimePeriod, BRANCH_SOURCES, SCAN_INTERVALS,
};
pub use main_page::{Dashboard, MainPage};
pub use manage::{ManageJenkinsPage, ManageSection, ManageSectionPage};
pub use new_job::NewJobPage;
pub use people::{MyViewsPage, PeoplePage, UserBuildsPage, UserPage};

/// The capability set shared by every page.
pub trait Page: Send + Sync {
    fn driver(&self) -> &WebDriver;

    /// Label of this page inside dropdowns, breadcrumb menus and side menus.
    fn menu_item_name(&self) -> &str {
        ""
    }

    /// Element whose text identifies the page once it has rendered.
    fn heading_locator(&self) -> Locator {
        Locator::xpath("//h1")
    }
}

/// Pages that can be built from nothing but a driver handle.
pub trait FromDriver: Page + Sized {
    fn from_driver(driver: WebDriver) -> Self;
}

/// Behavior every page inherits: waits, header, breadcrumb, alerts.
pub trait PageExt: Page {
    fn wait(&self, budget: Duration) -> Wait<'_> {
        Wait::new(self.driver(), budget)
    }

    fn wait2(&self) -> Wait<'_> {
        self.wait(WAIT_2)
    }

    fn wait5(&self) -> Wait<'_> {
        self.wait(WAIT_5)
    }

    fn wait10(&self) -> Wait<'_> {
        self.wait(WAIT_10)
    }

    fn wait15(&self) -> Wait<'_> {
        self.wait(WAIT_15)
    }

    fn header(&self) -> Header {
        Header::new(self.driver().clone())
    }

    fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb::new(self.driver().clone())
    }

    /// Continue as a different page type on the same driver.
    fn navigate<T: FromDriver>(&self) -> T
    where
        Self: Sized,
    {
        T::from_driver(self.driver().clone())
    }

    /// Text of the element that identifies this page.
    fn assert_text(&self) -> impl Future<Output = Result<String>> + Send
    where
        Self: Sized,
    {
        async move { self.wait5().text(&self.heading_locator()).await }
    }

    fn page_title(&self) -> impl Future<Output = Result<String>> + Send
    where
        Self: Sized,
    {
        async move { Ok(self.driver().title().await?) }
    }

    fn current_url(&self) -> impl Future<Output = Result<String>> + Send
    where
        Self: Sized,
    {
        async move { Ok(self.driver().current_url().await?.to_string()) }
    }

    /// Breadcrumb entry containing `name`.
    fn breadcrumb_text(&self, name: &str) -> impl Future<Output = Result<String>> + Send
    where
        Self: Sized,
    {
        let locator = Locator::xpath(format!(
            "//ol[@id='breadcrumbs']//a[contains(text(), {})]",
            xpath_literal(name)
        ));
        async move { self.wait2().text(&locator).await }
    }

    /// Text of the JavaScript alert the last action raised.
    fn alert_text(&self) -> impl Future<Output = Result<String>> + Send
    where
        Self: Sized,
    {
        async move { wait_for_alert(self.driver(), WAIT_2).await }
    }

    /// Follow the side-menu task labelled with `target`'s menu item name.
    fn open_task<P: Page>(&self, target: P) -> impl Future<Output = Result<P>> + Send
    where
        Self: Sized,
    {
        let link = task_named(target.menu_item_name());
        async move {
            self.wait5().click(&link).await?;
            Ok(target)
        }
    }

    fn refresh(self) -> impl Future<Output = Result<Self>> + Send
    where
        Self: Sized,
    {
        async move {
            self.driver().refresh().await?;
            Ok(self)
        }
    }
}

impl<P: Page + ?Sized> PageExt for P {}

/// Data providers pick their target page at runtime.
impl<P: Page + ?Sized> Page for Box<P> {
    fn driver(&self) -> &WebDriver {
        (**self).driver()
    }

    fn menu_item_name(&self) -> &str {
        (**self).menu_item_name()
    }

    fn heading_locator(&self) -> Locator {
        (**self).heading_locator()
    }
}

/// Jenkins' generic error page: "Error" heading plus one message paragraph.
/// Both a rejected new item and a rejected rename end here.
pub struct ErrorPage {
    driver: WebDriver,
}

pub type CreateItemErrorPage = ErrorPage;
pub type RenameErrorPage = ErrorPage;

impl Page for ErrorPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }
}

impl FromDriver for ErrorPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl ErrorPage {
    pub async fn error_message(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='main-panel']/p"))
            .await
    }

    /// Message of the "Oops!" page Jenkins shows on an unhandled exception.
    pub async fn problem_message(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='error-description']/h2"))
            .await
    }
}

/// Submit buttons on Jenkins forms all share this shape.
pub(crate) fn submit_button() -> Locator {
    Locator::xpath("//button[@name='Submit']")
}

/// Side-menu task link by its visible label.
pub(crate) fn task_named(label: &str) -> Locator {
    Locator::xpath(format!(
        "//div[@id='tasks']//a[normalize-space(.)={}]",
        xpath_literal(label)
    ))
}

/// Side-menu task link whose href contains `suffix`.
pub(crate) fn task_link(suffix: &str) -> Locator {
    Locator::xpath(format!(
        "//div[@id='tasks']//a[contains(@href, {})]",
        xpath_literal(suffix)
    ))
}
