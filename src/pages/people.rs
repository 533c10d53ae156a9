//! People, user pages and the per-user "My Views".

use thirtyfour::prelude::*;

use super::main_page::{job_link, Dashboard};
use super::new_job::NewJobPage;
use super::{task_link, FromDriver, Page, PageExt};
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};

pub struct PeoplePage {
    driver: WebDriver,
}

impl Page for PeoplePage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "People"
    }
}

impl FromDriver for PeoplePage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl Dashboard for PeoplePage {}

fn user_link(id: &str) -> Locator {
    Locator::xpath(format!(
        "//table[@id='people']//a[contains(@href, {})]",
        xpath_literal(&format!("/user/{}/", id.to_lowercase()))
    ))
}

impl PeoplePage {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    pub async fn is_user_listed(&self, id: &str) -> bool {
        self.wait5().is_visible(&user_link(id)).await
    }

    pub async fn open_user(self, id: &str) -> Result<UserPage> {
        self.wait5().click(&user_link(id)).await?;
        Ok(self.navigate())
    }
}

/// A user's status page.
pub struct UserPage {
    driver: WebDriver,
}

impl Page for UserPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Manage Users"
    }
}

impl FromDriver for UserPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl UserPage {
    /// "Jenkins User ID: admin"
    pub async fn user_id_line(&self) -> Result<String> {
        self.wait2()
            .text(&Locator::xpath("//div[contains(text(), 'Jenkins User ID:')]"))
            .await
    }

    pub async fn click_builds(self) -> Result<UserBuildsPage> {
        self.wait5().click(&task_link("/builds")).await?;
        Ok(self.navigate())
    }

    pub async fn click_my_views(self) -> Result<MyViewsPage> {
        self.wait5().click(&task_link("/my-views")).await?;
        Ok(self.navigate())
    }
}

pub struct UserBuildsPage {
    driver: WebDriver,
}

impl Page for UserBuildsPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "Builds"
    }
}

impl FromDriver for UserBuildsPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl UserBuildsPage {
    pub async fn is_build_listed(&self, job: &str) -> bool {
        let link = Locator::xpath(format!(
            "//a[contains(@class, 'jenkins-table__link') and contains(@href, {})]",
            xpath_literal(&format!("/job/{}/", job))
        ));
        self.wait5().is_visible(&link).await
    }
}

/// "My Views" of the logged-in user; its "All" view mirrors the dashboard.
pub struct MyViewsPage {
    driver: WebDriver,
}

impl Page for MyViewsPage {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }

    fn menu_item_name(&self) -> &str {
        "My Views"
    }
}

impl FromDriver for MyViewsPage {
    fn from_driver(driver: WebDriver) -> Self {
        Self { driver }
    }
}

impl Dashboard for MyViewsPage {}

impl MyViewsPage {
    pub async fn click_create_a_job(self) -> Result<NewJobPage> {
        self.wait5()
            .click(&Locator::xpath("//div[@id='main-panel']//a[contains(@href, 'newJob')]"))
            .await?;
        Ok(self.navigate())
    }

    /// "This folder is empty" while the user has no jobs.
    pub async fn empty_state_heading(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='main-panel']//h2"))
            .await
    }

    pub async fn is_job_displayed(&self, name: &str) -> bool {
        self.wait2().is_visible(&job_link(name)).await
    }
}
