//! The bundled UI test classes.
//!
//! Each module exposes `class()`, a `TestClass<WebDriver>` whose methods run
//! against a logged-in session on an empty Jenkins (see `runner`).

pub mod breadcrumb;
pub mod build_history;
pub mod create_error;
pub mod create_job;
pub mod folder;
pub mod freestyle_project;
pub mod multi_configuration;
pub mod multibranch_pipeline;
pub mod organization_folder;
pub mod pipeline;

use thirtyfour::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::pages::{AnyJob, ConfigPage, JobKind, MainPage, PageExt, ProjectPage};
use crate::pages::{Dashboard, JobType};
use crate::runner::TestClass;

pub type Suite = TestClass<WebDriver>;

/// Rename input and the character Jenkins echoes back in its error (HTML-escaped).
pub(crate) const WRONG_CHARACTERS: [(&str, &str); 14] = [
    ("!", "!"),
    ("@", "@"),
    ("#", "#"),
    ("$", "$"),
    ("%", "%"),
    ("^", "^"),
    ("&", "&amp;"),
    ("*", "*"),
    ("?", "?"),
    ("|", "|"),
    (">", "&gt;"),
    ("<", "&lt;"),
    ("[", "["),
    ("]", "]"),
];

/// Every class, in the order a full run executes them.
pub fn all() -> Vec<Suite> {
    vec![
        breadcrumb::class(),
        create_job::class(),
        create_error::class(),
        freestyle_project::class(),
        pipeline::class(),
        multi_configuration::class(),
        folder::class(),
        multibranch_pipeline::class(),
        organization_folder::class(),
        build_history::class(),
    ]
}

/// Create `name` through New Item and save its default configuration.
/// Lands on the new job's page.
pub async fn create_job(driver: &WebDriver, name: &str, job_type: JobType) -> Result<ProjectPage<AnyJob>> {
    let page = MainPage::new(driver.clone())
        .click_new_item()
        .await?
        .enter_item_name(name)
        .await?
        .select_job_type(job_type)
        .await?
        .click_ok_as(job_type)
        .await?
        .save()
        .await?;
    debug!("Created {:?} '{}'", job_type, name);
    Ok(page)
}

/// `create_job` with the kind known at compile time.
pub async fn create<K: JobKind>(driver: &WebDriver, name: &str) -> Result<ProjectPage<K>> {
    let page = MainPage::new(driver.clone())
        .click_new_item()
        .await?
        .enter_item_name(name)
        .await?
        .select_job_type(K::JOB_TYPE)
        .await?
        .click_ok::<K>()
        .await?
        .save()
        .await?;
    debug!("Created {:?} '{}'", K::JOB_TYPE, name);
    Ok(page)
}

/// Create a job and open its configuration form again from the job page.
pub async fn create_and_configure<K: JobKind>(driver: &WebDriver, name: &str) -> Result<ConfigPage<K>> {
    create::<K>(driver, name).await?.click_configure().await
}

/// Create a job and return to the dashboard.
pub async fn create_job_and_go_home(driver: &WebDriver, name: &str, job_type: JobType) -> Result<MainPage> {
    let page = create_job(driver, name, job_type).await?;
    page.header().click_logo().await
}

/// Go back to the dashboard and open an existing job from it.
pub async fn open<K: JobKind>(driver: &WebDriver, name: &str) -> Result<ProjectPage<K>> {
    MainPage::new(driver.clone())
        .header()
        .click_logo()
        .await?
        .open_job::<K>(name)
        .await
}

/// Rename through the job's side menu and land on the renamed job.
pub async fn rename<K: JobKind>(driver: &WebDriver, from: &str, to: &str) -> Result<ProjectPage<K>> {
    let page = open::<K>(driver, from)
        .await?
        .click_rename()
        .await?
        .enter_new_name(to)
        .await?
        .submit()
        .await?;
    debug!("Renamed '{}' to '{}'", from, to);
    Ok(page)
}
