//! Creating every job type from each page that offers a way in.

use thirtyfour::prelude::*;

use super::Suite;
use crate::error::{expect_true, Result};
use crate::pages::{Dashboard, JobType, MainPage, NewJobPage, PageExt};
use crate::runner::{TestClass, TestMethod};

fn job_types() -> Vec<(JobType, &'static str)> {
    vec![
        (JobType::FreestyleProject, "FREESTYLE_NAME"),
        (JobType::Pipeline, "PIPELINE_NAME"),
        (JobType::MultiConfigurationProject, "MULTI_CONFIGURATION_NAME"),
        (JobType::Folder, "FOLDER_NAME"),
        (JobType::MultibranchPipeline, "MULTIBRANCH_PIPELINE_NAME"),
        (JobType::OrganizationFolder, "ORGANIZATION_FOLDER_NAME"),
    ]
}

/// Fill in the new item form, press OK and leave the configuration unsaved.
async fn fill_and_go_home(page: NewJobPage, job_type: JobType, name: &str) -> Result<MainPage> {
    page.enter_item_name(name)
        .await?
        .select_job_type(job_type)
        .await?
        .click_ok_as(job_type)
        .await?
        .header()
        .click_logo()
        .await
}

async fn expect_on_dashboard(main: &MainPage, name: &str) -> Result<()> {
    expect_true(
        main.is_job_displayed(name).await,
        &format!("'{}' not displayed on the dashboard", name),
    )
}

async fn expect_on_my_views(main: MainPage, name: &str) -> Result<()> {
    let views = main.click_my_views().await?;
    expect_true(
        views.is_job_displayed(name).await,
        &format!("'{}' not displayed on My Views", name),
    )
}

pub fn class() -> Suite {
    TestClass::new("CreateJobTest")
        .test(TestMethod::with_data(
            "testCreateFromCreateAJob",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver).click_create_a_job().await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromNewItem",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let main = MainPage::new(driver)
                    .click_new_item()
                    .await?
                    .enter_item_name(name)
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .click_ok_as(job_type)
                    .await?
                    .save()
                    .await?
                    .header()
                    .click_logo()
                    .await?;
                expect_on_dashboard(&main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromPeoplePage",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver)
                    .click_people()
                    .await?
                    .click_new_item()
                    .await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromBuildHistoryPage",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver)
                    .click_build_history()
                    .await?
                    .click_new_item()
                    .await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromManageJenkinsPage",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver)
                    .click_manage_jenkins()
                    .await?
                    .click_new_item()
                    .await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromMyViewsCreateAJob",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver)
                    .click_my_views()
                    .await?
                    .click_create_a_job()
                    .await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                expect_on_my_views(main, name).await?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateFromMyViewsNewItem",
            job_types(),
            |driver: WebDriver, (job_type, name): (JobType, &'static str)| async move {
                let new_job = MainPage::new(driver)
                    .click_my_views()
                    .await?
                    .click_new_item()
                    .await?;
                let main = fill_and_go_home(new_job, job_type, name).await?;
                expect_on_dashboard(&main, name).await?;
                expect_on_my_views(main, name).await?;
                Ok(())
            },
        ))
}
