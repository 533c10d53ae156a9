//! Navigation through the breadcrumb bar and its dropdowns.

use thirtyfour::prelude::*;

use super::{create_job, create_job_and_go_home, Suite};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    BuildOption, Dashboard, DeleteBuildPage, FromDriver, JobOption, JobType, MainPage,
    ManageJenkinsPage, ManageSection, MultiConfiguration, MyViewsPage, NewJobPage, PageExt,
    PeoplePage, ProjectPage,
};
use crate::runner::{TestClass, TestMethod};

const PROJECT_NAME: &str = "JOB";
const FOLDER_NAME: &str = "FOLDER";

/// Every (job type, dropdown entry) pair the job breadcrumb offers.
fn job_options() -> Vec<(JobType, JobOption)> {
    JobType::ALL
        .iter()
        .flat_map(|&job_type| {
            JobOption::for_job_type(job_type)
                .iter()
                .map(move |&option| (job_type, option))
        })
        .collect()
}

fn build_options() -> Vec<(JobType, BuildOption)> {
    let mut rows = Vec::new();
    for option in BuildOption::FREESTYLE {
        rows.push((JobType::FreestyleProject, option));
        rows.push((JobType::MultiConfigurationProject, option));
    }
    rows.extend(BuildOption::PIPELINE.iter().map(|&o| (JobType::Pipeline, o)));
    rows
}

pub fn class() -> Suite {
    TestClass::new("BreadcrumbTest")
        .test(TestMethod::new(
            "testNavigateToManageJenkinsFromDropDown",
            |driver: WebDriver| async move {
                let heading = MainPage::new(driver.clone())
                    .breadcrumb()
                    .dashboard_dropdown()
                    .await?
                    .select(ManageJenkinsPage::new(driver))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(heading.as_str(), "Manage Jenkins", "page heading")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToManageJenkinsSubsection",
            ManageSection::PAGES.to_vec(),
            |driver: WebDriver, section: ManageSection| async move {
                let text = MainPage::new(driver)
                    .breadcrumb()
                    .select_manage_section(section)
                    .await?
                    .assert_text()
                    .await?;
                expect_true(
                    text.starts_with(section.expected_text()),
                    &format!("'{}' should start with '{}'", text, section.expected_text()),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToManageJenkinsSubsectionFromSideMenu",
            ManageSection::PAGES.to_vec(),
            |driver: WebDriver, section: ManageSection| async move {
                let text = MainPage::new(driver)
                    .click_manage_jenkins()
                    .await?
                    .select_section_from_breadcrumb(section)
                    .await?
                    .assert_text()
                    .await?;
                expect_true(
                    text.starts_with(section.expected_text()),
                    &format!("'{}' should start with '{}'", text, section.expected_text()),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testDashboardDropdownMenu",
            |driver: WebDriver| async move {
                let labels = MainPage::new(driver)
                    .breadcrumb()
                    .dashboard_dropdown()
                    .await?
                    .labels()
                    .await?;
                expect_eq(
                    labels,
                    vec!["New Item", "People", "Build History", "Manage Jenkins", "My Views"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    "dashboard menu",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testReturnToDashboardPageFromProjectPage",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let main = create_job(&driver, PROJECT_NAME, job_type)
                    .await?
                    .breadcrumb()
                    .click_dashboard()
                    .await?;
                expect_true(
                    main.is_job_displayed(PROJECT_NAME).await,
                    "job listed on the dashboard",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testNavigateToPeoplePageFromBuildHistoryPage",
            |driver: WebDriver| async move {
                let heading = MainPage::new(driver.clone())
                    .click_build_history()
                    .await?
                    .breadcrumb()
                    .dashboard_dropdown()
                    .await?
                    .select(PeoplePage::new(driver))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(heading.as_str(), "People", "page heading")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testReturnToDashboardPageFromPeoplePage",
            |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .click_people()
                    .await?
                    .breadcrumb()
                    .click_dashboard()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' shown")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testReturnToDashboardPageFromBuildHistoryPage",
            |driver: WebDriver| async move {
                let title = MainPage::new(driver)
                    .click_build_history()
                    .await?
                    .breadcrumb()
                    .click_dashboard()
                    .await?
                    .page_title()
                    .await?;
                expect_eq(title.as_str(), "Dashboard [Jenkins]", "window title")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testReturnToDashboardPageFromMyViewsPage",
            |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .click_my_views()
                    .await?
                    .breadcrumb()
                    .click_dashboard()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' shown")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testReturnToDashboardPageFromManageJenkinsPage",
            |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .click_manage_jenkins()
                    .await?
                    .breadcrumb()
                    .click_dashboard()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' shown")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToMyViewsPageFromConfigurationPage",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let trail = create_job(&driver, PROJECT_NAME, job_type)
                    .await?
                    .breadcrumb()
                    .dashboard_dropdown()
                    .await?
                    .select(MyViewsPage::from_driver(driver))
                    .await?
                    .breadcrumb()
                    .full_text()
                    .await?;
                expect_eq(trail.as_str(), "Dashboard > admin > My Views > All", "breadcrumb")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testNavigateToNewItemPageFromMyViewsPage",
            |driver: WebDriver| async move {
                let heading = MainPage::new(driver.clone())
                    .click_my_views()
                    .await?
                    .breadcrumb()
                    .dashboard_dropdown()
                    .await?
                    .select(NewJobPage::new(driver))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(heading.as_str(), "Enter an item name", "page heading")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToJobPagesFromDropdownOnBreadcrumb",
            job_options(),
            |driver: WebDriver, (job_type, option): (JobType, JobOption)| async move {
                if option.needs_folder() {
                    create_job_and_go_home(&driver, FOLDER_NAME, JobType::Folder).await?;
                }
                let page = create_job(&driver, PROJECT_NAME, job_type).await?;
                let landed = page
                    .job_dropdown()
                    .await?
                    .select(option.target(driver.clone(), job_type))
                    .await?;
                let actual = if option.reads_alert(job_type) {
                    landed.alert_text().await?
                } else {
                    landed.assert_text().await?
                };
                expect_eq(
                    actual,
                    option.expected_text(job_type, PROJECT_NAME),
                    &format!("{:?} of {:?}", option, job_type),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToBuildPagesFromDropdownOnBreadcrumb",
            build_options(),
            |driver: WebDriver, (job_type, option): (JobType, BuildOption)| async move {
                let text = create_job(&driver, PROJECT_NAME, job_type)
                    .await?
                    .build_now(1)
                    .await?
                    .click_last_build()
                    .await?
                    .build_dropdown()
                    .await?
                    .select(option.target(driver.clone(), 1))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(
                    text,
                    option.expected_text(PROJECT_NAME, 1),
                    &format!("{:?} of {:?} build", option, job_type),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testSubmenuDeleteMultiConfigBuild",
            |driver: WebDriver| async move {
                create_job_and_go_home(&driver, PROJECT_NAME, JobType::MultiConfigurationProject)
                    .await?
                    .schedule_build(PROJECT_NAME)
                    .await?;
                let build = MainPage::new(driver.clone())
                    .open_job::<MultiConfiguration>(PROJECT_NAME)
                    .await?
                    .click_last_build()
                    .await?;
                let project: ProjectPage<MultiConfiguration> = build
                    .build_dropdown()
                    .await?
                    .select(DeleteBuildPage::new(driver, 1))
                    .await?
                    .confirm()
                    .await?;
                expect_true(!project.is_build_listed(1).await, "build #1 gone")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testBuildNowFromDropdownOnBreadcrumb",
            JobType::BUILDABLE.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let page = create_job(&driver, PROJECT_NAME, job_type).await?;
                page.job_dropdown().await?.click_label("Build Now").await?;
                page.refresh().await?.wait_for_build(1).await?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testReloadConfigurationFromDiskOfManageJenkinsSubmenu",
            |driver: WebDriver| async move {
                let page = MainPage::new(driver.clone())
                    .breadcrumb()
                    .select_manage_section(ManageSection::ReloadConfiguration)
                    .await?;
                let text = page.alert_text().await?;
                driver.dismiss_alert().await?;
                expect_eq(
                    text.as_str(),
                    ManageSection::ReloadConfiguration.expected_text(),
                    "alert text",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testNavigateToPluginsPageFromDropDown",
            |driver: WebDriver| async move {
                let text = MainPage::new(driver)
                    .breadcrumb()
                    .select_manage_section(ManageSection::Plugins)
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(text.as_str(), "Plugins", "page heading")?;
                Ok(())
            },
        ))
}
