//! "Build History of Jenkins": build table, timeline bubbles and the
//! dropdowns attached to project and build links.

use thirtyfour::prelude::*;

use super::{create, create_job_and_go_home, Suite};
use crate::error::{expect_eq, expect_true, Result};
use crate::pages::{
    BuildHistoryPage, BuildOption, Dashboard, JobOption, JobType, MainPage, Page, PageExt, Pipeline,
};
use crate::runner::{TestClass, TestMethod};

const FREESTYLE_NAME: &str = "FreestyleBuildHistory";
const PIPELINE_NAME: &str = "PipelineBuildHistory";
const MULTI_CONFIGURATION_NAME: &str = "MultiConfigurationBuildHistory";
const JOB_NAME: &str = "BUILD_PROJECT";

/// Create `name`, build it once from the dashboard and open Build History
/// once build #1 is listed.
async fn build_once(driver: &WebDriver, name: &str, job_type: JobType) -> Result<BuildHistoryPage> {
    let history = create_job_and_go_home(driver, name, job_type)
        .await?
        .schedule_build(name)
        .await?
        .click_build_history()
        .await?;
    expect_true(
        history.is_build_listed(name, 1).await,
        &format!("build #1 of '{}' not listed", name),
    )?;
    Ok(history)
}

/// Project-dropdown entries of a built multi-configuration project, with
/// the text each lands on.
fn multi_configuration_project_options() -> Vec<(JobOption, String)> {
    [
        JobOption::Changes,
        JobOption::Workspace,
        JobOption::Configure,
        JobOption::Delete,
        JobOption::Rename,
    ]
    .into_iter()
    .map(|option| {
        let expected = match option {
            JobOption::Workspace => {
                format!("Workspace of {} on Built-In Node", MULTI_CONFIGURATION_NAME)
            }
            _ => option.expected_text(JobType::MultiConfigurationProject, MULTI_CONFIGURATION_NAME),
        };
        (option, expected)
    })
    .collect()
}

fn pipeline_project_options() -> Vec<JobOption> {
    JobOption::PIPELINE
        .into_iter()
        .filter(|&o| o != JobOption::Move)
        .collect()
}

async fn select_project_option(
    history: BuildHistoryPage,
    name: &str,
    job_type: JobType,
    option: JobOption,
) -> Result<String> {
    let driver = history.driver().clone();
    let landed = history
        .project_dropdown(name)
        .await?
        .select(option.target(driver, job_type))
        .await?;
    let text = if option.reads_alert(job_type) {
        landed.alert_text().await?
    } else {
        landed.assert_text().await?
    };
    Ok(text)
}

pub fn class() -> Suite {
    TestClass::new("BuildHistoryTest")
        .test(TestMethod::new("testAllTypesOfProjectsIsDisplayedInTable", |driver: WebDriver| async move {
            create_job_and_go_home(&driver, MULTI_CONFIGURATION_NAME, JobType::MultiConfigurationProject).await?;
            create_job_and_go_home(&driver, FREESTYLE_NAME, JobType::FreestyleProject).await?;
            create_job_and_go_home(&driver, PIPELINE_NAME, JobType::Pipeline).await?;

            let history = MainPage::new(driver)
                .build_now_from_dropdown(MULTI_CONFIGURATION_NAME)
                .await?
                .build_now_from_dropdown(FREESTYLE_NAME)
                .await?
                .build_now_from_dropdown(PIPELINE_NAME)
                .await?
                .click_build_history()
                .await?;
            for name in [MULTI_CONFIGURATION_NAME, FREESTYLE_NAME, PIPELINE_NAME] {
                expect_true(history.is_build_listed(name, 1).await, &format!("'{}' not built", name))?;
            }
            // The matrix build adds a row for its default configuration.
            expect_eq(history.row_count().await?, 4, "rows in the build table")?;
            Ok(())
        }))
        .test(TestMethod::new("testConsoleOutputFreestyleBuild", |driver: WebDriver| async move {
            let console = build_once(&driver, FREESTYLE_NAME, JobType::FreestyleProject)
                .await?
                .open_console(FREESTYLE_NAME)
                .await?;
            expect_eq(console.assert_text().await?.as_str(), "Console Output", "page heading")?;
            let text = console.console_text().await?;
            expect_true(text.starts_with("Started by user"), "console starts with the cause")?;
            expect_true(
                text.contains(&format!("Building in workspace /var/jenkins_home/workspace/{}", FREESTYLE_NAME)),
                "console names the workspace",
            )?;
            expect_eq(console.finished_line().await?.as_str(), "Finished: SUCCESS", "result")?;
            Ok(())
        }))
        .test(TestMethod::new("testVerifyStatusBroken", |driver: WebDriver| async move {
            create::<Pipeline>(&driver, PIPELINE_NAME)
                .await?
                .click_configure()
                .await?
                .enter_script("Test")
                .await?
                .save()
                .await?;
            let history = build_once(&driver, PIPELINE_NAME, JobType::Pipeline).await?;
            expect_eq(
                history.status_of(PIPELINE_NAME).await?.as_str(),
                "broken since this build",
                "status column",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testPresenceProjectNameOnBuildHistoryTimeline", |driver: WebDriver| async move {
            let history = build_once(&driver, FREESTYLE_NAME, JobType::FreestyleProject).await?;
            expect_true(
                history.is_on_timeline(FREESTYLE_NAME).await,
                "Project name is not displayed from time line!",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testOpenBuildPopUpOfFreestyle", |driver: WebDriver| async move {
            let bubble = build_once(&driver, FREESTYLE_NAME, JobType::FreestyleProject)
                .await?
                .open_timeline_bubble(FREESTYLE_NAME)
                .await?
                .bubble_text()
                .await?;
            expect_true(
                bubble.contains(FREESTYLE_NAME),
                "The build pop up cannot be opened from timeline!",
            )?;
            Ok(())
        }))
        .test(TestMethod::with_data(
            "testCloseBuildPopUp",
            JobType::BUILDABLE.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let history = build_once(&driver, JOB_NAME, job_type)
                    .await?
                    .open_timeline_bubble(JOB_NAME)
                    .await?
                    .close_bubble()
                    .await?;
                expect_true(history.is_bubble_closed().await, "Bubble pop up window not closed!")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToBuildPageFromTimeline",
            JobType::BUILDABLE.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let build = build_once(&driver, JOB_NAME, job_type)
                    .await?
                    .open_timeline_bubble(JOB_NAME)
                    .await?
                    .open_build_from_bubble()
                    .await?;
                expect_true(
                    build.is_build_heading_displayed().await,
                    "Wrong page! The build page header text is not displayed!",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testDeleteBuild",
            JobType::BUILDABLE.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let rows = build_once(&driver, JOB_NAME, job_type)
                    .await?
                    .open_build(JOB_NAME, 1)
                    .await?
                    .click_delete_build(1)
                    .await?
                    .confirm::<MainPage>()
                    .await?
                    .header()
                    .click_logo()
                    .await?
                    .click_build_history()
                    .await?
                    .row_count()
                    .await?;
                expect_eq(rows, 0, "rows in the build table")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToOptionDropDownMenuForMultiConfigurationProject",
            multi_configuration_project_options(),
            |driver: WebDriver, (option, expected): (JobOption, String)| async move {
                let history =
                    build_once(&driver, MULTI_CONFIGURATION_NAME, JobType::MultiConfigurationProject).await?;
                let actual = select_project_option(
                    history,
                    MULTI_CONFIGURATION_NAME,
                    JobType::MultiConfigurationProject,
                    option,
                )
                .await?;
                expect_eq(actual, expected, &format!("{:?}", option))?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToPageFromDropDownPipelineProject",
            pipeline_project_options(),
            |driver: WebDriver, option: JobOption| async move {
                let history = build_once(&driver, PIPELINE_NAME, JobType::Pipeline).await?;
                let actual = select_project_option(history, PIPELINE_NAME, JobType::Pipeline, option).await?;
                expect_eq(
                    actual,
                    option.expected_text(JobType::Pipeline, PIPELINE_NAME),
                    &format!("{:?}", option),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToOptionBuildDropDownMenuForFreestyleProject",
            BuildOption::FREESTYLE.to_vec(),
            |driver: WebDriver, option: BuildOption| async move {
                let history = build_once(&driver, FREESTYLE_NAME, JobType::FreestyleProject).await?;
                let text = history
                    .build_dropdown(FREESTYLE_NAME, 1)
                    .await?
                    .select(option.target(driver.clone(), 1))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(text, option.expected_text(FREESTYLE_NAME, 1), &format!("{:?}", option))?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testNavigateToPageFromBuildDropDownPipelineProject",
            BuildOption::PIPELINE.to_vec(),
            |driver: WebDriver, option: BuildOption| async move {
                let history = build_once(&driver, PIPELINE_NAME, JobType::Pipeline).await?;
                let text = history
                    .build_dropdown(PIPELINE_NAME, 1)
                    .await?
                    .select(option.target(driver.clone(), 1))
                    .await?
                    .assert_text()
                    .await?;
                expect_eq(text, option.expected_text(PIPELINE_NAME, 1), &format!("{:?}", option))?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testClickBuildNowFromDropDown",
            JobType::BUILDABLE.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let history = build_once(&driver, JOB_NAME, job_type).await?;
                history.project_dropdown(JOB_NAME).await?.click_label("Build Now").await?;
                let history = history.refresh().await?;
                expect_true(
                    history.is_build_listed(JOB_NAME, 2).await,
                    "The new build is not displayed!",
                )?;
                Ok(())
            },
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_configuration_workspace_is_built() {
        let options = multi_configuration_project_options();
        let (_, workspace) = options
            .iter()
            .find(|(o, _)| *o == JobOption::Workspace)
            .unwrap();
        assert_eq!(
            workspace,
            "Workspace of MultiConfigurationBuildHistory on Built-In Node"
        );
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn test_pipeline_options_skip_move() {
        let options = pipeline_project_options();
        assert!(!options.contains(&JobOption::Move));
        assert!(options.contains(&JobOption::StageView));
    }
}
