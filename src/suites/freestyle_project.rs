use thirtyfour::prelude::*;

use super::{
    create, create_and_configure, create_job_and_go_home, open, rename, Suite, WRONG_CHARACTERS,
};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    BuildStep, Dashboard, Freestyle, JobType, MainPage, PageExt, ParameterType, PostBuildAction,
    ProjectPage, TimePeriod,
};
use crate::runner::{TestClass, TestMethod};

const FREESTYLE_NAME: &str = "FREESTYLE_NAME";
const NEW_FREESTYLE_NAME: &str = "NEW_FREESTYLE_NAME";
const DESCRIPTION_TEXT: &str = "DESCRIPTION_TEXT";
const NEW_DESCRIPTION_TEXT: &str = "NEW_DESCRIPTION_TEXT";
const DISPLAY_NAME: &str = "FreestyleDisplayName";
const GITHUB_URL: &str = "https://github.com/ArtyomDulya/TestRepo";

pub fn class() -> Suite {
    TestClass::new("FreestyleProjectTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, FREESTYLE_NAME, JobType::FreestyleProject).await?;
            expect_true(
                main.is_job_displayed(FREESTYLE_NAME).await,
                "freestyle project not on the dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromDropDownMenu", |driver: WebDriver| async move {
                let page = MainPage::new(driver)
                    .rename_from_dropdown::<Freestyle>(FREESTYLE_NAME)
                    .await?
                    .enter_new_name(NEW_FREESTYLE_NAME)
                    .await?
                    .submit()
                    .await?;
                expect_eq(
                    page.heading().await?,
                    JobType::FreestyleProject.heading(NEW_FREESTYLE_NAME),
                    "heading after rename",
                )?;
                Ok(())
            })
            .depends_on(&["testCreate"]),
        )
        .test(
            TestMethod::new("testRenameFromSideMenu", |driver: WebDriver| async move {
                let page = rename::<Freestyle>(&driver, NEW_FREESTYLE_NAME, FREESTYLE_NAME).await?;
                expect_eq(
                    page.heading().await?,
                    JobType::FreestyleProject.heading(FREESTYLE_NAME),
                    "heading after renaming back",
                )?;
                Ok(())
            })
            .depends_on(&["testRenameFromDropDownMenu"]),
        )
        .test(
            TestMethod::new("testRenameToTheCurrentNameAndGetError", |driver: WebDriver| async move {
                let message = MainPage::new(driver)
                    .rename_from_dropdown::<Freestyle>(FREESTYLE_NAME)
                    .await?
                    .enter_new_name(FREESTYLE_NAME)
                    .await?
                    .submit_expecting_error()
                    .await?
                    .error_message()
                    .await?;
                expect_eq(
                    message.as_str(),
                    "The new name is the same as the current name.",
                    "rename error",
                )?;
                Ok(())
            })
            .depends_on(&["testRenameFromSideMenu"]),
        )
        .test(TestMethod::with_data(
            "testRenameWithInvalidData",
            WRONG_CHARACTERS.to_vec(),
            |driver: WebDriver, (input, echoed): (&'static str, &'static str)| async move {
                let message = create::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .click_rename()
                    .await?
                    .enter_new_name(input)
                    .await?
                    .submit_expecting_error()
                    .await?
                    .error_message()
                    .await?;
                expect_eq(message, format!("‘{}’ is an unsafe character", echoed), "rename error")?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testRenameWithDotInsteadName", |driver: WebDriver| async move {
            let message = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .click_rename()
                .await?
                .enter_new_name(".")
                .await?
                .submit_expecting_error()
                .await?
                .error_message()
                .await?;
            expect_eq(message.as_str(), "“.” is not an allowed name", "rename error")?;
            Ok(())
        }))
        .test(TestMethod::new("testCreateBuildNowFromDropDown", |driver: WebDriver| async move {
            create_job_and_go_home(&driver, FREESTYLE_NAME, JobType::FreestyleProject)
                .await?
                .build_now_from_dropdown(FREESTYLE_NAME)
                .await?;
            let finished = open::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .open_build(1)
                .await?
                .click_console_output()
                .await?
                .finished_line()
                .await?;
            expect_eq(finished.as_str(), "Finished: SUCCESS", "console output")?;

            let status = MainPage::new(driver.clone())
                .header()
                .click_logo()
                .await?
                .last_build_status(FREESTYLE_NAME)
                .await?;
            expect_eq(status.as_str(), "Success", "last build icon")?;
            Ok(())
        }))
        .test(TestMethod::new("testCreateBuildNowFromSideMenu", |driver: WebDriver| async move {
            let build = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?;
            expect_true(
                build.is_build_heading_displayed().await,
                "The build of the Freestyle Project is not created",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testPresenceOfBuildLinksAfterBuild", |driver: WebDriver| async move {
            create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_now(1)
                .await?
                .click_last_build()
                .await?
                .click_console_output()
                .await?
                .finished_line()
                .await?;
            let permalinks = open::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .permalinks_count()
                .await?;
            expect_eq(permalinks, 4, "permalinks after one successful build")?;
            Ok(())
        }))
        .test(TestMethod::new("testEditBuildInformationFromLastBuild", |driver: WebDriver| async move {
            let build = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_now(1)
                .await?
                .click_last_build()
                .await?
                .click_edit_build_information()
                .await?
                .enter_display_name(DISPLAY_NAME)
                .await?
                .enter_description(DESCRIPTION_TEXT)
                .await?
                .save()
                .await?;
            let heading = build.heading().await?;
            expect_true(
                heading.contains(DISPLAY_NAME),
                &format!("'{}' should show the display name", heading),
            )?;
            expect_eq(build.description().await?.as_str(), DESCRIPTION_TEXT, "build description")?;
            Ok(())
        }))
        .test(TestMethod::new("testDeleteBuildFromLastBuild", |driver: WebDriver| async move {
            let project: ProjectPage<Freestyle> = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_now(1)
                .await?
                .click_last_build()
                .await?
                .click_delete_build(1)
                .await?
                .confirm()
                .await?;
            expect_true(!project.is_build_listed(1).await, "build #1 still listed")?;
            Ok(())
        }))
        .test(TestMethod::new("testDisableFromProjectPage", |driver: WebDriver| async move {
            let page = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .disable()
                .await?;
            expect_eq(
                page.disabled_message().await?.as_str(),
                "This project is currently disabled",
                "disabled banner",
            )?;
            expect_eq(page.enable_button_text().await?.as_str(), "Enable", "enable button")?;

            let labels = page
                .header()
                .click_logo()
                .await?
                .job_menu_labels(FREESTYLE_NAME)
                .await?;
            expect_true(
                !labels.iter().any(|l| l == "Build Now"),
                "'Build Now' option is present in drop-down menu",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEnableFromProjectPage", |driver: WebDriver| async move {
                let page = open::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .enable()
                    .await?;
                expect_eq(
                    page.disable_button_text().await?.as_str(),
                    "Disable Project",
                    "disable button",
                )?;
                let config = page.click_configure().await?;
                expect_true(config.is_enabled().await?, "'Enabled' is not displayed")?;

                let status = config
                    .header()
                    .click_logo()
                    .await?
                    .last_build_status(FREESTYLE_NAME)
                    .await?;
                expect_eq(status.as_str(), "Not built", "last build icon")?;
                Ok(())
            })
            .depends_on(&["testDisableFromProjectPage"]),
        )
        .test(TestMethod::new("testPreviewDescriptionFromProjectPage", |driver: WebDriver| async move {
            let preview = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .preview_description(DESCRIPTION_TEXT)
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION_TEXT, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let page = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .click_configure()
                .await?
                .set_description(DESCRIPTION_TEXT)
                .await?
                .save()
                .await?;
            expect_eq(page.description_text().await?.as_str(), DESCRIPTION_TEXT, "description")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEditDescription", |driver: WebDriver| async move {
                let page = open::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .add_description(NEW_DESCRIPTION_TEXT)
                    .await?;
                expect_eq(
                    page.description_text().await?.as_str(),
                    NEW_DESCRIPTION_TEXT,
                    "edited description",
                )?;
                Ok(())
            })
            .depends_on(&["testAddDescriptionFromConfigurationPage"]),
        )
        .test(TestMethod::new("testNavigateToChangePage", |driver: WebDriver| async move {
            let text = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .click_changes()
                .await?
                .panel_text()
                .await?;
            expect_true(
                text.contains("No builds."),
                "Changes page does not report the missing builds",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testNavigateToWorkspaceFromProjectPage", |driver: WebDriver| async move {
            let heading = create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .click_workspace()
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Error: no workspace", "workspace heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testCancelDeletingFromDropDownMenu", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, FREESTYLE_NAME, JobType::FreestyleProject)
                .await?
                .delete_from_dropdown(FREESTYLE_NAME, JobType::FreestyleProject)
                .await?
                .cancel()
                .await?
                .header()
                .click_logo()
                .await?;
            expect_true(
                main.is_job_displayed(FREESTYLE_NAME).await,
                "The name of the Freestyle project is not shown",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromDropDown", |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .delete_from_dropdown(FREESTYLE_NAME, JobType::FreestyleProject)
                    .await?
                    .accept()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
                let empty = main.click_my_views().await?.empty_state_heading().await?;
                expect_eq(empty.as_str(), "This folder is empty", "My Views")?;
                Ok(())
            })
            .depends_on(&["testCancelDeletingFromDropDownMenu"]),
        )
        .test(TestMethod::new("testCancelDeletingFromSideMenu", |driver: WebDriver| async move {
            let main = create::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                .await?
                .click_delete()
                .await?
                .cancel()
                .await?
                .header()
                .click_logo()
                .await?;
            expect_true(
                main.is_job_displayed(NEW_FREESTYLE_NAME).await,
                "The Freestyle project's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromSideMenu", |driver: WebDriver| async move {
                let main = open::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                    .await?
                    .click_delete()
                    .await?
                    .accept()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
                Ok(())
            })
            .depends_on(&["testCancelDeletingFromSideMenu"]),
        )
        .test(TestMethod::new("testSetParametersToDiscardOldBuilds", |driver: WebDriver| async move {
            let config = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .set_days_to_keep(3)
                .await?
                .set_max_builds_to_keep(5)
                .await?
                .save()
                .await?
                .click_configure()
                .await?;
            expect_eq(config.days_to_keep().await?.as_str(), "3", "days to keep builds")?;
            expect_eq(config.max_builds_to_keep().await?.as_str(), "5", "max # of builds to keep")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddingAProjectOnGitHubToTheFreestyleProject", |driver: WebDriver| async move {
            let labels = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .set_github_project(GITHUB_URL)
                .await?
                .save()
                .await?
                .header()
                .click_logo()
                .await?
                .job_menu_labels(FREESTYLE_NAME)
                .await?;
            expect_true(
                labels.iter().any(|l| l == "GitHub"),
                "'GitHub' is missing from the job drop-down menu",
            )?;
            let url = MainPage::new(driver.clone())
                .header()
                .click_logo()
                .await?
                .configure_from_dropdown::<Freestyle>(FREESTYLE_NAME)
                .await?
                .github_project_url()
                .await?;
            expect_eq(url.as_str(), GITHUB_URL, "GitHub project url")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddBooleanParameterTheFreestyleProject", |driver: WebDriver| async move {
            let parameters = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                .await?
                .toggle_parameterized()
                .await?
                .add_parameter(ParameterType::Boolean)
                .await?
                .set_parameter_name("Boolean")
                .await?
                .set_parameter_checked_by_default()
                .await?
                .save()
                .await?
                .click_build_with_parameters()
                .await?;
            expect_true(
                parameters.is_boolean_parameter_checked().await?,
                "The 'This build requires parameters:' checkbox is unchecked",
            )?;
            parameters.build().await?.wait_for_build(1).await?;
            Ok(())
        }))
        .test(TestMethod::new("testAddChoiceParameter", |driver: WebDriver| async move {
            let name = "Choice parameter name test";
            let description = "Choice parameter desc test";
            let choices = ["choice one", "choice two", "choice three"];
            let parameters = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .toggle_parameterized()
                .await?
                .add_parameter(ParameterType::Choice)
                .await?
                .set_parameter_name(name)
                .await?
                .set_parameter_choices(&choices)
                .await?
                .set_parameter_description(description)
                .await?
                .save()
                .await?
                .click_build_with_parameters()
                .await?;
            expect_true(
                parameters.is_parameter_displayed(name).await,
                "The Parameter Name is not displayed in the 'This build requires parameters:' section",
            )?;
            expect_eq(parameters.parameter_description().await?.as_str(), description, "parameter description")?;
            expect_eq(
                parameters.choices().await?,
                choices.iter().map(|c| c.to_string()).collect(),
                "choices",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testSetRateLimitForBuilds", |driver: WebDriver| async move {
            let period = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                .await?
                .toggle_throttle_builds()
                .await?
                .set_throttle_period(TimePeriod::Week)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .throttle_period()
                .await?;
            expect_eq(period.as_str(), TimePeriod::Week.label(), "throttle time period")?;
            Ok(())
        }))
        .test(TestMethod::new("testAllowParallelBuilds", |driver: WebDriver| async move {
            let config = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                .await?
                .toggle_concurrent_builds()
                .await?
                .save()
                .await?
                .click_configure()
                .await?;
            expect_true(
                config.is_concurrent_builds_checked().await?,
                "The 'Execute concurrent builds if necessary' checkbox is unchecked",
            )?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testSetPeriodForJenkinsToWaitBeforeActuallyStartingTriggeredBuild",
            |driver: WebDriver| async move {
                let quiet_period = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                    .await?
                    .open_advanced()
                    .await?
                    .set_quiet_period(10)
                    .await?
                    .save()
                    .await?
                    .click_configure()
                    .await?
                    .open_advanced()
                    .await?
                    .quiet_period()
                    .await?;
                expect_eq(quiet_period.as_str(), "10", "quiet period")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testSetNumberOfCountForJenkinsToCheckOutFromTheSCMUntilItSucceeds",
            |driver: WebDriver| async move {
                let retry_count = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                    .await?
                    .open_advanced()
                    .await?
                    .set_retry_count(5)
                    .await?
                    .save()
                    .await?
                    .click_configure()
                    .await?
                    .open_advanced()
                    .await?
                    .retry_count()
                    .await?;
                expect_eq(retry_count.as_str(), "5", "SCM checkout retry count")?;
                Ok(())
            },
        ))
        .test(TestMethod::new(
            "testEnableJenkinsToBlockBuildsWhenUpstreamProjectIsBuilding",
            |driver: WebDriver| async move {
                let config = create_and_configure::<Freestyle>(&driver, NEW_FREESTYLE_NAME)
                    .await?
                    .open_advanced()
                    .await?
                    .toggle_block_when_upstream_building()
                    .await?
                    .save()
                    .await?
                    .click_configure()
                    .await?
                    .open_advanced()
                    .await?;
                expect_true(
                    config.is_block_when_upstream_building_checked().await?,
                    "The 'Block build when upstream project is building' checkbox is unchecked",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testUseCustomWorkspaceFromConfigureGeneralAdvanced", |driver: WebDriver| async move {
            let directory = "My directory";
            let console = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .open_advanced()
                .await?
                .set_custom_workspace(directory)
                .await?
                .save()
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?
                .click_console_output()
                .await?;
            console.finished_line().await?;
            expect_true(
                console.console_text().await?.contains(directory),
                "The directory is not used!",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDisplayName", |driver: WebDriver| async move {
            let page = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .open_advanced()
                .await?
                .set_advanced_display_name(NEW_FREESTYLE_NAME)
                .await?
                .save()
                .await?;
            expect_eq(
                page.heading().await?,
                JobType::FreestyleProject.heading(NEW_FREESTYLE_NAME),
                "heading with display name",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddRepositoryFromSourceCodeManagement", |driver: WebDriver| async move {
            let url = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .set_git_repository(GITHUB_URL)
                .await?
                .save()
                .await?
                .header()
                .click_logo()
                .await?
                .configure_from_dropdown::<Freestyle>(FREESTYLE_NAME)
                .await?
                .git_repository()
                .await?;
            expect_eq(url.as_str(), GITHUB_URL, "repository url")?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testConfigureBuildTriggersBuildAfterOtherProjectsAreBuilt",
            |driver: WebDriver| async move {
                create_job_and_go_home(&driver, NEW_FREESTYLE_NAME, JobType::FreestyleProject).await?;
                create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .build_after(NEW_FREESTYLE_NAME)
                    .await?
                    .save()
                    .await?
                    .header()
                    .click_logo()
                    .await?
                    .build_now_from_dropdown(NEW_FREESTYLE_NAME)
                    .await?;
                let downstream = open::<Freestyle>(&driver, FREESTYLE_NAME).await?;
                downstream.wait_for_build(1).await?;
                let cause = downstream.open_build(1).await?.build_cause().await?;
                expect_true(
                    cause.starts_with(&format!("Started by upstream project {}", NEW_FREESTYLE_NAME)),
                    &format!("unexpected build cause '{}'", cause),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testBuildStepsOptions", |driver: WebDriver| async move {
            let options = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_step_options()
                .await?;
            expect_eq(
                options,
                BuildStep::ALL.iter().map(|s| s.label().to_string()).collect(),
                "build step options",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testBuildStepsExecuteShell", |driver: WebDriver| async move {
            let command = "echo Hello";
            let console = MainPage::new(driver.clone())
                .click_new_item()
                .await?
                .enter_item_name(FREESTYLE_NAME)
                .await?
                .select_job_type(JobType::FreestyleProject)
                .await?
                .click_ok::<Freestyle>()
                .await?
                .add_shell_step(command)
                .await?
                .save()
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?
                .click_console_output()
                .await?;
            let finished = console.finished_line().await?;
            expect_true(
                console.console_text().await?.contains(command),
                "Command wasn't run OR test was run on the Windows",
            )?;
            expect_eq(finished.as_str(), "Finished: SUCCESS", "console output")?;
            Ok(())
        }))
        .test(TestMethod::new("testBuildStepsExecuteWindowsBatchCommand", |driver: WebDriver| async move {
            let console = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_windows_batch_step("echo Hello")
                .await?
                .save()
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?
                .click_console_output()
                .await?;
            console.finished_line().await?;
            expect_true(
                console.console_text().await?.contains("$ cmd /c call"),
                "Command wasn't run",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testBuildStepsInvokeMavenGoalsTargets", |driver: WebDriver| async move {
            let goals = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_maven_step("clean")
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .maven_goals()
                .await?;
            expect_eq(goals.as_str(), "clean", "maven goals")?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testConfigurePostBuildActionsAggregateDownStreamTestResults",
            |driver: WebDriver| async move {
                let build = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .add_post_build_action(PostBuildAction::AggregateDownstream)
                    .await?
                    .save()
                    .await?
                    .build_now(1)
                    .await?
                    .click_last_build()
                    .await?;
                expect_true(
                    build.panel_text().await?.contains("Aggregated Test Result (no tests)"),
                    "The 'Aggregated Test Result' summary is not displayed on Build page",
                )?;
                let href = build.aggregated_test_report_href().await?;
                expect_true(
                    href.contains(&format!("/job/{}/lastBuild/aggregatedTestReport", FREESTYLE_NAME)),
                    &format!("'{}' does not point at the aggregated test report", href),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testConfigurePostBuildActionArchiveArtifacts", |driver: WebDriver| async move {
            let text = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_post_build_action(PostBuildAction::ArchiveArtifacts)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .post_build_action_text(PostBuildAction::ArchiveArtifacts)
                .await?;
            expect_true(
                text.starts_with("Archive the artifacts") && text.contains("Files to archive"),
                &format!("unexpected 'Archive the artifacts' block: {}", text),
            )?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testConfigurePostBuildActionBuildOtherProjects",
            |driver: WebDriver| async move {
                create_job_and_go_home(&driver, NEW_FREESTYLE_NAME, JobType::FreestyleProject).await?;
                create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .add_post_build_action(PostBuildAction::BuildOtherProjects)
                    .await?
                    .set_projects_to_build(NEW_FREESTYLE_NAME)
                    .await?
                    .save()
                    .await?
                    .build_now(1)
                    .await?;
                let downstream = open::<Freestyle>(&driver, NEW_FREESTYLE_NAME).await?;
                downstream.wait_for_build(1).await?;
                let cause = downstream.open_build(1).await?.build_cause().await?;
                expect_true(
                    cause.starts_with(&format!("Started by upstream project {}", FREESTYLE_NAME)),
                    &format!("unexpected build cause '{}'", cause),
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testAddGitPublisherInPostBuildActions", |driver: WebDriver| async move {
            let text = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_post_build_action(PostBuildAction::GitPublisher)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .post_build_action_text(PostBuildAction::GitPublisher)
                .await?;
            expect_true(
                text.starts_with("Git Publisher"),
                &format!("unexpected 'Git Publisher' block: {}", text),
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddEmailNotificationToPostBuildActions", |driver: WebDriver| async move {
            let email = "email@email.com";
            let recipients = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_post_build_action(PostBuildAction::EmailNotification)
                .await?
                .set_email_recipients(email)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .email_recipients()
                .await?;
            expect_eq(recipients.as_str(), email, "e-mail recipients")?;
            Ok(())
        }))
        .test(TestMethod::new("testSetGitHubCommitStatusToPostBuildActions", |driver: WebDriver| async move {
            let context = create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .add_post_build_action(PostBuildAction::GitHubCommitStatus)
                .await?
                .set_commit_status_context(FREESTYLE_NAME)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .commit_status_context()
                .await?;
            expect_eq(context.as_str(), FREESTYLE_NAME, "commit status context")?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testDeleteWorkspaceWhenBuildDonePostBuildActions",
            |driver: WebDriver| async move {
                create_and_configure::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .add_post_build_action(PostBuildAction::DeleteWorkspace)
                    .await?
                    .save()
                    .await?
                    .build_now(1)
                    .await?
                    .open_build(1)
                    .await?
                    .click_console_output()
                    .await?
                    .finished_line()
                    .await?;
                let heading = open::<Freestyle>(&driver, FREESTYLE_NAME)
                    .await?
                    .click_workspace()
                    .await?
                    .heading()
                    .await?;
                expect_eq(heading.as_str(), "Error: no workspace", "workspace heading")?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testKeepThisBuildForever", |driver: WebDriver| async move {
            create::<Freestyle>(&driver, FREESTYLE_NAME)
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?
                .keep_forever()
                .await?;
            let project = open::<Freestyle>(&driver, FREESTYLE_NAME).await?;
            let labels = project.build_dropdown(1).await?.labels().await?;
            expect_eq(
                labels,
                vec!["Changes", "Console Output", "Edit Build Information"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                "build menu of a kept build",
            )?;
            expect_true(project.is_build_locked(1).await, "The lock icon is not displayed")?;
            Ok(())
        }))
}
