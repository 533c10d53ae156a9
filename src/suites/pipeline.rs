use thirtyfour::prelude::*;

use super::{create, create_and_configure, create_job_and_go_home, open, rename, Suite};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    ConfigPage, FromDriver, JobType, MainPage, PageExt, ParameterType, Pipeline, PipelineStepsPage,
    ReplayPage, WorkspacePage,
};
use crate::runner::{TestClass, TestMethod};

const NAME: &str = "PIPELINE_NAME";
const NEW_NAME: &str = "NEW_PIPELINE_NAME";
const DESCRIPTION: &str = "DESCRIPTION";
const NEW_DESCRIPTION: &str = "NEW_DESCRIPTION";
const GITHUB_URL: &str = "https://github.com/ArtyomDulya/TestRepo";

pub fn class() -> Suite {
    TestClass::new("PipelineTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::Pipeline).await?;
            expect_true(main.is_job_displayed(NAME).await, "pipeline not on the dashboard")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromDropDown", |driver: WebDriver| async move {
                let page = MainPage::new(driver)
                    .rename_from_dropdown::<Pipeline>(NAME)
                    .await?
                    .enter_new_name(NEW_NAME)
                    .await?
                    .submit()
                    .await?;
                expect_eq(page.heading().await?, JobType::Pipeline.heading(NEW_NAME), "heading")?;
                Ok(())
            })
            .depends_on(&["testCreate"]),
        )
        .test(
            TestMethod::new("testRenameFromSideMenu", |driver: WebDriver| async move {
                let page = rename::<Pipeline>(&driver, NEW_NAME, NAME).await?;
                expect_eq(page.heading().await?, JobType::Pipeline.heading(NAME), "heading")?;
                Ok(())
            })
            .depends_on(&["testRenameFromDropDown"]),
        )
        .test(
            TestMethod::new("testRenameToTheCurrentNameAndGetError", |driver: WebDriver| async move {
                let message = open::<Pipeline>(&driver, NAME)
                    .await?
                    .click_rename()
                    .await?
                    .enter_new_name(NAME)
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
        .test(TestMethod::new("testSelectHelloAndConsoleOutputSuccess", |driver: WebDriver| async move {
            let finished = create::<Pipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .select_script_sample("hello")
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
            expect_eq(finished.as_str(), "Finished: SUCCESS", "console output")?;
            Ok(())
        }))
        .test(TestMethod::new("testReplayBuild", |driver: WebDriver| async move {
            let build = create::<Pipeline>(&driver, NAME)
                .await?
                .build_now(1)
                .await?
                .click_last_build()
                .await?;
            build
                .open_task(ReplayPage::new(driver.clone()))
                .await?
                .run()
                .await?;
            let project = open::<Pipeline>(&driver, NAME).await?;
            project.wait_for_build(2).await?;
            Ok(())
        }))
        .test(TestMethod::new("testPipelineStepsBuildFromProjectPage", |driver: WebDriver| async move {
            let project = create::<Pipeline>(&driver, NAME).await?.build_now(1).await?;
            let heading = project
                .build_dropdown(1)
                .await?
                .select(PipelineStepsPage::new(driver.clone()))
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Pipeline Steps", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testWorkspacesBuildFromProjectPage", |driver: WebDriver| async move {
            let project = create::<Pipeline>(&driver, NAME).await?.build_now(1).await?;
            let heading = project
                .build_dropdown(1)
                .await?
                .select(WorkspacePage::of_build(driver.clone()))
                .await?
                .heading()
                .await?;
            expect_eq(heading, format!("Workspaces for {} #1", NAME), "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testFullStageViewFromSideMenu", |driver: WebDriver| async move {
            let heading = create::<Pipeline>(&driver, NAME)
                .await?
                .click_full_stage_view()
                .await?
                .heading()
                .await?;
            expect_eq(heading, format!("{} - Stage View", NAME), "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testDisableFromProjectPage", |driver: WebDriver| async move {
            let status = create::<Pipeline>(&driver, NAME)
                .await?
                .disable()
                .await?
                .header()
                .click_logo()
                .await?
                .last_build_status(NAME)
                .await?;
            expect_eq(status.as_str(), "Disabled", "status icon")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEnableFromProjectPage", |driver: WebDriver| async move {
                let status = open::<Pipeline>(&driver, NAME)
                    .await?
                    .enable()
                    .await?
                    .header()
                    .click_logo()
                    .await?
                    .last_build_status(NAME)
                    .await?;
                expect_eq(status.as_str(), "Not built", "status icon")?;
                Ok(())
            })
            .depends_on(&["testDisableFromProjectPage"]),
        )
        .test(TestMethod::new("testDisableFromConfigurationPage", |driver: WebDriver| async move {
            let config = create::<Pipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .toggle_enabled()
                .await?;
            expect_true(!config.is_enabled().await?, "The Pipeline Project is enabled")?;
            let page = config.save().await?;
            expect_eq(page.enable_button_text().await?.as_str(), "Enable", "enable button")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEnableFromConfigurationPage", |driver: WebDriver| async move {
                let page = open::<Pipeline>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .toggle_enabled()
                    .await?
                    .save()
                    .await?;
                expect_eq(
                    page.disable_button_text().await?.as_str(),
                    "Disable Project",
                    "disable button",
                )?;
                Ok(())
            })
            .depends_on(&["testDisableFromConfigurationPage"]),
        )
        .test(TestMethod::new("testAccessConfigurationPageFromDropDown", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::Pipeline).await?;
            let heading = main
                .job_dropdown(NAME)
                .await?
                .select(ConfigPage::<Pipeline>::from_driver(driver.clone()))
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Configure", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testPreviewDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let preview = create::<Pipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_description(DESCRIPTION)
                .await?
                .preview_description()
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let page = create::<Pipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_description(DESCRIPTION)
                .await?
                .save()
                .await?;
            expect_eq(page.description_text().await?.as_str(), DESCRIPTION, "description")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEditDescriptionFromConfigurationPage", |driver: WebDriver| async move {
                let page = open::<Pipeline>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .set_description(NEW_DESCRIPTION)
                    .await?
                    .save()
                    .await?;
                expect_eq(page.description_text().await?.as_str(), NEW_DESCRIPTION, "description")?;
                Ok(())
            })
            .depends_on(&["testAddDescriptionFromConfigurationPage"]),
        )
        .test(TestMethod::new("testCancelDeletingFromSideMenu", |driver: WebDriver| async move {
            let main = create::<Pipeline>(&driver, NAME)
                .await?
                .click_delete()
                .await?
                .cancel()
                .await?
                .header()
                .click_logo()
                .await?;
            expect_true(
                main.is_job_displayed(NAME).await,
                "The Pipeline Project's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteFromSideMenu", |driver: WebDriver| async move {
                let prompt = open::<Pipeline>(&driver, NAME).await?.click_delete().await?;
                expect_eq(
                    prompt.prompt_text().await?,
                    JobType::Pipeline.delete_alert_text(),
                    "delete prompt",
                )?;
                let main = prompt.accept().await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
                Ok(())
            })
            .depends_on(&["testCancelDeletingFromSideMenu"]),
        )
        .test(TestMethod::new("testDiscardOldBuildsIsChecked", |driver: WebDriver| async move {
            let config = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .save()
                .await?
                .click_configure()
                .await?;
            expect_true(
                config.is_discard_old_builds_checked().await?,
                "The checkbox 'Discard old builds' is not checked",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testDiscardOldBuildsPipeline", |driver: WebDriver| async move {
            let page = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .set_days_to_keep(2)
                .await?
                .set_max_builds_to_keep(30)
                .await?
                .save()
                .await?;
            expect_eq(page.heading().await?, JobType::Pipeline.heading(NAME), "heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testDiscardOldBuildsParams", |driver: WebDriver| async move {
            let config = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .set_days_to_keep(7)
                .await?
                .set_max_builds_to_keep(5)
                .await?
                .save()
                .await?
                .click_configure()
                .await?;
            expect_eq(config.days_to_keep().await?.as_str(), "7", "days to keep builds")?;
            expect_eq(config.max_builds_to_keep().await?.as_str(), "5", "max # of builds to keep")?;
            Ok(())
        }))
        .test(TestMethod::new("testDiscardOldBuilds0Days", |driver: WebDriver| async move {
            let message = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .set_days_to_keep(0)
                .await?
                .set_max_builds_to_keep(0)
                .await?
                .days_to_keep_error()
                .await?;
            expect_eq(message.as_str(), "Not a positive integer", "validation message")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddingAProjectOnGithubToThePipelineProject", |driver: WebDriver| async move {
            let labels = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .set_github_project(GITHUB_URL)
                .await?
                .save()
                .await?
                .header()
                .click_logo()
                .await?
                .job_menu_labels(NAME)
                .await?;
            expect_true(
                labels.iter().any(|l| l == "GitHub"),
                "'GitHub' is missing from the job drop-down menu",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddBooleanParameterWithDescription", |driver: WebDriver| async move {
            let name = "Pipeline Boolean Parameter";
            let description = "Some boolean parameters here";
            let parameters = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_parameterized()
                .await?
                .add_parameter(ParameterType::Boolean)
                .await?
                .set_parameter_name(name)
                .await?
                .set_parameter_checked_by_default()
                .await?
                .set_parameter_description(description)
                .await?
                .save()
                .await?
                .header()
                .click_logo()
                .await?
                .schedule_parameterized_build::<Pipeline>(NAME)
                .await?;
            expect_eq(parameters.boolean_parameter_name().await?.as_str(), name, "parameter name")?;
            expect_true(parameters.is_boolean_parameter_checked().await?, "'Set by Default' was not kept")?;
            expect_eq(parameters.parameter_description().await?.as_str(), description, "parameter description")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddBooleanParameter", |driver: WebDriver| async move {
            let name = "Pipeline Boolean Parameter";
            let parameters = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .toggle_parameterized()
                .await?
                .add_parameter(ParameterType::Boolean)
                .await?
                .set_parameter_name(name)
                .await?
                .save()
                .await?
                .header()
                .click_logo()
                .await?
                .schedule_parameterized_build::<Pipeline>(NAME)
                .await?;
            expect_eq(parameters.boolean_parameter_name().await?.as_str(), name, "parameter name")?;
            expect_true(!parameters.is_boolean_parameter_checked().await?, "parameter checked without a default")?;
            Ok(())
        }))
        .test(TestMethod::new("testThisProjectIsParameterizedCheckAllParameters", |driver: WebDriver| async move {
            let types = create_job_and_go_home(&driver, NAME, JobType::Pipeline)
                .await?
                .configure_from_dropdown::<Pipeline>(NAME)
                .await?
                .toggle_parameterized()
                .await?
                .parameter_types()
                .await?;
            expect_eq(
                types,
                ParameterType::ALL.iter().map(|p| p.label().to_string()).collect(),
                "Add Parameter options",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDisplayName", |driver: WebDriver| async move {
            let page = create_and_configure::<Pipeline>(&driver, NAME)
                .await?
                .open_advanced()
                .await?
                .set_advanced_display_name(NEW_NAME)
                .await?
                .save()
                .await?;
            expect_eq(page.heading().await?, JobType::Pipeline.heading(NEW_NAME), "heading")?;
            expect_eq(page.full_project_name().await?.as_str(), NAME, "full project name")?;
            let names = page.header().click_logo().await?.job_names().await?;
            expect_true(
                names.iter().any(|n| n == NEW_NAME),
                "the dashboard does not show the display name",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testCreateBuildWithParameters", |driver: WebDriver| async move {
            let build = create::<Pipeline>(&driver, NAME)
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?;
            expect_true(
                build.is_build_heading_displayed().await,
                "The build of the Pipeline Project is not found",
            )?;
            Ok(())
        }))
}
