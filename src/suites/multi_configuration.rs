use thirtyfour::prelude::*;

use super::{create, create_and_configure, create_job_and_go_home, open, rename, Suite};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    BuildStep, JobType, MainPage, MultiConfiguration, PageExt, ParameterType, PostBuildAction,
    ProjectPage,
};
use crate::runner::{TestClass, TestMethod};

const NAME: &str = "MULTI_CONFIGURATION_NAME";
const NEW_NAME: &str = "MULTI_CONFIGURATION_NEW_NAME";
const DESCRIPTION: &str = "Description";
const GITHUB_URL: &str = "https://github.com/ArtyomDulya/TestRepo";
const GITHUB_REPOSITORY_URL: &str = "https://github.com/nikabenz/sourceCodeManagementForJenkinsBuild";

pub fn class() -> Suite {
    TestClass::new("MultiConfigurationProjectTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main =
                create_job_and_go_home(&driver, NAME, JobType::MultiConfigurationProject).await?;
            expect_true(main.is_job_displayed(NAME).await, "project not on the dashboard")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromSideMenu", |driver: WebDriver| async move {
                let page = rename::<MultiConfiguration>(&driver, NAME, NEW_NAME).await?;
                expect_eq(
                    page.heading().await?,
                    JobType::MultiConfigurationProject.heading(NEW_NAME),
                    "heading",
                )?;
                Ok(())
            })
            .depends_on(&["testCreate"]),
        )
        .test(
            TestMethod::new("testRenameFromDropDownMenu", |driver: WebDriver| async move {
                let page = MainPage::new(driver)
                    .rename_from_dropdown::<MultiConfiguration>(NEW_NAME)
                    .await?
                    .enter_new_name(NAME)
                    .await?
                    .submit()
                    .await?;
                expect_eq(
                    page.heading().await?,
                    JobType::MultiConfigurationProject.heading(NAME),
                    "heading",
                )?;
                Ok(())
            })
            .depends_on(&["testRenameFromSideMenu"]),
        )
        .test(TestMethod::new("testCreateBuildNowFromDropDown", |driver: WebDriver| async move {
            let main =
                create_job_and_go_home(&driver, NAME, JobType::MultiConfigurationProject).await?;
            expect_eq(main.last_build_status(NAME).await?.as_str(), "Not built", "before build")?;

            main.build_now_from_dropdown(NAME).await?;
            open::<MultiConfiguration>(&driver, NAME)
                .await?
                .open_build(1)
                .await?
                .click_console_output()
                .await?
                .finished_line()
                .await?;
            let status = MainPage::new(driver.clone())
                .header()
                .click_logo()
                .await?
                .last_build_status(NAME)
                .await?;
            expect_eq(status.as_str(), "Success", "after build")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDescriptionFromBuildPage", |driver: WebDriver| async move {
            let build = create::<MultiConfiguration>(&driver, NAME)
                .await?
                .build_now(1)
                .await?
                .click_last_build()
                .await?
                .click_edit_build_information()
                .await?
                .enter_description(DESCRIPTION)
                .await?
                .save()
                .await?;
            expect_eq(build.description().await?.as_str(), DESCRIPTION, "build description")?;
            Ok(())
        }))
        .test(TestMethod::new("testDeleteBuildFromBuildPage", |driver: WebDriver| async move {
            let project: ProjectPage<MultiConfiguration> = create::<MultiConfiguration>(&driver, NAME)
                .await?
                .build_now(1)
                .await?
                .open_build(1)
                .await?
                .click_delete_build(1)
                .await?
                .confirm()
                .await?;
            expect_true(!project.is_build_listed(1).await, "build #1 still listed")?;
            Ok(())
        }))
        .test(TestMethod::new("testDisableFromProjectPage", |driver: WebDriver| async move {
            let page = create::<MultiConfiguration>(&driver, NAME)
                .await?
                .disable()
                .await?;
            expect_eq(
                page.disabled_message().await?.as_str(),
                "This project is currently disabled",
                "disabled banner",
            )?;
            expect_eq(page.enable_button_text().await?.as_str(), "Enable", "enable button")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testCheckDisableIconOnDashboard", |driver: WebDriver| async move {
                let status = MainPage::new(driver).last_build_status(NAME).await?;
                expect_eq(status.as_str(), "Disabled", "status icon")?;
                Ok(())
            })
            .depends_on(&["testDisableFromProjectPage"]),
        )
        .test(
            TestMethod::new("testBuildNowOptionNotPresentInDisabledProject", |driver: WebDriver| async move {
                let labels = MainPage::new(driver).job_menu_labels(NAME).await?;
                expect_true(
                    !labels.iter().any(|l| l == "Build Now"),
                    "'Build Now' option is present in drop-down menu",
                )?;
                Ok(())
            })
            .depends_on(&["testCheckDisableIconOnDashboard"]),
        )
        .test(
            TestMethod::new("testEnableFromProjectPage", |driver: WebDriver| async move {
                let status = open::<MultiConfiguration>(&driver, NAME)
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
            .depends_on(&["testBuildNowOptionNotPresentInDisabledProject"]),
        )
        .test(TestMethod::new("testPreviewDescriptionFromProjectPage", |driver: WebDriver| async move {
            let preview = create::<MultiConfiguration>(&driver, NAME)
                .await?
                .preview_description(DESCRIPTION)
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDescriptionFromProjectPage", |driver: WebDriver| async move {
            let page = create::<MultiConfiguration>(&driver, NAME)
                .await?
                .add_description(DESCRIPTION)
                .await?;
            expect_eq(page.description_text().await?.as_str(), DESCRIPTION, "description")?;
            Ok(())
        }))
        .test(TestMethod::new("testDeleteFromDropDown", |driver: WebDriver| async move {
            let prompt = create_job_and_go_home(&driver, NAME, JobType::MultiConfigurationProject)
                .await?
                .delete_from_dropdown(NAME, JobType::MultiConfigurationProject)
                .await?;
            expect_eq(
                prompt.prompt_text().await?.as_str(),
                "Delete Multi-configuration project: are you sure?",
                "delete prompt",
            )?;
            let main = prompt.accept().await?;
            expect_true(!main.is_job_displayed(NAME).await, "project still on the dashboard")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddBuildStepsOptionsCollectToList", |driver: WebDriver| async move {
            let options = create_and_configure::<MultiConfiguration>(&driver, NAME)
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
        .test(TestMethod::new("testPostBuildActionsOptionsCollectToList", |driver: WebDriver| async move {
            let options = create_and_configure::<MultiConfiguration>(&driver, NAME)
                .await?
                .post_build_action_options()
                .await?;
            expect_eq(
                options,
                PostBuildAction::ALL.iter().map(|a| a.label().to_string()).collect(),
                "post-build action options",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testThisProjectIsParameterizedOptionsCollectToList", |driver: WebDriver| async move {
            let types = create_and_configure::<MultiConfiguration>(&driver, NAME)
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
        .test(TestMethod::new("testConfigureOldBuildForProject", |driver: WebDriver| async move {
            let config = create_and_configure::<MultiConfiguration>(&driver, NAME)
                .await?
                .toggle_discard_old_builds()
                .await?
                .set_days_to_keep(5)
                .await?
                .set_max_builds_to_keep(7)
                .await?
                .save()
                .await?
                .click_configure()
                .await?;
            expect_eq(config.days_to_keep().await?.parse::<u32>().ok(), Some(5), "days to keep builds")?;
            expect_eq(config.max_builds_to_keep().await?.parse::<u32>().ok(), Some(7), "max # of builds to keep")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddRepositoryFromSourceCodeManagement", |driver: WebDriver| async move {
            let url = create_and_configure::<MultiConfiguration>(&driver, NAME)
                .await?
                .set_git_repository(GITHUB_REPOSITORY_URL)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .git_repository()
                .await?;
            expect_eq(url.as_str(), GITHUB_REPOSITORY_URL, "repository url")?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testAddingAProjectOnGithubToTheMultiConfigurationProject",
            |driver: WebDriver| async move {
                let url = create_and_configure::<MultiConfiguration>(&driver, NAME)
                    .await?
                    .set_github_project(GITHUB_URL)
                    .await?
                    .save()
                    .await?
                    .header()
                    .click_logo()
                    .await?
                    .configure_from_dropdown::<MultiConfiguration>(NAME)
                    .await?
                    .github_project_url()
                    .await?;
                expect_eq(url.as_str(), GITHUB_URL, "GitHub project url")?;
                Ok(())
            },
        ))
}
