use thirtyfour::prelude::*;

use super::{create, create_job_and_go_home, open, rename, Suite, WRONG_CHARACTERS};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    ConfigPage, FolderTaskPage, FromDriver, JobType, MainPage, OrganizationFolder, PageExt,
    Pipeline,
};
use crate::runner::{TestClass, TestMethod};

const NAME: &str = "OrgFolder";
const RENAMED: &str = "OrgFolderNew";
const DESCRIPTION_TEXT: &str = "DESCRIPTION_TEXT";
const DISPLAY_NAME: &str = "This is Display Name of Folder";
const DISABLED_MESSAGE: &str = "This Organization Folder is currently disabled";
const PIPELINE_NAME: &str = "pipeline Test";
const SCRIPT_PATH: &str = "Test Script Path";
const DISABLE_BUTTON: &str = "Disable Organization Folder";

pub fn class() -> Suite {
    TestClass::new("OrganizationFolderTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::OrganizationFolder).await?;
            expect_true(main.is_job_displayed(NAME).await, "organization folder not on the dashboard")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromDropDownMenu", |driver: WebDriver| async move {
                let page = MainPage::new(driver)
                    .rename_from_dropdown::<OrganizationFolder>(NAME)
                    .await?
                    .enter_new_name(RENAMED)
                    .await?
                    .submit()
                    .await?;
                expect_eq(page.heading().await?.as_str(), RENAMED, "heading")?;
                Ok(())
            })
            .depends_on(&["testCreate"]),
        )
        .test(
            TestMethod::new("testRenameFromSideMenu", |driver: WebDriver| async move {
                let page = rename::<OrganizationFolder>(&driver, RENAMED, NAME).await?;
                expect_eq(page.heading().await?.as_str(), NAME, "heading")?;
                Ok(())
            })
            .depends_on(&["testRenameFromDropDownMenu"]),
        )
        .test(
            TestMethod::new("testRenameToTheCurrentNameAndGetError", |driver: WebDriver| async move {
                let message = open::<OrganizationFolder>(&driver, NAME)
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
        .test(TestMethod::with_data(
            "testRenameWithInvalidData",
            WRONG_CHARACTERS.to_vec(),
            |driver: WebDriver, (input, echoed): (&'static str, &'static str)| async move {
                let message = create_job_and_go_home(&driver, NAME, JobType::OrganizationFolder)
                    .await?
                    .rename_from_dropdown::<OrganizationFolder>(NAME)
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
        .test(TestMethod::new("testRenameWithDotName", |driver: WebDriver| async move {
            let message = create::<OrganizationFolder>(&driver, NAME)
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
        .test(TestMethod::new("testAccessConfigurationPageFromSideMenu", |driver: WebDriver| async move {
            let heading = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Configuration", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testAccessConfigurationPageFromDropDown", |driver: WebDriver| async move {
            let heading = create_job_and_go_home(&driver, NAME, JobType::OrganizationFolder)
                .await?
                .job_dropdown(NAME)
                .await?
                .select(ConfigPage::<OrganizationFolder>::from_driver(driver.clone()))
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Configuration", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testScanOrgFolderLog", |driver: WebDriver| async move {
            let page = create::<OrganizationFolder>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::scan_log(driver.clone(), JobType::OrganizationFolder))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Scan Organization Folder Log", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testOrganizationFolderEvents", |driver: WebDriver| async move {
            let page = create::<OrganizationFolder>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::events(driver.clone(), JobType::OrganizationFolder))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Organization Folder Events", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testCredentials", |driver: WebDriver| async move {
            let page = create::<OrganizationFolder>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::credentials(driver.clone()))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Credentials", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testPreviewDescriptionFromProjectPage", |driver: WebDriver| async move {
            let preview = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .preview_description(DESCRIPTION_TEXT)
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION_TEXT, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testDisableFromProjectPage", |driver: WebDriver| async move {
            let message = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .disable()
                .await?
                .disabled_message()
                .await?;
            expect_true(
                message.starts_with(DISABLED_MESSAGE),
                &format!("'{}' should start with '{}'", message, DISABLED_MESSAGE),
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEnableFromProjectPage", |driver: WebDriver| async move {
                let button = open::<OrganizationFolder>(&driver, NAME)
                    .await?
                    .enable()
                    .await?
                    .disable_button_text()
                    .await?;
                expect_eq(button.as_str(), DISABLE_BUTTON, "disable button")?;
                Ok(())
            })
            .depends_on(&["testDisableFromProjectPage"]),
        )
        .test(TestMethod::new("testDisableFromConfigurationPage", |driver: WebDriver| async move {
            let message = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .toggle_enabled()
                .await?
                .save()
                .await?
                .disabled_message()
                .await?;
            expect_true(
                message.contains(DISABLED_MESSAGE),
                &format!("'{}' should contain '{}'", message, DISABLED_MESSAGE),
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testEnableFromConfigurationPage", |driver: WebDriver| async move {
                let button = open::<OrganizationFolder>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .toggle_enabled()
                    .await?
                    .save()
                    .await?
                    .disable_button_text()
                    .await?;
                expect_eq(button.trim(), DISABLE_BUTTON, "disable button")?;
                Ok(())
            })
            .depends_on(&["testDisableFromConfigurationPage"]),
        )
        .test(TestMethod::new("testPreviewDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let preview = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_description(DESCRIPTION_TEXT)
                .await?
                .preview_description()
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION_TEXT, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let page = create::<OrganizationFolder>(&driver, NAME)
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
        .test(TestMethod::new("testAddDisplayName", |driver: WebDriver| async move {
            let page = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_display_name(DISPLAY_NAME)
                .await?
                .save()
                .await?;
            expect_eq(page.heading().await?.as_str(), DISPLAY_NAME, "heading")?;
            let names = page.header().click_logo().await?.job_names().await?;
            expect_true(
                names.iter().any(|n| n == DISPLAY_NAME),
                "display name not shown on the dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteDisplayName", |driver: WebDriver| async move {
                let page = open::<OrganizationFolder>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .set_display_name("")
                    .await?
                    .save()
                    .await?;
                expect_eq(page.heading().await?.as_str(), NAME, "heading")?;
                Ok(())
            })
            .depends_on(&["testAddDisplayName"]),
        )
        .test(TestMethod::new("testCancelDeletingFromDropDownMenu", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::OrganizationFolder)
                .await?
                .delete_from_dropdown(NAME, JobType::OrganizationFolder)
                .await?
                .cancel()
                .await?
                .header()
                .click_logo()
                .await?;
            expect_true(
                main.is_job_displayed(NAME).await,
                "The Organization Folder's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromDropDown", |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .delete_from_dropdown(NAME, JobType::OrganizationFolder)
                    .await?
                    .accept()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
                Ok(())
            })
            .depends_on(&["testCancelDeletingFromDropDownMenu"]),
        )
        .test(TestMethod::new("testCancelDeletingFromSideMenu", |driver: WebDriver| async move {
            let main = create::<OrganizationFolder>(&driver, NAME)
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
                "The Organization Folder's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromSideMenu", |driver: WebDriver| async move {
                let main = open::<OrganizationFolder>(&driver, NAME)
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
        .test(TestMethod::new("testAddHealthMetricsFromSideMenu", |driver: WebDriver| async move {
            let config = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .add_health_metric()
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .open_health_metrics()
                .await?;
            expect_true(config.is_health_metric_displayed().await, "health metric is not displayed")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteHealthMetricsSideMenu", |driver: WebDriver| async move {
                let config = open::<OrganizationFolder>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .open_health_metrics()
                    .await?
                    .remove_health_metric()
                    .await?
                    .save()
                    .await?
                    .click_configure()
                    .await?
                    .open_health_metrics()
                    .await?;
                expect_true(!config.is_health_metric_displayed().await, "health metric is still displayed")?;
                Ok(())
            })
            .depends_on(&["testAddHealthMetricsFromSideMenu"]),
        )
        .test(TestMethod::new("testHealthMetricsRecursive", |driver: WebDriver| async move {
            create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .open_health_metrics()
                .await?
                .save()
                .await?;
            let tooltip = create::<Pipeline>(&driver, PIPELINE_NAME)
                .await?
                .build_now(1)
                .await?
                .header()
                .click_logo()
                .await?
                .weather_tooltip(PIPELINE_NAME)
                .await?;
            expect_eq(tooltip.as_str(), "Build stability: No recent builds failed.", "weather tooltip")?;
            Ok(())
        }))
        .test(TestMethod::new("testConfigureProjectsEditScriptPath", |driver: WebDriver| async move {
            let path = create::<OrganizationFolder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_script_path(SCRIPT_PATH)
                .await?
                .save()
                .await?
                .click_configure()
                .await?
                .script_path()
                .await?;
            expect_eq(path.as_str(), SCRIPT_PATH, "script path")?;
            Ok(())
        }))
}
