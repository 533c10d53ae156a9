use thirtyfour::prelude::*;

use super::{create, create_job_and_go_home, open, rename, Suite, WRONG_CHARACTERS};
use crate::error::{expect_eq, expect_true};
use crate::pages::{
    ConfigPage, FolderTaskPage, FromDriver, JobType, MainPage, MultibranchPipeline, PageExt,
    BRANCH_SOURCES, SCAN_INTERVALS,
};
use crate::runner::{TestClass, TestMethod};

const NAME: &str = "MultibranchPipeline";
const RENAMED: &str = "MultibranchPipelineRenamed";
const DESCRIPTION: &str = "Description";
const DISPLAY_NAME: &str = "MultibranchDisplayName";
const DISABLED_MESSAGE: &str = "This Multibranch Pipeline is currently disabled";
const DISABLE_BUTTON: &str = "Disable Multibranch Pipeline";

pub fn class() -> Suite {
    TestClass::new("MultibranchPipelineTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::MultibranchPipeline).await?;
            expect_true(
                main.is_job_displayed(NAME).await,
                "The Multibranch Pipeline's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromDropDownMenu", |driver: WebDriver| async move {
                let page = MainPage::new(driver)
                    .rename_from_dropdown::<MultibranchPipeline>(NAME)
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
                let page = rename::<MultibranchPipeline>(&driver, RENAMED, NAME).await?;
                expect_eq(page.heading().await?.as_str(), NAME, "heading")?;
                Ok(())
            })
            .depends_on(&["testRenameFromDropDownMenu"]),
        )
        .test(
            TestMethod::new("testRenameToTheCurrentNameAndGetError", |driver: WebDriver| async move {
                let message = MainPage::new(driver)
                    .rename_from_dropdown::<MultibranchPipeline>(NAME)
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
                let message = create::<MultibranchPipeline>(&driver, NAME)
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
        .test(TestMethod::new("testPreviewDescriptionFromProjectPage", |driver: WebDriver| async move {
            let preview = create::<MultibranchPipeline>(&driver, NAME)
                .await?
                .preview_description(DESCRIPTION)
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testAccessConfigurationPageFromSideMenu", |driver: WebDriver| async move {
            let heading = create::<MultibranchPipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Configuration", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testAccessConfigurationPageFromDropDown", |driver: WebDriver| async move {
            let heading = create_job_and_go_home(&driver, NAME, JobType::MultibranchPipeline)
                .await?
                .job_dropdown(NAME)
                .await?
                .select(ConfigPage::<MultibranchPipeline>::from_driver(driver.clone()))
                .await?
                .assert_text()
                .await?;
            expect_eq(heading.as_str(), "Configuration", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testScanMultibranchPipelineLog", |driver: WebDriver| async move {
            let page = create::<MultibranchPipeline>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::scan_log(driver.clone(), JobType::MultibranchPipeline))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Scan Multibranch Pipeline Log", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testMultibranchPipelineEvents", |driver: WebDriver| async move {
            let page = create::<MultibranchPipeline>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::events(driver.clone(), JobType::MultibranchPipeline))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Multibranch Pipeline Events", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testCredentials", |driver: WebDriver| async move {
            let page = create::<MultibranchPipeline>(&driver, NAME).await?;
            let heading = page
                .open_task(FolderTaskPage::credentials(driver.clone()))
                .await?
                .heading()
                .await?;
            expect_eq(heading.as_str(), "Credentials", "page heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testDisableFromProjectPage", |driver: WebDriver| async move {
            let message = create::<MultibranchPipeline>(&driver, NAME)
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
                let button = open::<MultibranchPipeline>(&driver, NAME)
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
            let message = create::<MultibranchPipeline>(&driver, NAME)
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
                let button = open::<MultibranchPipeline>(&driver, NAME)
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
            let preview = create::<MultibranchPipeline>(&driver, NAME)
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
            create::<MultibranchPipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_description(DESCRIPTION)
                .await?
                .save()
                .await?;
            let text = open::<MultibranchPipeline>(&driver, NAME)
                .await?
                .description_text()
                .await?;
            expect_eq(text.as_str(), DESCRIPTION, "description")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDisplayName", |driver: WebDriver| async move {
            let page = create::<MultibranchPipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .set_display_name(DISPLAY_NAME)
                .await?
                .save()
                .await?;
            expect_eq(page.heading().await?.as_str(), DISPLAY_NAME, "heading")?;
            Ok(())
        }))
        .test(TestMethod::new("testCancelDeletingFromDropDownMenu", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::MultibranchPipeline)
                .await?
                .delete_from_dropdown(NAME, JobType::MultibranchPipeline)
                .await?
                .cancel()
                .await?
                .header()
                .click_logo()
                .await?;
            expect_true(
                main.is_job_displayed(NAME).await,
                "The Multibranch Pipeline's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromDropDown", |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .delete_from_dropdown(NAME, JobType::MultibranchPipeline)
                    .await?
                    .accept()
                    .await?;
                expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
                Ok(())
            })
            .depends_on(&["testCancelDeletingFromDropDownMenu"]),
        )
        .test(TestMethod::new("testCancelDeletingFromSideMenu", |driver: WebDriver| async move {
            let main = create::<MultibranchPipeline>(&driver, NAME)
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
                "The Multibranch Pipeline's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromSideMenu", |driver: WebDriver| async move {
                let main = open::<MultibranchPipeline>(&driver, NAME)
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
        .test(TestMethod::new("testAddHealthMetrics", |driver: WebDriver| async move {
            let config = create::<MultibranchPipeline>(&driver, NAME)
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
            TestMethod::new("testDeleteHealthMetrics", |driver: WebDriver| async move {
                let config = open::<MultibranchPipeline>(&driver, NAME)
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
            .depends_on(&["testAddHealthMetrics"]),
        )
        .test(TestMethod::new("testBranchSourcesOptionsList", |driver: WebDriver| async move {
            let options = create::<MultibranchPipeline>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .branch_source_options()
                .await?;
            expect_eq(
                options,
                BRANCH_SOURCES.iter().map(|s| s.to_string()).collect(),
                "Add source options",
            )?;
            Ok(())
        }))
        .test(TestMethod::new(
            "testScanMultibranchPipelineTriggersIntervalsList",
            |driver: WebDriver| async move {
                let intervals = create::<MultibranchPipeline>(&driver, NAME)
                    .await?
                    .click_configure()
                    .await?
                    .toggle_periodic_scan()
                    .await?
                    .scan_intervals()
                    .await?;
                expect_eq(
                    intervals,
                    SCAN_INTERVALS.iter().map(|s| s.to_string()).collect(),
                    "scan intervals",
                )?;
                Ok(())
            },
        ))
}
