use thirtyfour::prelude::*;

use super::{create, create_job_and_go_home, open, Suite};
use crate::error::{expect_eq, expect_true};
use crate::pages::{Dashboard, Folder, JobType, MainPage, PageExt, Pipeline};
use crate::runner::{TestClass, TestMethod};

const NAME: &str = "FolderName";
const RENAME: &str = "Folder";
const DISPLAY_NAME: &str = "NewDisplayName";
const DESCRIPTION: &str = "Created new folder";
const DESCRIPTION_2: &str = "Created new Description";
const BROKEN_PIPELINE: &str = "BadPipe";

fn item_name(job_type: JobType) -> String {
    format!("{:?}", job_type)
}

pub fn class() -> Suite {
    TestClass::new("FolderTest")
        .test(TestMethod::new("testCreate", |driver: WebDriver| async move {
            let main = create_job_and_go_home(&driver, NAME, JobType::Folder).await?;
            expect_true(main.is_job_displayed(NAME).await, "folder not on the dashboard")?;
            Ok(())
        }))
        .test(
            TestMethod::new("testRenameFromSideMenu", |driver: WebDriver| async move {
                let page = open::<Folder>(&driver, NAME)
                    .await?
                    .click_rename()
                    .await?
                    .enter_new_name(RENAME)
                    .await?
                    .submit()
                    .await?;
                expect_eq(page.heading().await?.as_str(), RENAME, "heading")?;
                expect_eq(
                    page.page_title().await?,
                    format!("All [{}] [Jenkins]", RENAME),
                    "window title",
                )?;
                Ok(())
            })
            .depends_on(&["testCreate"]),
        )
        .test(
            TestMethod::new("testRenameFromDropDownMenu", |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .rename_from_dropdown::<Folder>(RENAME)
                    .await?
                    .enter_new_name(NAME)
                    .await?
                    .submit()
                    .await?
                    .header()
                    .click_logo()
                    .await?;
                expect_true(
                    main.is_job_displayed(NAME).await,
                    "The new name of the Folder is not displayed on Dashboard",
                )?;
                Ok(())
            })
            .depends_on(&["testRenameFromSideMenu"]),
        )
        .test(
            TestMethod::new("testRenameToTheCurrentNameAndGetError", |driver: WebDriver| async move {
                let error_page = open::<Folder>(&driver, NAME)
                    .await?
                    .click_rename()
                    .await?
                    .enter_new_name(NAME)
                    .await?
                    .submit_expecting_error()
                    .await?;
                expect_eq(error_page.assert_text().await?.as_str(), "Error", "heading")?;
                expect_eq(
                    error_page.error_message().await?.as_str(),
                    "The new name is the same as the current name.",
                    "rename error",
                )?;
                Ok(())
            })
            .depends_on(&["testRenameFromDropDownMenu"]),
        )
        .test(TestMethod::new("testAccessConfigurationPageFromSideMenu", |driver: WebDriver| async move {
            let config = create::<Folder>(&driver, NAME).await?.click_configure().await?;
            expect_eq(config.assert_text().await?.as_str(), "Configuration", "heading")?;
            expect_eq(
                config.breadcrumb().full_text().await?,
                format!("Dashboard > {} > Configuration", NAME),
                "breadcrumb",
            )?;
            Ok(())
        }))
        .test(TestMethod::new("testAddDisplayName", |driver: WebDriver| async move {
            let page = create::<Folder>(&driver, NAME)
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
        .test(
            TestMethod::new("testDeleteDisplayName", |driver: WebDriver| async move {
                let page = open::<Folder>(&driver, NAME)
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
        .test(TestMethod::new("testAddDescriptionFromConfigurationPage", |driver: WebDriver| async move {
            let page = create::<Folder>(&driver, NAME)
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
            TestMethod::new("testEditDescription", |driver: WebDriver| async move {
                let page = open::<Folder>(&driver, NAME)
                    .await?
                    .add_description(DESCRIPTION_2)
                    .await?;
                expect_eq(page.description_text().await?.as_str(), DESCRIPTION_2, "description")?;
                Ok(())
            })
            .depends_on(&["testAddDescriptionFromConfigurationPage"]),
        )
        .test(TestMethod::new("testPreviewDescriptionFromProjectPage", |driver: WebDriver| async move {
            let preview = create::<Folder>(&driver, NAME)
                .await?
                .preview_description(DESCRIPTION)
                .await?;
            expect_eq(preview.as_str(), DESCRIPTION, "description preview")?;
            Ok(())
        }))
        .test(TestMethod::new("testCreateJobsInFolder", |driver: WebDriver| async move {
            create::<Folder>(&driver, NAME).await?;
            for job_type in JobType::ALL {
                open::<Folder>(&driver, NAME)
                    .await?
                    .click_new_item()
                    .await?
                    .enter_item_name(&item_name(job_type))
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .click_ok_as(job_type)
                    .await?
                    .save()
                    .await?;
            }

            let folder = open::<Folder>(&driver, NAME).await?;
            for job_type in JobType::ALL {
                let name = item_name(job_type);
                expect_true(
                    folder.is_item_displayed(&name).await,
                    &format!("'{}' missing from the folder", name),
                )?;
            }
            Ok(())
        }))
        .test(TestMethod::with_data(
            "testMoveJobToFolderFromDropDownMenu",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                create_job_and_go_home(&driver, NAME, JobType::Folder).await?;
                let name = item_name(job_type);
                create_job_and_go_home(&driver, &name, job_type)
                    .await?
                    .move_from_dropdown(&name, job_type)
                    .await?
                    .select_folder(NAME)
                    .await?
                    .confirm()
                    .await?;
                let folder = open::<Folder>(&driver, NAME).await?;
                expect_true(folder.is_item_displayed(&name).await, "Job is not present in Folder")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testMoveJobsToFolderFromSideMenu",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                create_job_and_go_home(&driver, NAME, JobType::Folder).await?;
                let name = item_name(job_type);
                create_job_and_go_home(&driver, &name, job_type)
                    .await?
                    .open_job_of_type(&name, job_type)
                    .await?
                    .click_move()
                    .await?
                    .select_folder(NAME)
                    .await?
                    .confirm()
                    .await?;
                let folder = open::<Folder>(&driver, NAME).await?;
                expect_true(folder.is_item_displayed(&name).await, "Job is not present in Folder")?;
                Ok(())
            },
        ))
        .test(TestMethod::new("testCancelDeletingFromDropDownMenu", |driver: WebDriver| async move {
            let prompt = create_job_and_go_home(&driver, NAME, JobType::Folder)
                .await?
                .delete_from_dropdown(NAME, JobType::Folder)
                .await?;
            expect_eq(
                prompt.prompt_text().await?,
                format!("Delete Folder {}", NAME),
                "confirmation heading",
            )?;
            let main = prompt.cancel().await?.header().click_logo().await?;
            expect_true(
                main.is_job_displayed(NAME).await,
                "The Folder's name is not displayed on Dashboard",
            )?;
            Ok(())
        }))
        .test(
            TestMethod::new("testDeleteItemFromDropDown", |driver: WebDriver| async move {
                let main = MainPage::new(driver)
                    .delete_from_dropdown(NAME, JobType::Folder)
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
        .test(TestMethod::new("testDeleteItemFromSideMenu", |driver: WebDriver| async move {
            let main = create::<Folder>(&driver, NAME)
                .await?
                .click_delete()
                .await?
                .accept()
                .await?;
            expect_true(main.is_welcome_displayed().await, "'Welcome to Jenkins!' text is not displayed")?;
            Ok(())
        }))
        .test(TestMethod::new("testAddHealthMetricsFromSideMenu", |driver: WebDriver| async move {
            let config = create::<Folder>(&driver, NAME)
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
                let config = open::<Folder>(&driver, NAME)
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
        .test(TestMethod::new("testHealthMetricWithRecursive", |driver: WebDriver| async move {
            let tooltip = create::<Folder>(&driver, NAME)
                .await?
                .click_configure()
                .await?
                .add_health_metric()
                .await?
                .save()
                .await?
                .click_new_item()
                .await?
                .enter_item_name(BROKEN_PIPELINE)
                .await?
                .select_job_type(JobType::Pipeline)
                .await?
                .click_ok::<Pipeline>()
                .await?
                .enter_script("Broken")
                .await?
                .save()
                .await?
                .build_now(1)
                .await?
                .header()
                .click_logo()
                .await?
                .weather_tooltip(NAME)
                .await?;
            expect_eq(
                tooltip.as_str(),
                format!(
                    "Worst health: {} » {}: Build stability: All recent builds failed.",
                    NAME, BROKEN_PIPELINE
                )
                .as_str(),
                "weather tooltip",
            )?;
            Ok(())
        }))
}
