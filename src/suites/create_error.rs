//! Names Jenkins refuses for a new item.

use thirtyfour::prelude::*;
use uuid::Uuid;

use super::{create_job_and_go_home, Suite};
use crate::error::{expect_eq, expect_true};
use crate::pages::{Dashboard, JobType, MainPage, PageExt};
use crate::runner::{TestClass, TestMethod};

const UNSAFE_CHARACTERS: [&str; 13] = [
    "!", "@", "#", "$", "%", "^", "&", "*", "?", "|", ">", "[", "]",
];

/// 256 alphanumerics, one past what Jenkins can store as a directory name.
fn long_name() -> String {
    Uuid::new_v4().simple().to_string().repeat(8)
}

pub fn class() -> Suite {
    TestClass::new("CreateErrorTest")
        .test(TestMethod::with_data(
            "testCreateWithExistingName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let name = "PROJECT_NAME";
                create_job_and_go_home(&driver, name, job_type).await?;

                let error_page = MainPage::new(driver)
                    .click_new_item()
                    .await?
                    .enter_item_name(name)
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .click_ok_expecting_error()
                    .await?;
                expect_eq(error_page.assert_text().await?.as_str(), "Error", "heading")?;
                expect_eq(
                    error_page.error_message().await?,
                    format!("A job already exists with the name ‘{}’", name),
                    "error message",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateUsingInvalidData",
            UNSAFE_CHARACTERS.to_vec(),
            |driver: WebDriver, character: &'static str| async move {
                let message = MainPage::new(driver)
                    .click_create_a_job()
                    .await?
                    .enter_item_name(character)
                    .await?
                    .item_invalid_message()
                    .await?;
                expect_eq(
                    message,
                    format!("» ‘{}’ is an unsafe character", character),
                    "validation message",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateWithEmptyName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let message = MainPage::new(driver)
                    .click_create_a_job()
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .item_name_required_message()
                    .await?;
                expect_eq(
                    message.as_str(),
                    "» This field cannot be empty, please enter a valid name",
                    "validation message",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateWithSpaceInsteadOfName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let error_page = MainPage::new(driver)
                    .click_new_item()
                    .await?
                    .enter_item_name(" ")
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .click_ok_expecting_error()
                    .await?;
                expect_eq(error_page.assert_text().await?.as_str(), "Error", "heading")?;
                expect_eq(
                    error_page.error_message().await?.as_str(),
                    "No name is specified",
                    "error message",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateWithDotInsteadOfName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let page = MainPage::new(driver)
                    .click_create_a_job()
                    .await?
                    .enter_item_name(".")
                    .await?
                    .select_job_type(job_type)
                    .await?;
                expect_eq(
                    page.item_invalid_message().await?.as_str(),
                    "» “.” is not an allowed name",
                    "validation message",
                )?;
                expect_true(!page.is_ok_button_enabled().await?, "The OK button is enabled")?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testCreateWithLongName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let error_page = MainPage::new(driver)
                    .click_new_item()
                    .await?
                    .enter_item_name(&long_name())
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .click_ok_expecting_error()
                    .await?;
                expect_eq(
                    error_page.problem_message().await?.as_str(),
                    "A problem occurred while processing the request.",
                    "error page",
                )?;
                Ok(())
            },
        ))
        .test(TestMethod::with_data(
            "testOKButtonIsDisabledWhenEmptyName",
            JobType::ALL.to_vec(),
            |driver: WebDriver, job_type: JobType| async move {
                let enabled = MainPage::new(driver)
                    .click_create_a_job()
                    .await?
                    .select_job_type(job_type)
                    .await?
                    .is_ok_button_enabled()
                    .await?;
                expect_true(!enabled, "The OK button is enabled")?;
                Ok(())
            },
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_name_is_256_alphanumerics() {
        let name = long_name();
        assert_eq!(name.len(), 256);
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
