use std::time::Duration;
use thirtyfour::error::WebDriverErrorInner;

#[derive(Debug, thiserror::Error)]
pub enum UiTestError {
    #[error("Timeout after {budget:?} waiting for {what}: {detail}")]
    Timeout {
        what: String,
        budget: Duration,
        detail: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ordering error: {0}")]
    Ordering(String),

    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Diagnostics capture failed: {0}")]
    Diagnostics(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl UiTestError {
    pub fn timeout(what: impl Into<String>, budget: Duration, detail: impl ToString) -> Self {
        UiTestError::Timeout {
            what: what.into(),
            budget,
            detail: detail.to_string(),
        }
    }

    /// The element was detached while the page re-rendered.
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            UiTestError::WebDriver(e) if matches!(e.as_inner(), WebDriverErrorInner::StaleElementReference(_))
        )
    }

    /// Short machine-friendly category, used in run reports and history rows.
    pub fn kind(&self) -> &'static str {
        match self {
            UiTestError::Timeout { .. } => "timeout",
            UiTestError::NotFound(_) => "not_found",
            UiTestError::Ordering(_) => "ordering",
            UiTestError::Setup(_) => "setup",
            UiTestError::Diagnostics(_) => "diagnostics",
            UiTestError::Assertion(_) => "assertion",
            UiTestError::WebDriver(_) => "webdriver",
            UiTestError::Http(_) => "http",
            UiTestError::Io(_) => "io",
            UiTestError::Other(_) => "other",
        }
    }
}

pub type Result<T> = std::result::Result<T, UiTestError>;

/// Fail with an assertion error unless `actual == expected`.
pub fn expect_eq<T>(actual: T, expected: T, context: &str) -> Result<()>
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(UiTestError::Assertion(format!(
            "{}: expected {:?}, got {:?}",
            context, expected, actual
        )))
    }
}

/// Fail with an assertion error unless `condition` holds.
pub fn expect_true(condition: bool, context: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(UiTestError::Assertion(context.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_eq_reports_both_sides() {
        let err = expect_eq("Project B", "Project A", "job name").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("job name"));
        assert!(msg.contains("\"Project A\""));
        assert!(msg.contains("\"Project B\""));
        assert_eq!(err.kind(), "assertion");
    }

    #[test]
    fn test_expect_true_passes() {
        assert!(expect_true(true, "visible").is_ok());
        assert!(matches!(
            expect_true(false, "visible"),
            Err(UiTestError::Assertion(_))
        ));
    }

    #[test]
    fn test_stale_element_is_recognised() {
        let stale = UiTestError::from(thirtyfour::error::WebDriverError::StaleElementReference(
            thirtyfour::error::WebDriverErrorInfo::new("stale element reference".to_string()),
        ));
        assert!(stale.is_stale());
        assert_eq!(stale.kind(), "webdriver");
        assert!(!UiTestError::NotFound("x".to_string()).is_stale());
    }

    #[test]
    fn test_timeout_message_includes_budget() {
        let err = UiTestError::timeout("//h1", Duration::from_secs(2), "no such element");
        assert!(err.to_string().contains("2s"));
        assert!(err.to_string().contains("//h1"));
        assert_eq!(err.kind(), "timeout");
    }
}
