//! Located elements behind explicit waits.
//!
//! Every interaction first waits, within a fixed budget, for the element to
//! reach the state the interaction needs. Running out of budget is a
//! `UiTestError::Timeout`; nothing here retries.

use std::fmt;
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::config::POLL_INTERVAL;
use crate::error::{Result, UiTestError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    XPath(String),
    Css(String),
    Id(String),
}

impl Locator {
    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Locator::Id(id.into())
    }

    pub fn by(&self) -> By {
        match self {
            Locator::XPath(s) => By::XPath(s.as_str()),
            Locator::Css(s) => By::Css(s.as_str()),
            Locator::Id(s) => By::Id(s.as_str()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::XPath(s) => write!(f, "xpath {}", s),
            Locator::Css(s) => write!(f, "css {}", s),
            Locator::Id(s) => write!(f, "#{}", s),
        }
    }
}

/// Quote `text` as an XPath string literal, even when it contains both quote kinds.
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{}'", text)
    } else if !text.contains('"') {
        format!("\"{}\"", text)
    } else {
        let parts: Vec<String> = text.split('\'').map(|p| format!("'{}'", p)).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

/// Explicit wait with one budget.
pub struct Wait<'a> {
    driver: &'a WebDriver,
    budget: Duration,
}

impl<'a> Wait<'a> {
    pub fn new(driver: &'a WebDriver, budget: Duration) -> Self {
        Self { driver, budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub async fn present(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.budget, POLL_INTERVAL)
            .first()
            .await
            .map_err(|e| UiTestError::timeout(format!("presence of {}", locator), self.budget, e))
    }

    pub async fn visible(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.budget, POLL_INTERVAL)
            .and_displayed()
            .first()
            .await
            .map_err(|e| UiTestError::timeout(format!("visibility of {}", locator), self.budget, e))
    }

    pub async fn clickable(&self, locator: &Locator) -> Result<WebElement> {
        self.driver
            .query(locator.by())
            .wait(self.budget, POLL_INTERVAL)
            .and_clickable()
            .first()
            .await
            .map_err(|e| UiTestError::timeout(format!("clickability of {}", locator), self.budget, e))
    }

    /// All visible matches; waits until at least one is visible.
    pub async fn all_visible(&self, locator: &Locator) -> Result<Vec<WebElement>> {
        self.visible(locator).await?;
        let mut visible = Vec::new();
        for elem in self.driver.find_all(locator.by()).await? {
            if elem.is_displayed().await.unwrap_or(false) {
                visible.push(elem);
            }
        }
        Ok(visible)
    }

    /// Wait for an element to disappear (or never show up).
    pub async fn gone(&self, locator: &Locator) -> Result<()> {
        let deadline = tokio::time::Instant::now() + self.budget;
        loop {
            let mut shown = false;
            for elem in self.driver.find_all(locator.by()).await? {
                if elem.is_displayed().await.unwrap_or(false) {
                    shown = true;
                    break;
                }
            }
            if !shown {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(UiTestError::timeout(
                    format!("disappearance of {}", locator),
                    self.budget,
                    "still displayed",
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.clickable(locator).await?.click().await?;
        Ok(())
    }

    pub async fn text(&self, locator: &Locator) -> Result<String> {
        Ok(self.visible(locator).await?.text().await?)
    }

    pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let elem = self.clickable(locator).await?;
        elem.clear().await?;
        elem.send_keys(text).await?;
        Ok(())
    }

    /// Visible within the budget, without failing when it is not.
    pub async fn is_visible(&self, locator: &Locator) -> bool {
        self.visible(locator).await.is_ok()
    }
}

/// Hover over an element and click it through the pointer, for menu items
/// that only react to real mouse movement.
pub async fn move_and_click(driver: &WebDriver, elem: &WebElement) -> Result<()> {
    elem.scroll_into_view().await?;
    driver
        .action_chain()
        .move_to_element_center(elem)
        .click()
        .perform()
        .await?;
    Ok(())
}

pub async fn hover(driver: &WebDriver, elem: &WebElement) -> Result<()> {
    driver
        .action_chain()
        .move_to_element_center(elem)
        .perform()
        .await?;
    Ok(())
}

/// Poll for a JavaScript alert and return its text.
pub async fn wait_for_alert(driver: &WebDriver, budget: Duration) -> Result<String> {
    let deadline = tokio::time::Instant::now() + budget;
    loop {
        match driver.get_alert_text().await {
            Ok(text) => return Ok(text),
            Err(e) if tokio::time::Instant::now() >= deadline => {
                return Err(UiTestError::timeout("alert", budget, e));
            }
            Err(_) => tokio::time::sleep(POLL_INTERVAL).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xpath_literal_plain() {
        assert_eq!(xpath_literal("Changes"), "'Changes'");
    }

    #[test]
    fn test_xpath_literal_single_quote() {
        assert_eq!(xpath_literal("it's"), "\"it's\"");
    }

    #[test]
    fn test_xpath_literal_both_quotes() {
        assert_eq!(
            xpath_literal(r#"a'b"c"#),
            r#"concat('a', "'", 'b"c')"#
        );
    }

    #[test]
    fn test_locator_display() {
        assert_eq!(Locator::xpath("//h1").to_string(), "xpath //h1");
        assert_eq!(Locator::css("#name").to_string(), "css #name");
        assert_eq!(Locator::id("ok-button").to_string(), "#ok-button");
    }
}
