//! Picking entries out of open dropdown and breadcrumb menus.
//!
//! The caller passes the page object it expects to land on; the entry is
//! found by comparing the visible label with that page's menu item name, so
//! no call site hardcodes a link locator or URL for the target.

use std::future::Future;
use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::Instant;
use tracing::debug;

use super::Page;
use crate::config::{POLL_INTERVAL, WAIT_2, WAIT_5};
use crate::error::{Result, UiTestError};
use crate::locator::{hover, move_and_click, Locator, Wait};

/// Anything addressable by a label inside a menu.
pub trait MenuTarget {
    fn menu_item_name(&self) -> &str;
}

impl<P: Page> MenuTarget for P {
    fn menu_item_name(&self) -> &str {
        Page::menu_item_name(self)
    }
}

/// The entries of one open menu.
pub trait MenuSource: Send + Sync {
    /// Visible labels, in rendering order.
    fn labels(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Click the entry at `index` of the last `labels()` listing.
    fn click(&self, index: usize) -> impl Future<Output = Result<()>> + Send;
}

/// Position of the entry whose label equals `name` exactly.
pub fn match_menu_entry(labels: &[String], name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    labels.iter().position(|label| label == name)
}

/// Click the entry named after `target` and hand `target` back as the new
/// current page. Fails with `NotFound` once `budget` runs out.
pub async fn select_entry<M, T>(menu: &M, target: T, budget: Duration) -> Result<T>
where
    M: MenuSource,
    T: MenuTarget + Send,
{
    let name = target.menu_item_name().to_string();
    if name.is_empty() {
        return Err(UiTestError::NotFound(
            "target page declares no menu item name".to_string(),
        ));
    }

    let deadline = Instant::now() + budget;
    loop {
        // Stale entries mean the menu is re-rendering; poll again.
        let labels = match menu.labels().await {
            Ok(labels) => labels,
            Err(e) if e.is_stale() && Instant::now() < deadline => {
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            }
            Err(e) => return Err(e),
        };
        if let Some(index) = match_menu_entry(&labels, &name) {
            debug!("Menu entry '{}' at position {}", name, index);
            match menu.click(index).await {
                Ok(()) => return Ok(target),
                Err(e) if e.is_stale() && Instant::now() < deadline => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        if Instant::now() >= deadline {
            return Err(UiTestError::NotFound(format!(
                "menu entry '{}' within {:?} (menu shows: {})",
                name,
                budget,
                labels.join(" | ")
            )));
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Menu rendered in the browser, addressed by the locator of its entries.
pub struct BrowserMenu {
    driver: WebDriver,
    entries: Locator,
}

impl BrowserMenu {
    pub fn new(driver: WebDriver, entries: Locator) -> Self {
        Self { driver, entries }
    }

    async fn visible_entries(&self) -> Result<Vec<WebElement>> {
        let mut visible = Vec::new();
        for elem in self.driver.find_all(self.entries.by()).await? {
            if elem.is_displayed().await.unwrap_or(false) {
                visible.push(elem);
            }
        }
        Ok(visible)
    }
}

impl MenuSource for BrowserMenu {
    async fn labels(&self) -> Result<Vec<String>> {
        let mut labels = Vec::new();
        for elem in self.visible_entries().await? {
            labels.push(elem.text().await?.trim().to_string());
        }
        Ok(labels)
    }

    async fn click(&self, index: usize) -> Result<()> {
        let entries = self.visible_entries().await?;
        let elem = entries.get(index).ok_or_else(|| {
            UiTestError::NotFound(format!("menu entry #{} of {}", index, self.entries))
        })?;
        move_and_click(&self.driver, elem).await
    }
}

/// Entries of the breadcrumb / job / build context menus.
pub fn context_menu_entries() -> Locator {
    Locator::xpath("//div[@id='breadcrumb-menu-target']//li/a/span")
}

/// An open dropdown menu.
pub struct DropdownMenu {
    menu: BrowserMenu,
}

impl DropdownMenu {
    /// Wait until the menu has rendered at least one entry.
    pub async fn opened(driver: WebDriver, entries: Locator) -> Result<Self> {
        Wait::new(&driver, WAIT_2).visible(&entries).await?;
        Ok(Self {
            menu: BrowserMenu::new(driver, entries),
        })
    }

    /// Hover `link`, press the dropdown chevron it grows and wait for the menu.
    pub async fn attached_to(driver: &WebDriver, link: &Locator) -> Result<Self> {
        let wait = Wait::new(driver, WAIT_5);
        let elem = wait.visible(link).await?;
        hover(driver, &elem).await?;
        let chevron = elem
            .query(By::Css("button.jenkins-menu-dropdown-chevron"))
            .wait(WAIT_2, POLL_INTERVAL)
            .first()
            .await
            .map_err(|e| UiTestError::timeout(format!("dropdown chevron of {}", link), WAIT_2, e))?;
        chevron.send_keys(Key::Enter).await?;
        debug!("Opened dropdown of {}", link);
        Self::opened(driver.clone(), context_menu_entries()).await
    }

    pub async fn labels(&self) -> Result<Vec<String>> {
        self.menu.labels().await
    }

    /// Navigate to `target` through its entry.
    pub async fn select<P: Page>(&self, target: P) -> Result<P> {
        select_entry(&self.menu, target, WAIT_2).await
    }

    /// Click an action entry ("Build Now", "Delete Project") by label.
    pub async fn click_label(&self, label: &str) -> Result<()> {
        select_entry(&self.menu, Label(label), WAIT_2).await?;
        Ok(())
    }
}

struct Label<'a>(&'a str);

impl MenuTarget for Label<'_> {
    fn menu_item_name(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeMenu {
        labels: Vec<String>,
        clicked: Mutex<Vec<usize>>,
    }

    impl FakeMenu {
        fn new(labels: &[&str]) -> Self {
            Self {
                labels: labels.iter().map(|s| s.to_string()).collect(),
                clicked: Mutex::new(Vec::new()),
            }
        }

        fn clicked(&self) -> Vec<usize> {
            self.clicked.lock().unwrap().clone()
        }
    }

    impl MenuSource for FakeMenu {
        async fn labels(&self) -> Result<Vec<String>> {
            Ok(self.labels.clone())
        }

        async fn click(&self, index: usize) -> Result<()> {
            self.clicked.lock().unwrap().push(index);
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    struct Target(&'static str);

    impl MenuTarget for Target {
        fn menu_item_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let labels: Vec<String> = ["Changes", "Console Output", "changes"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(match_menu_entry(&labels, "Changes"), Some(0));
        assert_eq!(match_menu_entry(&labels, "changes"), Some(2));
        assert_eq!(match_menu_entry(&labels, "Console"), None);
        assert_eq!(match_menu_entry(&labels, ""), None);
    }

    #[tokio::test]
    async fn test_select_clicks_matching_entry_and_returns_target() {
        let menu = FakeMenu::new(&["Console Output", "Edit Build Information", "Changes"]);
        let page = select_entry(&menu, Target("Changes"), Duration::from_millis(200))
            .await
            .unwrap();
        assert_eq!(page, Target("Changes"));
        assert_eq!(menu.clicked(), vec![2]);
    }

    /// Throws stale-element errors for the first `stale` listings.
    struct RerenderingMenu {
        inner: FakeMenu,
        stale: Mutex<u32>,
    }

    impl MenuSource for RerenderingMenu {
        async fn labels(&self) -> Result<Vec<String>> {
            {
                let mut stale = self.stale.lock().unwrap();
                if *stale > 0 {
                    *stale -= 1;
                    return Err(thirtyfour::error::WebDriverError::StaleElementReference(
                        thirtyfour::error::WebDriverErrorInfo::new("stale element reference".to_string()),
                    )
                    .into());
                }
            }
            self.inner.labels().await
        }

        async fn click(&self, index: usize) -> Result<()> {
            self.inner.click(index).await
        }
    }

    #[tokio::test]
    async fn test_select_waits_out_a_rerendering_menu() {
        let menu = RerenderingMenu {
            inner: FakeMenu::new(&["Console Output", "Changes"]),
            stale: Mutex::new(2),
        };
        let page = select_entry(&menu, Target("Changes"), Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(page, Target("Changes"));
        assert_eq!(menu.inner.clicked(), vec![1]);
    }

    #[tokio::test]
    async fn test_stale_menu_past_budget_reports_the_error() {
        let menu = RerenderingMenu {
            inner: FakeMenu::new(&["Changes"]),
            stale: Mutex::new(u32::MAX),
        };
        let err = select_entry(&menu, Target("Changes"), Duration::from_millis(300))
            .await
            .unwrap_err();
        assert!(err.is_stale());
        assert!(menu.inner.clicked().is_empty());
    }

    #[tokio::test]
    async fn test_select_fails_not_found_within_budget() {
        let menu = FakeMenu::new(&["Console Output", "Replay"]);
        let started = std::time::Instant::now();
        let err = select_entry(&menu, Target("Changes"), Duration::from_millis(300))
            .await
            .unwrap_err();
        assert!(matches!(err, UiTestError::NotFound(_)));
        assert!(err.to_string().contains("Replay"));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(menu.clicked().is_empty());
    }

    #[tokio::test]
    async fn test_select_rejects_nameless_target() {
        let menu = FakeMenu::new(&[""]);
        let err = select_entry(&menu, Target(""), Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, UiTestError::NotFound(_)));
    }
}
