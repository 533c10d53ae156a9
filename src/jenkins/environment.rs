use std::time::Duration;
use thirtyfour::prelude::*;
use thirtyfour::{Capabilities, ChromiumLikeCapabilities};
use tracing::{debug, info, warn};

use super::admin::JenkinsAdmin;
use crate::config::{
    BrowserName, SuiteConfig, DRIVER_START_ATTEMPTS, DRIVER_START_PAUSE_MS, WAIT_10,
};
use crate::diagnostics;
use crate::error::{Result, UiTestError};
use crate::locator::{Locator, Wait};
use crate::pages::header::Header;
use crate::runner::Environment;

const WINDOW_SIZE: &str = "--window-size=1920,1080";

/// A live Jenkins driven through a WebDriver endpoint.
pub struct JenkinsEnvironment {
    config: SuiteConfig,
    admin: JenkinsAdmin,
    browser: BrowserName,
}

impl JenkinsEnvironment {
    pub fn new(config: SuiteConfig) -> Result<Self> {
        let browser = BrowserName::parse(&config.browser).ok_or_else(|| {
            UiTestError::Setup(format!(
                "unsupported browser '{}' (chrome, firefox, edge)",
                config.browser
            ))
        })?;
        let admin = JenkinsAdmin::new(&config)?;
        Ok(Self {
            config,
            admin,
            browser,
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn capabilities(&self) -> Result<Capabilities> {
        let headless = self.config.headless;
        let caps: Capabilities = match self.browser {
            BrowserName::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                caps.add_arg(WINDOW_SIZE)?;
                caps.into()
            }
            BrowserName::Edge => {
                let mut caps = DesiredCapabilities::edge();
                if headless {
                    caps.set_headless()?;
                }
                caps.add_arg(WINDOW_SIZE)?;
                caps.into()
            }
            BrowserName::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if headless {
                    caps.set_headless()?;
                }
                caps.into()
            }
        };
        Ok(caps)
    }

    async fn connect(&self) -> Result<WebDriver> {
        let driver = WebDriver::new(self.config.webdriver_url.as_str(), self.capabilities()?).await?;
        if self.browser == BrowserName::Firefox {
            driver.set_window_rect(0, 0, 1920, 1080).await?;
        }
        Ok(driver)
    }
}

impl Environment for JenkinsEnvironment {
    type Session = WebDriver;

    async fn reset_state(&self) -> Result<()> {
        self.admin
            .reset()
            .await
            .map_err(|e| UiTestError::Setup(format!("reset Jenkins data: {}", e)))
    }

    async fn start_session(&self) -> Result<WebDriver> {
        let mut last_error = None;
        for attempt in 1..=DRIVER_START_ATTEMPTS {
            match self.connect().await {
                Ok(driver) => {
                    debug!("{:?} session started on attempt {}", self.browser, attempt);
                    return Ok(driver);
                }
                Err(e) => {
                    warn!(
                        "Browser start attempt {}/{} failed: {}",
                        attempt, DRIVER_START_ATTEMPTS, e
                    );
                    last_error = Some(e);
                    if attempt < DRIVER_START_ATTEMPTS {
                        tokio::time::sleep(Duration::from_millis(DRIVER_START_PAUSE_MS)).await;
                    }
                }
            }
        }
        Err(UiTestError::Setup(format!(
            "could not start {:?} via {}: {}",
            self.browser,
            self.config.webdriver_url,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    async fn open_home(&self, session: &WebDriver) -> Result<()> {
        session.goto(self.config.url("").as_str()).await?;
        Ok(())
    }

    async fn login(&self, session: &WebDriver) -> Result<()> {
        let wait = Wait::new(session, WAIT_10);
        wait.type_text(&Locator::id("j_username"), &self.config.admin_username)
            .await?;
        wait.type_text(
            &Locator::xpath("//input[@name='j_password']"),
            &self.config.admin_password,
        )
        .await?;
        wait.click(&Locator::xpath("//button[@name='Submit']")).await?;
        wait.visible(&Locator::id("jenkins-head-icon")).await?;
        info!("Logged in as {}", self.config.admin_username);
        Ok(())
    }

    async fn capture_diagnostics(&self, session: &WebDriver, class: &str, method: &str) -> Result<()> {
        diagnostics::capture(session, &self.config.reports_dir, class, method).await?;
        Ok(())
    }

    async fn stop_session(&self, session: WebDriver) {
        if let Err(e) = Header::new(session.clone()).logout().await {
            debug!("Logout before quit failed: {}", e);
        }
        if let Err(e) = session.quit().await {
            warn!("Browser quit failed: {}", e);
        }
    }
}
