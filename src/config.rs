use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::settings::PersistentSettings;

/// Jenkins UI suite: drives Jenkins through a WebDriver endpoint and checks the UI.
#[derive(Parser, Debug, Clone)]
#[command(name = "jenkins-ui-suite")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the Jenkins under test
    #[arg(long = "jenkins-url", env = "JENKINS_URL", default_value = DEFAULT_JENKINS_URL)]
    pub jenkins_url: String,

    /// Administrator account used for login and data reset
    #[arg(long = "admin-username", env = "JENKINS_ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    #[arg(long = "admin-password", env = "JENKINS_ADMIN_PASSWORD", default_value = "admin")]
    pub admin_password: String,

    /// Browser engine: chrome, firefox or edge
    #[arg(short = 'b', long = "browser", env = "BROWSER_NAME", default_value = DEFAULT_BROWSER)]
    pub browser: String,

    /// WebDriver server (chromedriver, geckodriver, selenium grid)
    #[arg(long = "webdriver-url", env = "WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[arg(long = "headless")]
    pub headless: bool,

    /// Where logs, diagnostics, run reports and history.db go
    #[arg(short = 'r', long = "reports-dir", default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,

    /// Server (CI) run: capture screenshot + DOM of failing pages
    #[arg(long = "server-run", env = "CI")]
    pub server_run: bool,

    /// Only run the named test classes (repeatable)
    #[arg(short = 'c', long = "class")]
    pub classes: Vec<String>,

    /// JSON file overriding URLs and credentials
    #[arg(short = 's', long = "settings")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the selected test classes (default)
    Run,
    /// Print every class with its methods in execution order
    List,
    /// Show recent runs from the history store
    History {
        #[arg(short = 'n', long = "limit", default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserName {
    Chrome,
    Firefox,
    Edge,
}

impl BrowserName {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "chrome" | "chromium" => Some(BrowserName::Chrome),
            "firefox" | "gecko" => Some(BrowserName::Firefox),
            "edge" | "msedge" => Some(BrowserName::Edge),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub jenkins_url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub browser: String,
    pub webdriver_url: String,
    pub headless: bool,
    pub reports_dir: PathBuf,
    pub server_run: bool,
    pub classes: Vec<String>,
}

pub const DEFAULT_JENKINS_URL: &str = "http://localhost:8080";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_BROWSER: &str = "chrome";
pub const DEFAULT_REPORTS_DIR: &str = "target/ui-reports";

// Wait budgets
pub const WAIT_2: Duration = Duration::from_secs(2);
pub const WAIT_5: Duration = Duration::from_secs(5);
pub const WAIT_10: Duration = Duration::from_secs(10);
pub const WAIT_15: Duration = Duration::from_secs(15);
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

// Driver startup
pub const DRIVER_START_ATTEMPTS: u32 = 3;
pub const DRIVER_START_PAUSE_MS: u64 = 500;

// Admin HTTP
pub const ADMIN_HTTP_TIMEOUT_SECS: u64 = 30;

impl SuiteConfig {
    pub fn from_args(args: CliArgs) -> Self {
        SuiteConfig {
            jenkins_url: args.jenkins_url.trim_end_matches('/').to_string(),
            admin_username: args.admin_username,
            admin_password: args.admin_password,
            browser: args.browser,
            webdriver_url: args.webdriver_url,
            headless: args.headless,
            reports_dir: args.reports_dir,
            server_run: args.server_run,
            classes: args.classes,
        }
    }

    /// Settings file values win over command-line defaults.
    pub fn apply_settings(&mut self, settings: &PersistentSettings) {
        if let Some(url) = &settings.jenkins_url {
            self.jenkins_url = url.trim_end_matches('/').to_string();
        }
        if let Some(user) = &settings.admin_username {
            self.admin_username = user.clone();
        }
        if let Some(password) = &settings.admin_password {
            self.admin_password = password.clone();
        }
        if let Some(url) = &settings.webdriver_url {
            self.webdriver_url = url.clone();
        }
    }

    /// Absolute URL for a path on the Jenkins under test.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.jenkins_url, path.trim_start_matches('/'))
    }

    pub fn history_db_path(&self) -> PathBuf {
        self.reports_dir.join("history.db")
    }

    pub fn wants_class(&self, name: &str) -> bool {
        self.classes.is_empty() || self.classes.iter().any(|c| c.eq_ignore_ascii_case(name))
    }
}
