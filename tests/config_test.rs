use clap::Parser;
use std::path::PathBuf;

use jenkins_ui_suite::config::*;
use jenkins_ui_suite::settings::PersistentSettings;

fn config_from(args: &[&str]) -> SuiteConfig {
    let mut argv = vec!["jenkins-ui-suite"];
    argv.extend_from_slice(args);
    SuiteConfig::from_args(CliArgs::try_parse_from(argv).unwrap())
}

#[test]
fn test_wait_budgets() {
    assert_eq!(WAIT_2.as_secs(), 2);
    assert_eq!(WAIT_5.as_secs(), 5);
    assert_eq!(WAIT_10.as_secs(), 10);
    assert_eq!(WAIT_15.as_secs(), 15);
    assert!(POLL_INTERVAL < WAIT_2);
}

#[test]
fn test_driver_start_retries() {
    assert_eq!(DRIVER_START_ATTEMPTS, 3);
    assert_eq!(DRIVER_START_PAUSE_MS, 500);
}

#[test]
fn test_jenkins_url_loses_trailing_slash() {
    let config = config_from(&["--jenkins-url", "http://ci.local:8080/"]);
    assert_eq!(config.jenkins_url, "http://ci.local:8080");
    assert_eq!(config.url("/job/alpha/"), "http://ci.local:8080/job/alpha/");
    assert_eq!(config.url(""), "http://ci.local:8080/");
}

#[test]
fn test_history_db_lives_in_reports_dir() {
    let config = config_from(&["--reports-dir", "/tmp/ui-reports"]);
    assert_eq!(config.reports_dir, PathBuf::from("/tmp/ui-reports"));
    assert_eq!(config.history_db_path(), PathBuf::from("/tmp/ui-reports/history.db"));
}

#[test]
fn test_class_filter() {
    let all = config_from(&[]);
    assert!(all.wants_class("FolderTest"));

    let some = config_from(&["-c", "foldertest", "--class", "PipelineTest"]);
    assert!(some.wants_class("FolderTest"));
    assert!(some.wants_class("PipelineTest"));
    assert!(!some.wants_class("BreadcrumbTest"));
}

#[test]
fn test_settings_override_arguments() {
    let mut config = config_from(&["--jenkins-url", "http://localhost:8080"]);
    config.apply_settings(&PersistentSettings {
        jenkins_url: Some("http://jenkins:8080/".to_string()),
        admin_username: Some("root".to_string()),
        admin_password: None,
        webdriver_url: Some("http://grid:4444".to_string()),
    });

    assert_eq!(config.jenkins_url, "http://jenkins:8080");
    assert_eq!(config.admin_username, "root");
    assert_eq!(config.webdriver_url, "http://grid:4444");
}

#[test]
fn test_subcommands() {
    let args = CliArgs::try_parse_from(["jenkins-ui-suite", "history", "-n", "3"]).unwrap();
    assert_eq!(args.command, Some(Command::History { limit: 3 }));

    let args = CliArgs::try_parse_from(["jenkins-ui-suite", "list"]).unwrap();
    assert_eq!(args.command, Some(Command::List));

    let args = CliArgs::try_parse_from(["jenkins-ui-suite"]).unwrap();
    assert_eq!(args.command, None);
}

#[test]
fn test_browser_names() {
    assert_eq!(BrowserName::parse("Chrome"), Some(BrowserName::Chrome));
    assert_eq!(BrowserName::parse(" firefox "), Some(BrowserName::Firefox));
    assert_eq!(BrowserName::parse("msedge"), Some(BrowserName::Edge));
    assert_eq!(BrowserName::parse("safari"), None);
}
