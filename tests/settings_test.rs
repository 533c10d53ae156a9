use jenkins_ui_suite::settings::{load_settings, PersistentSettings};
use tempfile::TempDir;

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.json");
    assert_eq!(load_settings(&path), PersistentSettings::default());
}

#[test]
fn test_load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json at all {{{").unwrap();
    assert_eq!(load_settings(&path), PersistentSettings::default());
}

#[test]
fn test_load_full_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let settings = PersistentSettings {
        jenkins_url: Some("http://jenkins:8080".to_string()),
        admin_username: Some("admin".to_string()),
        admin_password: Some("secret".to_string()),
        webdriver_url: Some("http://localhost:4444".to_string()),
    };

    std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
    assert_eq!(load_settings(&path), settings);
}

#[test]
fn test_partial_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"jenkins_url": "http://ci:8080"}"#).unwrap();

    let settings = load_settings(&path);
    assert_eq!(settings.jenkins_url.as_deref(), Some("http://ci:8080"));
    assert!(settings.admin_username.is_none());
    assert!(settings.admin_password.is_none());
    assert!(settings.webdriver_url.is_none());
}
