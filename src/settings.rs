use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PersistentSettings {
    pub jenkins_url: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub webdriver_url: Option<String>,
}

pub fn load_settings(path: &Path) -> PersistentSettings {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed settings file {:?}: {}", path, e);
            PersistentSettings::default()
        }),
        Err(e) => {
            warn!("Could not read settings file {:?}: {}", path, e);
            PersistentSettings::default()
        }
    }
}
