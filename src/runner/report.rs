use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::UiTestError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    Skipped { reason: String },
}

impl Outcome {
    pub fn failed(error: &UiTestError) -> Self {
        Outcome::Failed {
            message: error.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed { .. } => "failed",
            Outcome::Skipped { .. } => "skipped",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    pub class: String,
    pub method: String,
    /// Data-provider row, if the method is parameterized.
    pub case: Option<String>,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub error_kind: Option<String>,
}

impl InvocationResult {
    pub fn finished(
        class: &str,
        method: &str,
        case: Option<String>,
        started_at: DateTime<Utc>,
        elapsed: Duration,
        outcome: Outcome,
        error_kind: Option<&str>,
    ) -> Self {
        Self {
            class: class.to_string(),
            method: method.to_string(),
            case,
            started_at,
            duration_ms: elapsed.as_millis() as u64,
            outcome,
            error_kind: error_kind.map(str::to_string),
        }
    }

    pub fn skipped(class: &str, method: &str, case: Option<String>, reason: &str) -> Self {
        Self {
            class: class.to_string(),
            method: method.to_string(),
            case,
            started_at: Utc::now(),
            duration_ms: 0,
            outcome: Outcome::Skipped {
                reason: reason.to_string(),
            },
            error_kind: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    pub class: String,
    pub results: Vec<InvocationResult>,
}

impl ClassReport {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: InvocationResult) {
        self.results.push(result);
    }

    pub fn count(&self, status: &str) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.as_str() == status)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub browser: String,
    pub jenkins_url: String,
    pub classes: Vec<ClassReport>,
    /// Classes rejected before running (malformed dependencies).
    pub load_errors: Vec<String>,
}

impl RunReport {
    pub fn new(browser: &str, jenkins_url: &str) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            finished_at: None,
            browser: browser.to_string(),
            jenkins_url: jenkins_url.to_string(),
            classes: Vec::new(),
            load_errors: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.classes.iter().map(|c| c.results.len()).sum()
    }

    pub fn count(&self, status: &str) -> usize {
        self.classes.iter().map(|c| c.count(status)).sum()
    }

    pub fn is_success(&self) -> bool {
        self.load_errors.is_empty() && self.count("failed") == 0
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(format!("run-{}.json", self.run_id))
    }

    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = self.path_in(dir);
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
