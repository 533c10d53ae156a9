use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::path::Path;

use super::report::{InvocationResult, Outcome, RunReport};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub id: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub status: String,
    pub browser: String,
    pub passed: i64,
    pub failed: i64,
    pub skipped: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultRow {
    pub class_name: String,
    pub method: String,
    pub case_label: Option<String>,
    pub status: String,
    pub message: Option<String>,
    pub duration_ms: i64,
}

const RUN_SUMMARY_SELECT: &str = "SELECT r.id, r.started_at, r.completed_at, r.status, r.browser,
        COALESCE(SUM(s.status = 'passed'), 0),
        COALESCE(SUM(s.status = 'failed'), 0),
        COALESCE(SUM(s.status = 'skipped'), 0)
     FROM suite_runs r LEFT JOIN suite_results s ON s.run_id = r.id";

fn run_summary_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RunSummary> {
    Ok(RunSummary {
        id: row.get(0)?,
        started_at: row.get(1)?,
        completed_at: row.get(2)?,
        status: row.get(3)?,
        browser: row.get(4)?,
        passed: row.get(5)?,
        failed: row.get(6)?,
        skipped: row.get(7)?,
    })
}

/// SQLite record of suite runs and their per-invocation outcomes.
pub struct RunHistory {
    conn: Connection,
}

impl RunHistory {
    pub fn open(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let history = Self { conn };
        history.init_schema()?;
        history.cleanup_stale_runs()?;
        Ok(history)
    }

    /// Runs left "running" by a crashed process are marked "interrupted".
    fn cleanup_stale_runs(&self) -> anyhow::Result<()> {
        self.conn.execute(
            "UPDATE suite_runs SET status = 'interrupted' WHERE status = 'running'",
            [],
        )?;
        Ok(())
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS suite_runs (
                id TEXT PRIMARY KEY,
                started_at TEXT NOT NULL,
                completed_at TEXT,
                status TEXT NOT NULL DEFAULT 'running',
                browser TEXT NOT NULL,
                jenkins_url TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS suite_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                run_id TEXT NOT NULL REFERENCES suite_runs(id) ON DELETE CASCADE,
                class_name TEXT NOT NULL,
                method TEXT NOT NULL,
                case_label TEXT,
                status TEXT NOT NULL,
                message TEXT,
                error_kind TEXT,
                duration_ms INTEGER NOT NULL DEFAULT 0,
                started_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sr_run_id ON suite_results(run_id);
            CREATE INDEX IF NOT EXISTS idx_runs_started ON suite_runs(started_at);
        ",
        )?;
        Ok(())
    }

    // ========================================================================
    // Runs
    // ========================================================================

    pub fn insert_run(&self, run: &RunReport) -> anyhow::Result<()> {
        self.conn.execute(
            "INSERT INTO suite_runs (id, started_at, status, browser, jenkins_url)
             VALUES (?1, ?2, 'running', ?3, ?4)",
            params![
                run.run_id,
                run.started_at.to_rfc3339(),
                run.browser,
                run.jenkins_url,
            ],
        )?;
        Ok(())
    }

    pub fn complete_run(&self, run_id: &str, status: &str) -> anyhow::Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "UPDATE suite_runs SET status=?2, completed_at=?3 WHERE id=?1",
            params![run_id, status, now],
        )?;
        Ok(())
    }

    pub fn recent_runs(&self, limit: usize) -> anyhow::Result<Vec<RunSummary>> {
        let sql = format!(
            "{} GROUP BY r.id ORDER BY r.started_at DESC LIMIT ?1",
            RUN_SUMMARY_SELECT
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit as i64], run_summary_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn get_run(&self, run_id: &str) -> anyhow::Result<Option<RunSummary>> {
        let sql = format!("{} WHERE r.id = ?1 GROUP BY r.id", RUN_SUMMARY_SELECT);
        let run = self
            .conn
            .query_row(&sql, params![run_id], run_summary_from_row)
            .optional()?;
        Ok(run)
    }

    // ========================================================================
    // Results
    // ========================================================================

    pub fn insert_result(&self, run_id: &str, result: &InvocationResult) -> anyhow::Result<i64> {
        let message = match &result.outcome {
            Outcome::Passed => None,
            Outcome::Failed { message } => Some(message.clone()),
            Outcome::Skipped { reason } => Some(reason.clone()),
        };
        self.conn.execute(
            "INSERT INTO suite_results (
                run_id, class_name, method, case_label, status, message, error_kind, duration_ms, started_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                run_id,
                result.class,
                result.method,
                result.case,
                result.outcome.as_str(),
                message,
                result.error_kind,
                result.duration_ms as i64,
                result.started_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn results_for_run(&self, run_id: &str) -> anyhow::Result<Vec<ResultRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT class_name, method, case_label, status, message, duration_ms
             FROM suite_results WHERE run_id=?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![run_id], |row| {
            Ok(ResultRow {
                class_name: row.get(0)?,
                method: row.get(1)?,
                case_label: row.get(2)?,
                status: row.get(3)?,
                message: row.get(4)?,
                duration_ms: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// The most recent failure message of a method, if it ever failed.
    pub fn last_failure(&self, class_name: &str, method: &str) -> anyhow::Result<Option<String>> {
        let message = self
            .conn
            .query_row(
                "SELECT message FROM suite_results
                 WHERE class_name=?1 AND method=?2 AND status='failed'
                 ORDER BY id DESC LIMIT 1",
                params![class_name, method],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;
        Ok(message.flatten())
    }
}
