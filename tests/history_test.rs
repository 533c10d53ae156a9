use chrono::Utc;
use std::time::Duration;
use tempfile::TempDir;

use jenkins_ui_suite::runner::history::RunHistory;
use jenkins_ui_suite::runner::report::{InvocationResult, Outcome, RunReport};

fn result(method: &str, case: Option<&str>, outcome: Outcome) -> InvocationResult {
    let kind = if outcome.is_failed() { Some("assertion") } else { None };
    InvocationResult::finished(
        "FolderTest",
        method,
        case.map(str::to_string),
        Utc::now(),
        Duration::from_millis(1500),
        outcome,
        kind,
    )
}

#[test]
fn test_run_summary_counts_outcomes() {
    let dir = TempDir::new().unwrap();
    let history = RunHistory::open(&dir.path().join("history.db")).unwrap();

    let run = RunReport::new("chrome", "http://localhost:8080");
    history.insert_run(&run).unwrap();
    history
        .insert_result(&run.run_id, &result("testCreate", None, Outcome::Passed))
        .unwrap();
    history
        .insert_result(
            &run.run_id,
            &result(
                "testRename",
                None,
                Outcome::Failed {
                    message: "Assertion failed: heading".to_string(),
                },
            ),
        )
        .unwrap();
    history
        .insert_result(
            &run.run_id,
            &InvocationResult::skipped("FolderTest", "testDelete", None, "prerequisite failed: testRename"),
        )
        .unwrap();

    let summary = history.get_run(&run.run_id).unwrap().unwrap();
    assert_eq!(summary.status, "running");
    assert_eq!(summary.browser, "chrome");
    assert_eq!((summary.passed, summary.failed, summary.skipped), (1, 1, 1));
    assert!(summary.completed_at.is_none());

    history.complete_run(&run.run_id, "failed").unwrap();
    let summary = history.get_run(&run.run_id).unwrap().unwrap();
    assert_eq!(summary.status, "failed");
    assert!(summary.completed_at.is_some());
}

#[test]
fn test_results_keep_insertion_order_and_labels() {
    let dir = TempDir::new().unwrap();
    let history = RunHistory::open(&dir.path().join("history.db")).unwrap();

    let run = RunReport::new("firefox", "http://localhost:8080");
    history.insert_run(&run).unwrap();
    for job in ["Folder", "Pipeline"] {
        history
            .insert_result(&run.run_id, &result("testMove", Some(job), Outcome::Passed))
            .unwrap();
    }

    let rows = history.results_for_run(&run.run_id).unwrap();
    let labels: Vec<_> = rows.iter().map(|r| r.case_label.as_deref()).collect();
    assert_eq!(labels, vec![Some("Folder"), Some("Pipeline")]);
    assert!(rows.iter().all(|r| r.duration_ms == 1500 && r.message.is_none()));
}

#[test]
fn test_last_failure_of_a_method() {
    let dir = TempDir::new().unwrap();
    let history = RunHistory::open(&dir.path().join("history.db")).unwrap();

    let run = RunReport::new("chrome", "http://localhost:8080");
    history.insert_run(&run).unwrap();
    assert_eq!(history.last_failure("FolderTest", "testCreate").unwrap(), None);

    for message in ["first", "second"] {
        history
            .insert_result(
                &run.run_id,
                &result(
                    "testCreate",
                    None,
                    Outcome::Failed {
                        message: message.to_string(),
                    },
                ),
            )
            .unwrap();
    }
    assert_eq!(
        history.last_failure("FolderTest", "testCreate").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn test_reopen_marks_unfinished_runs_interrupted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.db");

    let run = RunReport::new("chrome", "http://localhost:8080");
    {
        let history = RunHistory::open(&path).unwrap();
        history.insert_run(&run).unwrap();
    }

    let history = RunHistory::open(&path).unwrap();
    let runs = history.recent_runs(10).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].id, run.run_id);
    assert_eq!(runs[0].status, "interrupted");
}
