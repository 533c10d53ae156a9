use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use jenkins_ui_suite::error::{expect_true, Result, UiTestError};
use jenkins_ui_suite::runner::report::Outcome;
use jenkins_ui_suite::runner::{Environment, Runner, TestClass, TestMethod};

type Log = Arc<Mutex<Vec<String>>>;

/// Records every lifecycle call instead of driving a browser. Sessions are
/// numbered from 1 in start order.
#[derive(Default)]
struct FakeEnv {
    log: Log,
    next_session: AtomicU32,
    fail_start: bool,
}

impl FakeEnv {
    fn push(&self, event: impl Into<String>) {
        self.log.lock().unwrap().push(event.into());
    }
}

impl Environment for FakeEnv {
    type Session = u32;

    async fn reset_state(&self) -> Result<()> {
        self.push("reset");
        Ok(())
    }

    async fn start_session(&self) -> Result<u32> {
        if self.fail_start {
            return Err(UiTestError::Setup("no browser".to_string()));
        }
        let id = self.next_session.fetch_add(1, Ordering::SeqCst) + 1;
        self.push(format!("start {}", id));
        Ok(id)
    }

    async fn open_home(&self, session: &u32) -> Result<()> {
        self.push(format!("home {}", session));
        Ok(())
    }

    async fn login(&self, session: &u32) -> Result<()> {
        self.push(format!("login {}", session));
        Ok(())
    }

    async fn capture_diagnostics(&self, _session: &u32, class: &str, method: &str) -> Result<()> {
        self.push(format!("capture {}.{}", class, method));
        Ok(())
    }

    async fn stop_session(&self, session: u32) {
        self.push(format!("stop {}", session));
    }
}

fn passing(log: &Log, name: &'static str) -> TestMethod<u32> {
    let log = log.clone();
    TestMethod::new(name, move |session: u32| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(format!("body {}@{}", name, session));
            Ok(())
        }
    })
}

fn failing(log: &Log, name: &'static str) -> TestMethod<u32> {
    let log = log.clone();
    TestMethod::new(name, move |session: u32| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(format!("body {}@{}", name, session));
            expect_true(false, "boom")?;
            Ok(())
        }
    })
}

fn events(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[tokio::test]
async fn test_independent_methods_get_fresh_sessions() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Independent")
        .test(passing(&log, "a"))
        .test(passing(&log, "b"));

    let mut runner = Runner::new(env, false);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("passed"), 2);
    assert_eq!(
        events(&log),
        vec![
            "reset", "start 1", "home 1", "login 1", "body a@1", "stop 1",
            "reset", "start 2", "home 2", "login 2", "body b@2", "stop 2",
        ]
    );
    assert!(!runner.has_session());
}

#[tokio::test]
async fn test_dependent_methods_share_one_session() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Chain")
        .test(passing(&log, "create"))
        .test(passing(&log, "rename").depends_on(&["create"]));

    let mut runner = Runner::new(env, false);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("passed"), 2);
    assert_eq!(
        events(&log),
        vec![
            "reset", "start 1", "home 1", "login 1", "body create@1",
            "home 1", "body rename@1", "stop 1",
        ]
    );
}

#[tokio::test]
async fn test_failure_skips_dependents_and_closes_session() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Failing")
        .test(failing(&log, "create"))
        .test(passing(&log, "rename").depends_on(&["create"]))
        .test(passing(&log, "other"));

    let mut runner = Runner::new(env, true);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("failed"), 1);
    assert_eq!(report.count("skipped"), 1);
    assert_eq!(report.count("passed"), 1);

    let create = &report.results[0];
    assert_eq!(create.method, "create");
    assert_eq!(create.error_kind.as_deref(), Some("assertion"));
    assert!(matches!(&create.outcome, Outcome::Failed { message } if message.contains("boom")));

    let rename = &report.results[1];
    assert_eq!(
        rename.outcome,
        Outcome::Skipped {
            reason: "prerequisite failed: create".to_string()
        }
    );

    assert_eq!(
        events(&log),
        vec![
            "reset", "start 1", "home 1", "login 1", "body create@1",
            "capture Failing.create", "stop 1",
            "reset", "start 2", "home 2", "login 2", "body other@2", "stop 2",
        ]
    );
}

#[tokio::test]
async fn test_no_diagnostics_outside_server_runs() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Local").test(failing(&log, "broken"));

    let mut runner = Runner::new(env, false);
    runner.run_class(class).await.unwrap();

    assert!(!events(&log).iter().any(|e| e.starts_with("capture")));
}

#[tokio::test]
async fn test_setup_failure_is_reported_without_running_the_body() {
    let env = FakeEnv {
        fail_start: true,
        ..FakeEnv::default()
    };
    let log = env.log.clone();
    let class = TestClass::new("NoBrowser").test(passing(&log, "a"));

    let mut runner = Runner::new(env, true);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("failed"), 1);
    assert_eq!(report.results[0].error_kind.as_deref(), Some("setup"));
    assert!(matches!(
        &report.results[0].outcome,
        Outcome::Failed { message } if message.contains("no browser")
    ));
    assert_eq!(events(&log), vec!["reset"]);
}

#[tokio::test]
async fn test_each_data_row_runs_in_its_own_session() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let body_log = log.clone();
    let class = TestClass::new("Data").test(TestMethod::with_data(
        "rows",
        vec![10, 20, 30],
        move |session: u32, row: i32| {
            let log = body_log.clone();
            async move {
                log.lock().unwrap().push(format!("row {}@{}", row, session));
                Ok(())
            }
        },
    ));

    let mut runner = Runner::new(env, false);
    let report = runner.run_class(class).await.unwrap();

    let labels: Vec<_> = report.results.iter().map(|r| r.case.clone()).collect();
    assert_eq!(
        labels,
        vec![Some("10".to_string()), Some("20".to_string()), Some("30".to_string())]
    );
    let rows: Vec<_> = events(&log)
        .into_iter()
        .filter(|e| e.starts_with("row"))
        .collect();
    assert_eq!(rows, vec!["row 10@1", "row 20@2", "row 30@3"]);
}

#[tokio::test]
async fn test_malformed_dependencies_fail_the_class() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Broken").test(passing(&log, "a").depends_on(&["missing"]));

    let mut runner = Runner::new(env, false);
    let err = runner.run_class(class).await.unwrap_err();

    assert!(matches!(err, UiTestError::Ordering(_)));
    assert!(events(&log).is_empty());
}

#[tokio::test]
async fn test_failed_member_closes_its_group_for_siblings() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("Siblings")
        .test(passing(&log, "create"))
        .test(failing(&log, "rename").depends_on(&["create"]))
        .test(passing(&log, "delete").depends_on(&["create"]));

    let mut runner = Runner::new(env, false);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("passed"), 1);
    assert_eq!(report.count("failed"), 1);
    assert_eq!(report.count("skipped"), 1);
    assert_eq!(
        report.results[2].outcome,
        Outcome::Skipped {
            reason: "group session closed after rename failed".to_string()
        }
    );
    assert_eq!(
        events(&log),
        vec![
            "reset", "start 1", "home 1", "login 1", "body create@1",
            "home 1", "body rename@1", "stop 1",
        ]
    );
    assert!(!runner.has_session());
}

#[tokio::test]
async fn test_two_roots_share_the_dependent_session() {
    let env = FakeEnv::default();
    let log = env.log.clone();
    let class = TestClass::new("TwoRoots")
        .test(passing(&log, "a"))
        .test(passing(&log, "c"))
        .test(passing(&log, "b").depends_on(&["a", "c"]));

    let mut runner = Runner::new(env, false);
    let report = runner.run_class(class).await.unwrap();

    assert_eq!(report.count("passed"), 3);
    assert_eq!(
        events(&log),
        vec![
            "reset", "start 1", "home 1", "login 1", "body a@1",
            "home 1", "body c@1",
            "home 1", "body b@1", "stop 1",
        ]
    );
}
