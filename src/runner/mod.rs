pub mod history;
pub mod report;

use chrono::Utc;
use futures::future::BoxFuture;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::error::{Result, UiTestError};
use crate::ordering::MethodsOrder;
use report::{ClassReport, InvocationResult, Outcome};

// ============================================================================
// Test definitions
// ============================================================================

pub type TestBody<S> = Arc<dyn Fn(S) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// One invocation of a test method: one row of its data provider.
pub struct TestCase<S> {
    pub label: Option<String>,
    body: TestBody<S>,
}

pub struct TestMethod<S> {
    pub name: String,
    pub description: String,
    pub depends_on: Vec<String>,
    pub cases: Vec<TestCase<S>>,
}

impl<S: Send + 'static> TestMethod<S> {
    pub fn new<F, Fut>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let body: TestBody<S> = Arc::new(move |session| Box::pin(body(session)));
        Self {
            name: name.into(),
            description: String::new(),
            depends_on: Vec::new(),
            cases: vec![TestCase { label: None, body }],
        }
    }

    /// A method invoked once per data row, each row labelled by its `Debug` form.
    pub fn with_data<P, F, Fut>(name: impl Into<String>, data: Vec<P>, body: F) -> Self
    where
        P: Debug + Clone + Send + Sync + 'static,
        F: Fn(S, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let body = Arc::new(body);
        let cases = data
            .into_iter()
            .map(|row| {
                let label = format!("{:?}", row);
                let body = body.clone();
                let run: TestBody<S> =
                    Arc::new(move |session| Box::pin(body(session, row.clone())));
                TestCase {
                    label: Some(label),
                    body: run,
                }
            })
            .collect();
        Self {
            name: name.into(),
            description: String::new(),
            depends_on: Vec::new(),
            cases,
        }
    }

    pub fn depends_on(mut self, methods: &[&str]) -> Self {
        self.depends_on
            .extend(methods.iter().map(|m| m.to_string()));
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }
}

pub struct TestClass<S> {
    pub name: String,
    pub methods: Vec<TestMethod<S>>,
}

impl<S> TestClass<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn test(mut self, method: TestMethod<S>) -> Self {
        self.methods.push(method);
        self
    }

    /// Methods in execution order; fails on malformed dependency declarations.
    pub fn order(self) -> Result<MethodsOrder<TestMethod<S>>> {
        MethodsOrder::new(self.methods, |m| m.name.clone(), |m| m.depends_on.clone())
    }
}

// ============================================================================
// Environment collaborators
// ============================================================================

/// Everything the runner needs from the outside world. The browser-backed
/// implementation lives in `crate::jenkins::environment`.
pub trait Environment: Send + Sync {
    type Session: Clone + Send + Sync + 'static;

    /// Bring the application back to a known-empty state.
    fn reset_state(&self) -> impl Future<Output = Result<()>> + Send;

    fn start_session(&self) -> impl Future<Output = Result<Self::Session>> + Send;

    /// Load the application root page.
    fn open_home(&self, session: &Self::Session) -> impl Future<Output = Result<()>> + Send;

    fn login(&self, session: &Self::Session) -> impl Future<Output = Result<()>> + Send;

    /// Screenshot and DOM dump of the current page.
    fn capture_diagnostics(
        &self,
        session: &Self::Session,
        class: &str,
        method: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    fn stop_session(&self, session: Self::Session) -> impl Future<Output = ()> + Send;
}

// ============================================================================
// Runner
// ============================================================================

pub struct Runner<E: Environment> {
    env: E,
    session: Option<E::Session>,
    capture_diagnostics: bool,
}

impl<E: Environment> Runner<E> {
    pub fn new(env: E, capture_diagnostics: bool) -> Self {
        Self {
            env,
            session: None,
            capture_diagnostics,
        }
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Run every method of `class` in dependency order.
    ///
    /// Only an ordering error fails the whole class; individual invocation
    /// failures are recorded in the returned report.
    pub async fn run_class(&mut self, class: TestClass<E::Session>) -> Result<ClassReport> {
        let class_name = class.name.clone();
        let mut order = class.order()?;
        let names: Vec<String> = order.names().iter().map(|n| n.to_string()).collect();

        info!("Class {}: {} methods", class_name, names.len());

        let mut report = ClassReport::new(&class_name);
        let mut skipped: HashSet<String> = HashSet::new();
        // Group index -> the member whose failure closed the group's session.
        let mut lost: HashMap<usize, String> = HashMap::new();

        for name in &names {
            let cases: Vec<(Option<String>, TestBody<E::Session>)> = match order.get(name) {
                Some(method) => method
                    .cases
                    .iter()
                    .map(|c| (c.label.clone(), c.body.clone()))
                    .collect(),
                None => continue,
            };

            if skipped.contains(name) {
                let reason = format!(
                    "prerequisite failed: {}",
                    order.depends_on(name).join(", ")
                );
                info!("Skip {}.{} ({})", class_name, name, reason);
                for (label, _) in cases {
                    report.push(InvocationResult::skipped(&class_name, name, label, &reason));
                }
                order.mark_as_skipped(name);
                continue;
            }

            let mut any_failed = false;
            for (label, body) in cases {
                // The group's data lives in a session that a failure already
                // closed; a reset here would run this member without it.
                if order.is_group_started(name) && self.session.is_none() {
                    let reason = match order.group_of(name).and_then(|g| lost.get(&g)) {
                        Some(failed) => format!("group session closed after {} failed", failed),
                        None => "group session closed".to_string(),
                    };
                    info!("Skip {}.{} ({})", class_name, name, reason);
                    report.push(InvocationResult::skipped(&class_name, name, label, &reason));
                    continue;
                }

                let result = self.invoke(&class_name, name, label, body, &order).await;
                if result.outcome.is_failed() {
                    any_failed = true;
                    if let Some(group) = order.group_of(name) {
                        lost.insert(group, name.clone());
                    }
                }
                report.push(result);
            }

            if any_failed {
                skipped.extend(order.dependents_of(name));
            }
            order.mark_as_invoked(name);
        }

        // A dangling session means the last group never reported finished.
        if let Some(session) = self.session.take() {
            self.env.stop_session(session).await;
        }

        Ok(report)
    }

    async fn invoke(
        &mut self,
        class: &str,
        method: &str,
        label: Option<String>,
        body: TestBody<E::Session>,
        order: &MethodsOrder<TestMethod<E::Session>>,
    ) -> InvocationResult {
        let invocation = match &label {
            Some(l) => format!("{}.{}[{}]", class, method, l),
            None => format!("{}.{}", class, method),
        };
        info!("Run {}", invocation);

        let started_at = Utc::now();
        let started = Instant::now();

        let fresh = !order.is_group_started(method);
        let session = match self.before_method(fresh).await {
            Ok(s) => s,
            Err(e) => {
                error!("Setup failed for {}: {}", invocation, e);
                let elapsed = started.elapsed();
                return InvocationResult::finished(
                    class,
                    method,
                    label,
                    started_at,
                    elapsed,
                    Outcome::failed(&e),
                    Some(e.kind()),
                );
            }
        };

        let result = body(session.clone()).await;

        let (outcome, kind) = match &result {
            Ok(()) => (Outcome::Passed, None),
            Err(e) => {
                let kind = e.downcast_ref::<UiTestError>().map(UiTestError::kind);
                (Outcome::Failed { message: format!("{:#}", e) }, kind)
            }
        };

        if outcome.is_failed() && self.capture_diagnostics {
            if let Err(e) = self.env.capture_diagnostics(&session, class, method).await {
                warn!("Couldn't capture page state for {}: {}", invocation, e);
            }
        }

        if outcome.is_failed() || order.is_group_finished(method) {
            if let Some(s) = self.session.take() {
                self.env.stop_session(s).await;
            }
        }

        let elapsed = started.elapsed();
        match &outcome {
            Outcome::Failed { message } => warn!("FAILED {}: {}", invocation, message),
            _ => info!("Passed {}", invocation),
        }
        info!("Execution time is {} sec", elapsed.as_secs());

        InvocationResult::finished(class, method, label, started_at, elapsed, outcome, kind)
    }

    /// New group: reset data, start a browser, open root, log in.
    /// Continuing group: just reload root.
    async fn before_method(&mut self, fresh: bool) -> Result<E::Session> {
        if !fresh {
            if let Some(session) = self.session.clone() {
                if let Err(e) = self.env.open_home(&session).await {
                    self.close_session().await;
                    return Err(UiTestError::Setup(e.to_string()));
                }
                return Ok(session);
            }
        }

        self.close_session().await;

        let setup = async {
            info!("Clear data");
            self.env.reset_state().await?;
            info!("Browser open");
            let session = self.env.start_session().await?;
            self.session = Some(session.clone());
            info!("Get web page");
            self.env.open_home(&session).await?;
            info!("Login");
            self.env.login(&session).await?;
            Ok::<_, UiTestError>(session)
        };

        match setup.await {
            Ok(session) => Ok(session),
            Err(e) => {
                self.close_session().await;
                Err(match e {
                    UiTestError::Setup(_) => e,
                    other => UiTestError::Setup(other.to_string()),
                })
            }
        }
    }

    async fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.env.stop_session(session).await;
            info!("Browser closed");
        }
    }
}
