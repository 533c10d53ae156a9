use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use jenkins_ui_suite::config::{CliArgs, Command, SuiteConfig};
use jenkins_ui_suite::jenkins::JenkinsEnvironment;
use jenkins_ui_suite::runner::history::RunHistory;
use jenkins_ui_suite::runner::report::RunReport;
use jenkins_ui_suite::runner::Runner;
use jenkins_ui_suite::settings::load_settings;
use jenkins_ui_suite::suites;

const LOG_FILE_PREFIX: &str = "jenkins-ui-suite.log";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    std::fs::create_dir_all(&args.reports_dir)?;
    let file_appender = tracing_appender::rolling::daily(&args.reports_dir, LOG_FILE_PREFIX);
    let (file_writer, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jenkins_ui_suite=info".into()),
        )
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    let command = args.command.clone().unwrap_or(Command::Run);
    let settings_path = args.settings.clone();
    let mut config = SuiteConfig::from_args(args);
    if let Some(path) = settings_path {
        info!("Settings file: {:?}", path);
        config.apply_settings(&load_settings(&path));
    }

    match command {
        Command::Run => {
            // `_log_guard` must drop before the process ends.
            if !run(config).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List => list(&config),
        Command::History { limit } => history(&config, limit)?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn run(config: SuiteConfig) -> anyhow::Result<bool> {
    info!("Starting jenkins-ui-suite v{}", env!("CARGO_PKG_VERSION"));
    info!("Jenkins: {}", config.jenkins_url);
    info!("Browser: {} via {}", config.browser, config.webdriver_url);
    info!("Server run: {}", config.server_run);

    let classes: Vec<_> = suites::all()
        .into_iter()
        .filter(|c| config.wants_class(&c.name))
        .collect();
    if classes.is_empty() {
        error!("No test class matches {:?}", config.classes);
        return Ok(false);
    }

    let mut report = RunReport::new(&config.browser, &config.jenkins_url);
    let history = match RunHistory::open(&config.history_db_path()) {
        Ok(h) => Some(h),
        Err(e) => {
            warn!("Run history unavailable: {}", e);
            None
        }
    };
    if let Some(h) = &history {
        if let Err(e) = h.insert_run(&report) {
            warn!("Failed to record run start: {}", e);
        }
    }

    let reports_dir = config.reports_dir.clone();
    let env = JenkinsEnvironment::new(config.clone())?;
    let mut runner = Runner::new(env, config.server_run);

    for class in classes {
        let name = class.name.clone();
        match runner.run_class(class).await {
            Ok(class_report) => {
                if let Some(h) = &history {
                    for result in &class_report.results {
                        if let Err(e) = h.insert_result(&report.run_id, result) {
                            warn!("Failed to record {}.{}: {}", result.class, result.method, e);
                        }
                    }
                }
                info!(
                    "{}: {} passed, {} failed, {} skipped",
                    name,
                    class_report.count("passed"),
                    class_report.count("failed"),
                    class_report.count("skipped"),
                );
                report.classes.push(class_report);
            }
            Err(e) => {
                error!("Class {} not run: {}", name, e);
                report.load_errors.push(format!("{}: {}", name, e));
            }
        }
    }

    report.finish();
    let status = if report.is_success() { "passed" } else { "failed" };
    if let Some(h) = &history {
        if let Err(e) = h.complete_run(&report.run_id, status) {
            warn!("Failed to record run end: {}", e);
        }
    }
    match report.write_to(&reports_dir) {
        Ok(path) => info!("Report written to {:?}", path),
        Err(e) => warn!("Failed to write report: {}", e),
    }

    info!(
        "Run {} {}: {} invocations, {} passed, {} failed, {} skipped",
        report.run_id,
        status,
        report.total(),
        report.count("passed"),
        report.count("failed"),
        report.count("skipped"),
    );
    Ok(report.is_success())
}

fn list(config: &SuiteConfig) {
    for class in suites::all() {
        if !config.wants_class(&class.name) {
            continue;
        }
        let name = class.name.clone();
        match class.order() {
            Ok(order) => {
                println!("{}", name);
                for (i, method) in order.iter().enumerate() {
                    let cases = method.cases.len();
                    let deps = order.depends_on(&method.name);
                    print!("  {:>2}. {}", i + 1, method.name);
                    if cases > 1 {
                        print!(" [{} cases]", cases);
                    }
                    if !deps.is_empty() {
                        print!(" (after {})", deps.join(", "));
                    }
                    println!();
                }
            }
            Err(e) => println!("{}: {}", name, e),
        }
    }
}

fn history(config: &SuiteConfig, limit: usize) -> anyhow::Result<()> {
    let history = RunHistory::open(&config.history_db_path())?;
    let runs = history.recent_runs(limit)?;
    if runs.is_empty() {
        println!("No runs recorded in {:?}", config.history_db_path());
        return Ok(());
    }
    for run in runs {
        println!(
            "{}  {}  {:<11} {:<8} passed={} failed={} skipped={}",
            run.id, run.started_at, run.status, run.browser, run.passed, run.failed, run.skipped
        );
    }
    Ok(())
}
