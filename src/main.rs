//! Campus Admin - terminal driver for the Campus school-management API
//!
//! A thin front-end over the engine crate: loads configuration, wires the
//! process-wide state, and drives the list/detail controllers from the
//! command line. The real application renders the same controllers in a
//! graphical shell.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_admin::config::LogFormat;
use campus_admin::controllers::{
    ConfirmPrompt, DetailController, ListController, Navigator, Notifier,
};
use campus_admin::models::{
    Attendance, Branch, Department, Fee, Grade, Group, Holiday, Invoice, Resource, SchoolClass,
    Section, Student, Subject, Teacher,
};
use campus_admin::routes::Route;
use campus_admin::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Check for --help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    // Check for --version flag
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("Campus Admin {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config);

    info!("Campus Admin starting up");
    info!("Backend API: {}", config.api.base_url);

    let state = AppState::initialize(config).context("Failed to initialize application state")?;

    let command: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match command.as_slice() {
        [resource, "list"] => run_for_resource(&state, resource, Action::List).await,
        [resource, "view", id] => {
            let id: i64 = id.parse().context("record id must be numeric")?;
            run_for_resource(&state, resource, Action::View(id)).await
        }
        _ => {
            print_help();
            std::process::exit(2);
        }
    }
}

enum Action {
    List,
    View(i64),
}

async fn run_for_resource(state: &AppState, resource: &str, action: Action) -> Result<()> {
    match resource {
        "attendance" => run::<Attendance>(state, action).await,
        "branches" => run::<Branch>(state, action).await,
        "classes" => run::<SchoolClass>(state, action).await,
        "departments" => run::<Department>(state, action).await,
        "fees" => run::<Fee>(state, action).await,
        "grades" => run::<Grade>(state, action).await,
        "groups" => run::<Group>(state, action).await,
        "holidays" => run::<Holiday>(state, action).await,
        "invoices" => run::<Invoice>(state, action).await,
        "sections" => run::<Section>(state, action).await,
        "students" => run::<Student>(state, action).await,
        "subjects" => run::<Subject>(state, action).await,
        "teachers" => run::<Teacher>(state, action).await,
        other => {
            anyhow::bail!("unknown resource: {}", other);
        }
    }
}

async fn run<R: Resource>(state: &AppState, action: Action) -> Result<()> {
    let notifier = Arc::new(TermNotifier);
    let navigator = Arc::new(TermNavigator);
    let confirm = Arc::new(TermPrompt);

    match action {
        Action::List => {
            let mut controller = ListController::<R>::new(
                state.service(),
                notifier,
                navigator,
                confirm,
            );
            controller.activate().await;
            for row in controller.rows() {
                println!("{:>6}  {}", R::record_id(row), R::display_name(row));
            }
        }
        Action::View(id) => {
            let mut controller = DetailController::<R>::new(
                state.service(),
                notifier,
                navigator,
                confirm,
            );
            controller.activate(id).await;
            if let Some(record) = controller.record() {
                println!("{}", serde_json::to_string_pretty(record)?);
            }
        }
    }
    Ok(())
}

/// Notification surface printing to the terminal
struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("ok: {}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Navigation surface printing the target route
struct TermNavigator;

impl Navigator for TermNavigator {
    fn go(&self, route: Route) {
        println!("-> {}", route.path());
    }
}

/// Confirmation prompt reading y/n from stdin
struct TermPrompt;

#[async_trait]
impl ConfirmPrompt for TermPrompt {
    async fn confirm(&self, message: &str) -> bool {
        println!("{} [y/N]", message);
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn print_help() {
    println!("Campus Admin {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    campus-admin <resource> list");
    println!("    campus-admin <resource> view <id>");
    println!();
    println!("RESOURCES:");
    println!("    attendance, branches, classes, departments, fees, grades,");
    println!("    groups, holidays, invoices, sections, students, subjects, teachers");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message");
    println!("    -V, --version    Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    CAMPUS_CONFIG      Path to config.yaml");
    println!("    CAMPUS_API_URL     Backend API base URL");
    println!("    CAMPUS_API_TOKEN   Bearer token for authenticated calls");
}
