use clap::{Parser, Subcommand};
use std::path::PathBuf;

use motorlog_core::EnginePolicy;

mod commands;
mod store;

#[derive(Parser)]
#[command(name = "motorlog", version, about = "Motorlog CLI")]
struct Cli {
    /// Path to the task store JSON file
    #[arg(long, global = true, default_value = "motorlog.json")]
    store: PathBuf,

    /// Engine policy TOML file (built-in defaults when omitted)
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle facts management
    Vehicle {
        #[command(subcommand)]
        action: commands::vehicle::VehicleAction,
    },
    /// Schedule derivation and refresh
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Forecast future maintenance
    Forecast {
        #[command(subcommand)]
        action: commands::forecast::ForecastAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
}

/// Shared command context: store location and engine policy.
pub struct Ctx {
    pub store_path: PathBuf,
    pub policy: EnginePolicy,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let cli = Cli::parse();

    let policy = match cli.policy.as_deref().map(EnginePolicy::load).transpose() {
        Ok(policy) => policy.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let ctx = Ctx {
        store_path: cli.store,
        policy,
    };

    let result = match cli.command {
        Commands::Vehicle { action } => commands::vehicle::run(action, &ctx),
        Commands::Schedule { action } => commands::schedule::run(action, &ctx),
        Commands::Forecast { action } => commands::forecast::run(action, &ctx),
        Commands::Task { action } => commands::task::run(action, &ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
