//! Forecast commands.

use chrono::Utc;
use clap::Subcommand;
use motorlog_core::Engine;
use std::path::PathBuf;

use super::{load_catalog, print_tasks};
use crate::store::Store;
use crate::Ctx;

#[derive(Subcommand)]
pub enum ForecastAction {
    /// Print forecast placeholders without saving them
    Preview {
        /// Baseline catalog JSON file (built-in generic catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Merge forecast placeholders into the schedule
    Apply {
        /// Baseline catalog JSON file (built-in generic catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(action: ForecastAction, ctx: &Ctx) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::with_policy(ctx.policy.clone());
    match action {
        ForecastAction::Preview { catalog, json } => {
            let store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?;
            let catalog = load_catalog(catalog.as_deref())?;

            let forecast = engine.forecast(vehicle, &catalog, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&forecast)?);
            } else {
                print_tasks(forecast.iter());
            }
        }
        ForecastAction::Apply { catalog } => {
            let mut store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?.clone();
            let catalog = load_catalog(catalog.as_deref())?;

            let before = store.tasks.len();
            // No external forecast service is wired up here; the engine
            // falls through to local synthesis.
            store.tasks =
                engine.acquire_forecast(None, &vehicle, store.tasks, &catalog, Utc::now());
            let added = store.tasks.len() - before;
            store.save(&ctx.store_path)?;
            println!("forecast applied: {added} placeholder(s) added");
        }
    }
    Ok(())
}
