//! Schedule derivation and listing commands.

use chrono::Utc;
use clap::Subcommand;
use motorlog_core::{active_tasks, Engine};
use std::path::PathBuf;

use super::{load_catalog, print_tasks};
use crate::store::Store;
use crate::Ctx;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Derive baseline tasks, merge them in, and reclassify the schedule
    Refresh {
        /// Baseline catalog JSON file (built-in generic catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List the schedule
    List {
        /// Include archived forecast placeholders
        #[arg(long)]
        all: bool,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction, ctx: &Ctx) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Refresh { catalog } => {
            let mut store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?.clone();
            let catalog = load_catalog(catalog.as_deref())?;

            let engine = Engine::with_policy(ctx.policy.clone());
            let before = store.tasks.len();
            store.tasks = engine.refresh(&vehicle, store.tasks, &catalog, Utc::now());
            let added = store.tasks.len() - before;
            store.save(&ctx.store_path)?;
            println!("schedule refreshed: {added} task(s) added, {} total", store.tasks.len());
        }
        ScheduleAction::List { all, json } => {
            let store = Store::load(&ctx.store_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&store.tasks)?);
            } else if all {
                print_tasks(store.tasks.iter());
            } else {
                print_tasks(active_tasks(&store.tasks).into_iter());
            }
        }
    }
    Ok(())
}
