//! Task management commands.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use motorlog_core::{
    active_tasks, classify, ClassifyAction, Engine, MaintenanceCategory, MaintenanceTask,
    TaskStatus,
};

use super::{find_task, print_tasks};
use crate::store::Store;
use crate::Ctx;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add an ad-hoc task
    Add {
        title: String,
        /// Category label (unknown labels fold into "other")
        #[arg(long, default_value = "other")]
        category: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
        /// Due mileage
        #[arg(long)]
        due_mileage: Option<i64>,
    },
    /// List tasks
    List {
        /// Include archived forecast placeholders
        #[arg(long)]
        all: bool,
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one task
    Show {
        /// Task id or unique prefix
        id: String,
    },
    /// Mark a task completed (archives matching forecast placeholders)
    Complete {
        /// Task id or unique prefix
        id: String,
    },
    /// Mark a task skipped
    Skip {
        /// Task id or unique prefix
        id: String,
    },
    /// Toggle a task between completed and its derived status
    Toggle {
        /// Task id or unique prefix
        id: String,
    },
}

pub fn run(action: TaskAction, ctx: &Ctx) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::with_policy(ctx.policy.clone());
    match action {
        TaskAction::Add {
            title,
            category,
            due_date,
            due_mileage,
        } => {
            let mut store = Store::load(&ctx.store_path)?;
            let now = Utc::now();
            let current_mileage = store
                .vehicle
                .as_ref()
                .map(|v| v.current_mileage)
                .unwrap_or(0);

            let mut task =
                MaintenanceTask::new(title, MaintenanceCategory::from_label(&category), now);
            task.due_date = due_date;
            task.due_mileage = due_mileage;
            task.status =
                classify::initial_status(due_date, due_mileage, now.date_naive(), current_mileage);

            println!("added {} ({})", task.id, task.status);
            store.tasks.push(task);
            store.save(&ctx.store_path)?;
        }
        TaskAction::List { all, json } => {
            let store = Store::load(&ctx.store_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&store.tasks)?);
            } else if all {
                print_tasks(store.tasks.iter());
            } else {
                print_tasks(active_tasks(&store.tasks).into_iter());
            }
        }
        TaskAction::Show { id } => {
            let store = Store::load(&ctx.store_path)?;
            let index = find_task(&store.tasks, &id)?;
            println!("{}", serde_json::to_string_pretty(&store.tasks[index])?);
        }
        TaskAction::Complete { id } => {
            let mut store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?.clone();
            let index = find_task(&store.tasks, &id)?;
            let id = store.tasks[index].id.clone();

            let archived = engine.complete_task(&mut store.tasks, &id, &vehicle, Utc::now())?;
            store.save(&ctx.store_path)?;
            println!("task completed, {archived} forecast placeholder(s) archived");
        }
        TaskAction::Skip { id } => {
            let mut store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?.clone();
            let index = find_task(&store.tasks, &id)?;
            let id = store.tasks[index].id.clone();

            engine.apply_action(
                &mut store.tasks,
                &id,
                ClassifyAction::SetStatus(TaskStatus::Skipped),
                &vehicle,
                Utc::now(),
            )?;
            store.save(&ctx.store_path)?;
            println!("task skipped");
        }
        TaskAction::Toggle { id } => {
            let mut store = Store::load(&ctx.store_path)?;
            let vehicle = store.require_vehicle()?.clone();
            let index = find_task(&store.tasks, &id)?;
            let id = store.tasks[index].id.clone();

            engine.apply_action(&mut store.tasks, &id, ClassifyAction::Toggle, &vehicle, Utc::now())?;
            println!("task is now {}", store.tasks[index].status);
            store.save(&ctx.store_path)?;
        }
    }
    Ok(())
}
