pub mod forecast;
pub mod schedule;
pub mod task;
pub mod vehicle;

use motorlog_core::{generic_catalog, BaselineTask, MaintenanceTask};
use std::path::Path;

/// Load a catalog JSON file, or the built-in generic catalog when omitted.
pub fn load_catalog(
    path: Option<&Path>,
) -> Result<Vec<BaselineTask>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(generic_catalog()),
    }
}

/// Resolve a task index from an exact id or a unique prefix.
pub fn find_task(
    tasks: &[MaintenanceTask],
    needle: &str,
) -> Result<usize, Box<dyn std::error::Error>> {
    if let Some(index) = tasks.iter().position(|t| t.id == needle) {
        return Ok(index);
    }
    let matches: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.id.starts_with(needle))
        .map(|(i, _)| i)
        .collect();
    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(format!("no task matches id '{needle}'").into()),
        _ => Err(format!("id '{needle}' is ambiguous ({} matches)", matches.len()).into()),
    }
}

/// Print a one-line-per-task table.
pub fn print_tasks<'a>(tasks: impl Iterator<Item = &'a MaintenanceTask>) {
    println!(
        "{:<14} {:<24} {:<12} {:<12} {:<12} {:>10}",
        "id", "title", "category", "status", "due date", "due mi"
    );
    for task in tasks {
        let short_id = task.id.get(..12).unwrap_or(&task.id);
        let due_date = task
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let due_mileage = task
            .due_mileage
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if task.is_forecast { "~" } else { " " };
        println!(
            "{:<14} {}{:<23} {:<12} {:<12} {:<12} {:>10}",
            short_id, marker, task.title, task.category.to_string(), task.status.to_string(),
            due_date, due_mileage
        );
    }
}
