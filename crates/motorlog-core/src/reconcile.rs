//! Completion reconciliation against forecast placeholders.
//!
//! When a task is completed for real, any live forecast placeholder for the
//! same service point must be archived, or reminders would fire twice for
//! work that is already done.

use crate::schedule::{MaintenanceTask, TaskStatus};

/// Archive every live forecast placeholder matching a just-completed task.
///
/// A placeholder matches when its title equals the completed task's title
/// ignoring case, the category matches exactly, and both due mileages are
/// present within the inclusive tolerance. Tasks missing a due mileage on
/// either side are never matched.
///
/// All matches in the pass are archived, not only the first: when several
/// placeholders cluster around one service point, leaving any of them live
/// would leak a duplicate reminder. Matched placeholders get status
/// Completed and the archived flag; no other field is touched.
///
/// Returns the ids of the archived placeholders.
pub fn archive_matching_forecasts(
    tasks: &mut [MaintenanceTask],
    completed: &MaintenanceTask,
    tolerance: i64,
) -> Vec<String> {
    let Some(completed_mileage) = completed.due_mileage else {
        return Vec::new();
    };
    let completed_title = completed.title.to_lowercase();

    let mut archived = Vec::new();
    for task in tasks.iter_mut() {
        if !task.is_forecast || task.archived || task.id == completed.id {
            continue;
        }
        if task.category != completed.category {
            continue;
        }
        if task.title.to_lowercase() != completed_title {
            continue;
        }
        let Some(forecast_mileage) = task.due_mileage else {
            continue;
        };
        if (forecast_mileage - completed_mileage).abs() > tolerance {
            continue;
        }

        task.status = TaskStatus::Completed;
        task.archived = true;
        archived.push(task.id.clone());
    }
    archived
}
