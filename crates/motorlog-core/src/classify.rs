//! Lifecycle status classification.
//!
//! A pure function of the task, "today", and the current odometer reading.
//! Requests are an explicit tagged action handled by one exhaustive match;
//! there is no optional-argument default branch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{MaintenanceTask, TaskStatus};

/// Explicit classification request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyAction {
    /// Re-derive status from due information.
    Recompute,
    /// Caller-requested explicit status.
    SetStatus(TaskStatus),
    /// Flip between Completed and the re-derived active status.
    Toggle,
}

/// Status of a task given its due information and the present.
///
/// Upcoming when due information exists and is not past, Overdue when the
/// due date is strictly before today (date-only) or the due mileage is
/// strictly below the odometer, InProgress when no due information exists.
pub fn initial_status(
    due_date: Option<NaiveDate>,
    due_mileage: Option<i64>,
    today: NaiveDate,
    current_mileage: i64,
) -> TaskStatus {
    let date_past = due_date.is_some_and(|d| d < today);
    let mileage_past = due_mileage.is_some_and(|m| m < current_mileage);
    if date_past || mileage_past {
        TaskStatus::Overdue
    } else if due_date.is_some() || due_mileage.is_some() {
        TaskStatus::Upcoming
    } else {
        TaskStatus::InProgress
    }
}

/// Apply one classification action to a task.
///
/// `Recompute` is idempotent and never touches a Completed or Skipped task;
/// those statuses are set only by explicit caller action and stay sticky.
pub fn apply(
    task: &mut MaintenanceTask,
    action: ClassifyAction,
    today: NaiveDate,
    current_mileage: i64,
) {
    match action {
        ClassifyAction::Recompute => {
            if task.status.is_terminal() {
                return;
            }
            task.status =
                initial_status(task.due_date, task.due_mileage, today, current_mileage);
        }
        ClassifyAction::SetStatus(status) => {
            task.status = status;
            if status == TaskStatus::Completed {
                task.completed_date = Some(today);
            } else {
                task.completed_date = None;
            }
        }
        ClassifyAction::Toggle => {
            if task.status == TaskStatus::Completed {
                task.completed_date = None;
                task.status =
                    initial_status(task.due_date, task.due_mileage, today, current_mileage);
            } else {
                task.status = TaskStatus::Completed;
                task.completed_date = Some(today);
            }
        }
    }
}
