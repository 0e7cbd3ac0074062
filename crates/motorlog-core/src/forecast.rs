//! Forecast generation: projecting future recurring occurrences.
//!
//! Each recurring catalog item is stepped forward one mileage interval at a
//! time until the policy horizon beyond the current odometer is exceeded.
//! The emitted tasks are placeholders (`is_forecast` set) that the
//! reconciliation step later archives when a real completion supersedes
//! them.

use chrono::{DateTime, Utc};

use crate::catalog::BaselineTask;
use crate::policy::EnginePolicy;
use crate::resolver::add_months;
use crate::schedule::{recurrence_summary, Importance, MaintenanceTask, TaskStatus};
use crate::vehicle::Vehicle;

/// Project every future occurrence of each recurring catalog item within
/// the policy horizon.
///
/// Items without a positive distance interval have no bound to iterate on
/// and are not forecast. Within one item, due mileages increase
/// monotonically; the horizon bound is inclusive.
pub fn generate_forecast(
    vehicle: &Vehicle,
    catalog: &[BaselineTask],
    now: DateTime<Utc>,
    policy: &EnginePolicy,
) -> Vec<MaintenanceTask> {
    let today = now.date_naive();
    let ceiling = vehicle.current_mileage + policy.forecast_horizon;
    let mut forecast = Vec::new();

    for item in catalog {
        let Some(distance) = item.distance() else {
            continue;
        };

        let mut next_mileage = vehicle.current_mileage + distance;
        let mut occurrence: u32 = 1;
        while next_mileage <= ceiling {
            let mut task = MaintenanceTask::new(&item.item, item.category, now);
            task.due_mileage = Some(next_mileage);
            task.due_date = item
                .months()
                .map(|m| add_months(today, m as u32 * occurrence));
            task.status = TaskStatus::Upcoming;
            task.is_recurring = true;
            task.is_forecast = true;
            task.importance = Importance::from_urgency(item.urgency);
            task.recurrence_interval = recurrence_summary(item);
            forecast.push(task);

            next_mileage += distance;
            occurrence += 1;
        }
    }

    forecast
}
