//! Interval resolution: baseline intervals to concrete due information.
//!
//! Given one catalog item and one vehicle, produce the due date and/or due
//! mileage of the item's next occurrence. Mileage intervals are converted to
//! a date estimate via the policy's assumed annual distance; when both a
//! mileage-based and a month-based date exist, the earlier one wins.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::BaselineTask;
use crate::classify;
use crate::policy::EnginePolicy;
use crate::schedule::{recurrence_summary, Importance, MaintenanceTask};
use crate::vehicle::Vehicle;

/// Concrete due information derived from one baseline interval.
///
/// Both fields absent is valid: an item with no interval data yields an
/// undated ad-hoc task, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDue {
    pub due_date: Option<NaiveDate>,
    pub due_mileage: Option<i64>,
}

impl ResolvedDue {
    /// Whether any due information was derived.
    pub fn is_dated(&self) -> bool {
        self.due_date.is_some() || self.due_mileage.is_some()
    }
}

/// Add calendar months, clamping at chrono's calendar edge.
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Months needed to drive `distance` at the assumed annual rate, rounded up,
/// never less than one month.
fn months_to_drive(distance: i64, annual_distance: i64) -> u32 {
    let months = (distance * 12 + annual_distance - 1) / annual_distance;
    months.max(1) as u32
}

/// Resolve one baseline item against a vehicle's odometer and anchor date.
pub fn resolve_due(
    item: &BaselineTask,
    vehicle: &Vehicle,
    today: NaiveDate,
    policy: &EnginePolicy,
) -> ResolvedDue {
    let reference = vehicle.reference_date(today);
    let mut resolved = ResolvedDue::default();

    match (item.distance(), item.months()) {
        (Some(distance), months) if vehicle.current_mileage < distance => {
            resolved.due_mileage = Some(distance);
            let remaining = distance - vehicle.current_mileage;
            let mileage_date = add_months(
                reference,
                months_to_drive(remaining, policy.assumed_annual_distance),
            );
            resolved.due_date = Some(match months {
                // The mileage estimate wins ties: only a strictly earlier
                // month-based date replaces it.
                Some(m) => {
                    let month_date = add_months(reference, m as u32);
                    if month_date < mileage_date {
                        month_date
                    } else {
                        mileage_date
                    }
                }
                None => mileage_date,
            });
        }
        (distance, Some(m)) => {
            resolved.due_date = Some(add_months(reference, m as u32));
            if let Some(distance) = distance {
                // Odometer already past the first interval: schedule the
                // next occurrence from the current reading, not from zero.
                resolved.due_mileage = Some(vehicle.current_mileage + distance);
            }
        }
        _ => {}
    }

    apply_overdue_correction(&mut resolved, vehicle, today, policy);
    resolved
}

/// A freshly added vehicle would otherwise surface every baseline item as
/// overdue on day one; grant those a grace window instead.
fn apply_overdue_correction(
    resolved: &mut ResolvedDue,
    vehicle: &Vehicle,
    today: NaiveDate,
    policy: &EnginePolicy,
) {
    let Some(due) = resolved.due_date else { return };
    if due >= today {
        return;
    }
    let recently_added = match vehicle.purchase_date {
        None => true,
        Some(purchased) => purchased.year() == today.year(),
    };
    if recently_added {
        resolved.due_date = Some(add_months(today, policy.overdue_grace_months));
    }
}

/// Derive the next-occurrence task for one baseline item.
///
/// The result is a real schedule entry (`is_forecast` stays false); forecast
/// placeholders come from the forecast module instead.
pub fn task_from_baseline(
    item: &BaselineTask,
    vehicle: &Vehicle,
    now: DateTime<Utc>,
    policy: &EnginePolicy,
) -> MaintenanceTask {
    let today = now.date_naive();
    let due = resolve_due(item, vehicle, today, policy);

    let mut task = MaintenanceTask::new(&item.item, item.category, now);
    task.due_date = due.due_date;
    task.due_mileage = due.due_mileage;
    task.is_recurring = item.is_recurring();
    task.recurrence_interval = recurrence_summary(item);
    task.importance = Importance::from_urgency(item.urgency);
    task.status = classify::initial_status(
        due.due_date,
        due.due_mileage,
        today,
        vehicle.current_mileage,
    );
    task
}
