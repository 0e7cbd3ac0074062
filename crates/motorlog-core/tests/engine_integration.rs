//! Integration tests for the full forecasting pipeline.
//!
//! These tests drive the engine facade end-to-end: deriving a schedule from
//! a baseline catalog, projecting forecasts, completing work, and verifying
//! that placeholders are reconciled.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use motorlog_core::{
    active_tasks, generic_catalog, BaselineTask, Engine, MaintenanceCategory, MaintenanceTask,
    TaskStatus, Urgency, Vehicle,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn new_vehicle_first_service() {
    // Fresh vehicle: odometer at zero, purchased today. The oil change is
    // due at 5000 mi, and the mileage-derived date (~5 months at the
    // assumed 12000/year) beats the 6-month interval date.
    let engine = Engine::new();
    let vehicle = Vehicle::new("Honda", "Civic", 2025)
        .with_mileage(0)
        .with_purchase_date(date(2025, 6, 1));
    let catalog = vec![BaselineTask::new("Oil change", MaintenanceCategory::Engine)
        .with_distance(5_000)
        .with_months(6)
        .with_urgency(Urgency::High)];

    let schedule = engine.derive_schedule(&vehicle, &catalog, now());
    assert_eq!(schedule.len(), 1);
    let first = &schedule[0];
    assert_eq!(first.due_mileage, Some(5_000));
    assert_eq!(first.due_date, Some(date(2025, 11, 1)));
    assert_eq!(first.status, TaskStatus::Upcoming);
    assert!(first.is_recurring);
    assert!(!first.is_forecast);
}

#[test]
fn full_lifecycle_forecast_then_complete() {
    let engine = Engine::new();
    let vehicle = Vehicle::new("Toyota", "Corolla", 2020)
        .with_mileage(50_000)
        .with_purchase_date(date(2020, 8, 1));
    let catalog = vec![
        BaselineTask::new("Oil change", MaintenanceCategory::Engine)
            .with_distance(5_000)
            .with_months(6)
            .with_urgency(Urgency::High),
        BaselineTask::new("Tire rotation", MaintenanceCategory::Tires)
            .with_distance(7_500)
            .with_urgency(Urgency::Medium),
    ];

    let mut tasks = engine.acquire_forecast(None, &vehicle, Vec::new(), &catalog, now());

    // Oil change: 55000..=70000 (4). Tire rotation: 57500, 65000 (2).
    assert_eq!(tasks.len(), 6);
    assert!(tasks.iter().all(|t| t.is_forecast));

    // The owner changes the oil near the first projected service point;
    // title casing differs from the catalog's.
    let mut done = MaintenanceTask::new("oil change", MaintenanceCategory::Engine, now());
    done.due_mileage = Some(55_300);
    let done_id = done.id.clone();
    tasks.push(done);

    let archived = engine
        .complete_task(&mut tasks, &done_id, &vehicle, now())
        .unwrap();
    assert_eq!(archived, 1);

    // The archived placeholder is hidden from active views but retained.
    let active = active_tasks(&tasks);
    assert_eq!(active.len(), tasks.len() - 1);
    let hidden = tasks.iter().find(|t| t.is_forecast && t.archived).unwrap();
    assert_eq!(hidden.due_mileage, Some(55_000));
    assert_eq!(hidden.status, TaskStatus::Completed);

    // Later placeholders for the same item stay live.
    assert!(tasks
        .iter()
        .any(|t| t.is_forecast && !t.archived && t.due_mileage == Some(60_000)));
}

#[test]
fn repeated_pipeline_runs_are_stable() {
    let engine = Engine::new();
    let vehicle = Vehicle::new("Toyota", "Corolla", 2020)
        .with_mileage(50_000)
        .with_purchase_date(date(2020, 8, 1));
    let catalog = generic_catalog();

    let mut tasks = engine.acquire_forecast(None, &vehicle, Vec::new(), &catalog, now());
    assert!(!tasks.is_empty());

    // Complete a real oil change right on a projected service point.
    let mut done = MaintenanceTask::new("Oil change", MaintenanceCategory::Engine, now());
    done.due_mileage = Some(55_000);
    let done_id = done.id.clone();
    tasks.push(done);
    engine
        .complete_task(&mut tasks, &done_id, &vehicle, now())
        .unwrap();
    assert_eq!(tasks.iter().filter(|t| t.archived).count(), 1);

    // Refresh merges the derived baseline tasks; re-running the whole
    // pipeline afterwards must not grow the schedule or revive the
    // archived placeholder.
    let tasks = engine.refresh(&vehicle, tasks, &catalog, now());
    let settled = tasks.len();

    let tasks = engine.acquire_forecast(None, &vehicle, tasks, &catalog, now());
    assert_eq!(tasks.len(), settled);
    let tasks = engine.refresh(&vehicle, tasks, &catalog, now());
    assert_eq!(tasks.len(), settled);

    assert_eq!(tasks.iter().filter(|t| t.archived).count(), 1);
    let archived = tasks.iter().find(|t| t.archived).unwrap();
    assert_eq!(archived.status, TaskStatus::Completed);
}

#[test]
fn overdue_correction_end_to_end() {
    // Vehicle purchased this calendar year with an interval that has
    // already elapsed: the derived due date lands one month out instead of
    // surfacing as overdue on day one.
    let engine = Engine::new();
    let today = date(2025, 12, 1);
    let at = Utc.with_ymd_and_hms(2025, 12, 1, 9, 0, 0).unwrap();
    let vehicle = Vehicle::new("Honda", "Civic", 2025)
        .with_mileage(18_000)
        .with_purchase_date(date(2025, 1, 15));
    let catalog = vec![BaselineTask::new("Oil change", MaintenanceCategory::Engine)
        .with_distance(5_000)
        .with_months(4)];

    let schedule = engine.derive_schedule(&vehicle, &catalog, at);
    assert_eq!(schedule[0].due_date, Some(date(2026, 1, 1)));
    assert!(schedule[0].due_date.unwrap() > today);
    assert_eq!(schedule[0].status, TaskStatus::Upcoming);
}

#[test]
fn skipped_tasks_survive_the_pipeline() {
    let engine = Engine::new();
    let vehicle = Vehicle::new("Toyota", "Corolla", 2020).with_mileage(50_000);
    let catalog = generic_catalog();

    let mut tasks = engine.refresh(&vehicle, Vec::new(), &catalog, now());
    let skipped_id = tasks[0].id.clone();
    engine
        .apply_action(
            &mut tasks,
            &skipped_id,
            motorlog_core::ClassifyAction::SetStatus(TaskStatus::Skipped),
            &vehicle,
            now(),
        )
        .unwrap();

    let tasks = engine.refresh(&vehicle, tasks, &catalog, now());
    let skipped = tasks.iter().find(|t| t.id == skipped_id).unwrap();
    assert_eq!(skipped.status, TaskStatus::Skipped);
}
