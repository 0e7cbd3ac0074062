//! Property tests for the engine's invariants.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use motorlog_core::schedule::MergeKey;
use motorlog_core::{
    classify, merge, reconcile, ClassifyAction, MaintenanceCategory, MaintenanceTask, TaskStatus,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Upcoming),
        Just(TaskStatus::Overdue),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Skipped),
        Just(TaskStatus::InProgress),
    ]
}

fn category_strategy() -> impl Strategy<Value = MaintenanceCategory> {
    prop_oneof![
        Just(MaintenanceCategory::Engine),
        Just(MaintenanceCategory::Brakes),
        Just(MaintenanceCategory::Tires),
        Just(MaintenanceCategory::Other),
    ]
}

// A small title pool keeps merge-key and smart-match collisions frequent
// enough for the interesting branches to be exercised.
fn title_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Oil change",
        "oil change",
        "OIL CHANGE",
        "Tire rotation",
        "Brake inspection",
    ])
}

prop_compose! {
    fn task_strategy()(
        title in title_strategy(),
        category in category_strategy(),
        status in status_strategy(),
        due_mileage in proptest::option::of(prop::sample::select(vec![
            55_000i64, 55_400, 55_500, 55_501, 60_000, 70_000,
        ])),
        due_days in proptest::option::of(0i64..1500),
        is_forecast in any::<bool>(),
        archived in any::<bool>(),
    ) -> MaintenanceTask {
        let mut task = MaintenanceTask::new(
            title,
            category,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        task.status = status;
        task.due_mileage = due_mileage;
        task.due_date = due_days.map(|d| base_date() + Duration::days(d));
        task.is_forecast = is_forecast;
        task.archived = archived;
        task
    }
}

proptest! {
    /// Re-running classification with the same clock never changes the result.
    #[test]
    fn classification_is_idempotent(
        mut task in task_strategy(),
        day in 0i64..2000,
        mileage in 0i64..200_000,
    ) {
        let today = base_date() + Duration::days(day);
        classify::apply(&mut task, ClassifyAction::Recompute, today, mileage);
        let first = task.status;
        classify::apply(&mut task, ClassifyAction::Recompute, today, mileage);
        prop_assert_eq!(task.status, first);
    }

    /// Completed and Skipped survive any number of recomputations.
    #[test]
    fn terminal_statuses_are_sticky(
        mut task in task_strategy(),
        day in 0i64..2000,
        mileage in 0i64..200_000,
    ) {
        prop_assume!(task.status.is_terminal());
        let before = task.status;
        let today = base_date() + Duration::days(day);
        classify::apply(&mut task, ClassifyAction::Recompute, today, mileage);
        prop_assert_eq!(task.status, before);
    }

    /// Merging the same derived sequence twice equals merging it once.
    #[test]
    fn merge_is_idempotent(
        existing in proptest::collection::vec(task_strategy(), 0..8),
        derived in proptest::collection::vec(task_strategy(), 0..8),
    ) {
        let once = merge::merge_tasks(existing, derived.clone());
        let twice = merge::merge_tasks(once.clone(), derived);
        prop_assert_eq!(once, twice);
    }

    /// A merge never appends a task whose key is already in the schedule,
    /// never duplicates a key among the appended tasks, and never loses an
    /// existing task.
    #[test]
    fn merge_appends_only_new_keys(
        existing in proptest::collection::vec(task_strategy(), 0..8),
        derived in proptest::collection::vec(task_strategy(), 0..8),
    ) {
        let existing_len = existing.len();
        let existing_keys: HashSet<MergeKey> =
            existing.iter().map(|t| t.merge_key()).collect();

        let merged = merge::merge_tasks(existing.clone(), derived);
        prop_assert_eq!(&merged[..existing_len], &existing[..]);

        let appended = &merged[existing_len..];
        let mut appended_keys = HashSet::new();
        for task in appended {
            prop_assert!(!existing_keys.contains(&task.merge_key()));
            prop_assert!(appended_keys.insert(task.merge_key()));
        }
    }

    /// Every live placeholder inside the tolerance is archived in one pass;
    /// everything else is untouched.
    #[test]
    fn smart_match_archives_all_matches(
        placeholders in proptest::collection::vec(task_strategy(), 0..10),
        completed_mileage in prop::sample::select(vec![55_000i64, 55_400, 60_000]),
    ) {
        let mut completed = MaintenanceTask::new(
            "Oil change",
            MaintenanceCategory::Engine,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        completed.status = TaskStatus::Completed;
        completed.due_mileage = Some(completed_mileage);

        let mut tasks = placeholders;
        let before = tasks.clone();
        let archived_ids = reconcile::archive_matching_forecasts(&mut tasks, &completed, 500);

        for (task, original) in tasks.iter().zip(before.iter()) {
            let matches = original.is_forecast
                && !original.archived
                && original.title.eq_ignore_ascii_case(&completed.title)
                && original.category == completed.category
                && original
                    .due_mileage
                    .is_some_and(|m| (m - completed_mileage).abs() <= 500);
            if matches {
                prop_assert!(task.archived);
                prop_assert_eq!(task.status, TaskStatus::Completed);
                prop_assert!(archived_ids.contains(&task.id));
            } else {
                prop_assert_eq!(task, original);
            }
        }
    }
}
