//! Schedule merging with semantic-key deduplication.

use std::collections::HashSet;

use crate::schedule::{MaintenanceTask, MergeKey};

/// Append derived tasks whose (title, category, due mileage) key is not
/// already present in the schedule.
///
/// Existing order is preserved and derived tasks keep their source order.
/// Merging the same derived sequence twice leaves the schedule unchanged;
/// duplicate keys are dropped silently, they are not an error.
pub fn merge_tasks(
    existing: Vec<MaintenanceTask>,
    derived: Vec<MaintenanceTask>,
) -> Vec<MaintenanceTask> {
    let mut seen: HashSet<MergeKey> = existing.iter().map(|t| t.merge_key()).collect();
    let mut merged = existing;
    for task in derived {
        if seen.insert(task.merge_key()) {
            merged.push(task);
        }
    }
    merged
}
