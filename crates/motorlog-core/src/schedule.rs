//! Maintenance schedule types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{BaselineTask, MaintenanceCategory, Urgency};

/// Lifecycle status of a maintenance task.
///
/// Completed and Skipped are terminal: they are only ever set by explicit
/// caller action and the classifier never overwrites them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Due information exists and is not yet past
    Upcoming,
    /// Due date or mileage is already past
    Overdue,
    /// Done, by explicit caller action (terminal)
    Completed,
    /// Deliberately not done (terminal)
    Skipped,
    /// No due information; open-ended work
    InProgress,
}

impl TaskStatus {
    /// Terminal statuses survive reclassification untouched.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Skipped)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Upcoming
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Upcoming => "upcoming",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Completed => "completed",
            TaskStatus::Skipped => "skipped",
            TaskStatus::InProgress => "in progress",
        };
        write!(f, "{label}")
    }
}

/// How strongly a maintenance task is recommended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Required,
    Recommended,
    Optional,
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Optional
    }
}

impl From<Urgency> for Importance {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::High => Importance::Required,
            Urgency::Medium => Importance::Recommended,
            Urgency::Low => Importance::Optional,
        }
    }
}

impl Importance {
    /// Map an optional catalog urgency; absent urgency means optional.
    pub fn from_urgency(urgency: Option<Urgency>) -> Self {
        urgency.map(Importance::from).unwrap_or_default()
    }
}

/// Composite key identifying a derived task for merge deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub title: String,
    pub category: MaintenanceCategory,
    pub due_mileage: Option<i64>,
}

/// A single entry in a vehicle's maintenance schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaintenanceTask {
    /// Unique identifier, assigned at creation, never reused.
    pub id: String,
    pub title: String,
    pub category: MaintenanceCategory,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_mileage: Option<i64>,
    /// Set only while status is Completed.
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub is_recurring: bool,
    /// Human-readable summary of the source interval.
    #[serde(default)]
    pub recurrence_interval: Option<String>,
    #[serde(default)]
    pub importance: Importance,
    /// True for placeholders produced by the forecast generator.
    #[serde(default)]
    pub is_forecast: bool,
    /// True once a forecast placeholder has been superseded by a real
    /// completion. Archived placeholders are kept for history.
    #[serde(default)]
    pub archived: bool,
    /// Creation timestamp, set once, immutable.
    pub created_at: DateTime<Utc>,
}

impl MaintenanceTask {
    /// Create a new task. The caller supplies the creation timestamp so the
    /// engine reads no ambient clock.
    pub fn new(
        title: impl Into<String>,
        category: MaintenanceCategory,
        created_at: DateTime<Utc>,
    ) -> Self {
        MaintenanceTask {
            id: format!("mnt-{}", uuid::Uuid::new_v4()),
            title: title.into(),
            category,
            status: TaskStatus::default(),
            due_date: None,
            due_mileage: None,
            completed_date: None,
            is_recurring: false,
            recurrence_interval: None,
            importance: Importance::default(),
            is_forecast: false,
            archived: false,
            created_at,
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the due mileage.
    pub fn with_due_mileage(mut self, due_mileage: i64) -> Self {
        self.due_mileage = Some(due_mileage);
        self
    }

    /// Semantic identity used by the schedule merger.
    pub fn merge_key(&self) -> MergeKey {
        MergeKey {
            title: self.title.clone(),
            category: self.category,
            due_mileage: self.due_mileage,
        }
    }

    /// Archived forecast placeholders are hidden from active views.
    pub fn is_active(&self) -> bool {
        !(self.is_forecast && self.archived)
    }
}

/// Tasks visible in active views.
pub fn active_tasks(tasks: &[MaintenanceTask]) -> Vec<&MaintenanceTask> {
    tasks.iter().filter(|t| t.is_active()).collect()
}

/// Archived forecast placeholders, retained for history.
pub fn archived_tasks(tasks: &[MaintenanceTask]) -> Vec<&MaintenanceTask> {
    tasks.iter().filter(|t| !t.is_active()).collect()
}

/// Human-readable summary of a baseline interval, e.g.
/// "every 5,000 mi or 6 months". None for items without intervals.
pub fn recurrence_summary(item: &BaselineTask) -> Option<String> {
    match (item.distance(), item.months()) {
        (Some(distance), Some(months)) => Some(format!(
            "every {} mi or {} months",
            group_thousands(distance),
            months
        )),
        (Some(distance), None) => Some(format!("every {} mi", group_thousands(distance))),
        (None, Some(months)) => Some(format!("every {months} months")),
        (None, None) => None,
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
