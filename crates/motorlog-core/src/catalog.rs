//! Baseline maintenance catalog types.
//!
//! A catalog is a sequence of manufacturer-recommended maintenance items
//! with mileage and/or time intervals. Catalogs are supplied externally
//! (see the provider module); the engine only consumes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Urgency assigned to a baseline item by the catalog source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Canonical maintenance categories.
///
/// Catalog sources send free-form labels; [`MaintenanceCategory::from_label`]
/// folds anything unrecognized into `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceCategory {
    Engine,
    Transmission,
    Brakes,
    Tires,
    Fluids,
    Filters,
    Electrical,
    Suspension,
    Inspection,
    Other,
}

impl Default for MaintenanceCategory {
    fn default() -> Self {
        MaintenanceCategory::Other
    }
}

impl fmt::Display for MaintenanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceCategory::Engine => "engine",
            MaintenanceCategory::Transmission => "transmission",
            MaintenanceCategory::Brakes => "brakes",
            MaintenanceCategory::Tires => "tires",
            MaintenanceCategory::Fluids => "fluids",
            MaintenanceCategory::Filters => "filters",
            MaintenanceCategory::Electrical => "electrical",
            MaintenanceCategory::Suspension => "suspension",
            MaintenanceCategory::Inspection => "inspection",
            MaintenanceCategory::Other => "other",
        };
        write!(f, "{label}")
    }
}

impl MaintenanceCategory {
    /// Canonicalize a free-form category label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "engine" => MaintenanceCategory::Engine,
            "transmission" | "drivetrain" => MaintenanceCategory::Transmission,
            "brakes" | "brake" => MaintenanceCategory::Brakes,
            "tires" | "tyres" | "wheels" => MaintenanceCategory::Tires,
            "fluids" | "fluid" => MaintenanceCategory::Fluids,
            "filters" | "filter" => MaintenanceCategory::Filters,
            "electrical" | "battery" => MaintenanceCategory::Electrical,
            "suspension" | "steering" => MaintenanceCategory::Suspension,
            "inspection" | "safety" => MaintenanceCategory::Inspection,
            _ => MaintenanceCategory::Other,
        }
    }
}

/// One manufacturer-recommended maintenance item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaselineTask {
    /// Task name, e.g. "Oil change".
    pub item: String,
    pub category: MaintenanceCategory,
    /// Distance between occurrences, same unit as the odometer.
    /// Raw value as supplied; non-positive values mark the entry malformed.
    #[serde(default)]
    pub interval_distance: Option<i64>,
    /// Months between occurrences.
    #[serde(default)]
    pub interval_months: Option<i32>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

impl BaselineTask {
    /// Create a new baseline item with no intervals.
    pub fn new(item: impl Into<String>, category: MaintenanceCategory) -> Self {
        BaselineTask {
            item: item.into(),
            category,
            interval_distance: None,
            interval_months: None,
            urgency: None,
        }
    }

    /// Set the mileage interval.
    pub fn with_distance(mut self, distance: i64) -> Self {
        self.interval_distance = Some(distance);
        self
    }

    /// Set the month interval.
    pub fn with_months(mut self, months: i32) -> Self {
        self.interval_months = Some(months);
        self
    }

    /// Set the urgency.
    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Positive mileage interval, if any.
    pub fn distance(&self) -> Option<i64> {
        self.interval_distance.filter(|d| *d > 0)
    }

    /// Positive month interval, if any.
    pub fn months(&self) -> Option<i32> {
        self.interval_months.filter(|m| *m > 0)
    }

    /// An item with at least one positive interval recurs. Items with no
    /// interval data are valid ad-hoc entries, not malformed.
    pub fn is_recurring(&self) -> bool {
        self.distance().is_some() || self.months().is_some()
    }

    /// Present interval values must be positive.
    fn is_well_formed(&self) -> bool {
        self.interval_distance.map_or(true, |d| d > 0)
            && self.interval_months.map_or(true, |m| m > 0)
    }
}

/// Drop malformed catalog entries, keeping the rest.
///
/// A malformed entry (non-positive interval) is skipped and logged; it never
/// aborts processing of the remaining catalog.
pub fn sanitize_catalog(catalog: Vec<BaselineTask>) -> Vec<BaselineTask> {
    catalog
        .into_iter()
        .filter(|entry| {
            if entry.is_well_formed() {
                true
            } else {
                warn!(
                    item = %entry.item,
                    distance = ?entry.interval_distance,
                    months = ?entry.interval_months,
                    "skipping malformed baseline entry"
                );
                false
            }
        })
        .collect()
}

/// Built-in manufacturer-agnostic catalog.
///
/// Used by callers that have no catalog provider configured, and by tests.
pub fn generic_catalog() -> Vec<BaselineTask> {
    vec![
        BaselineTask::new("Oil change", MaintenanceCategory::Engine)
            .with_distance(5_000)
            .with_months(6)
            .with_urgency(Urgency::High),
        BaselineTask::new("Tire rotation", MaintenanceCategory::Tires)
            .with_distance(7_500)
            .with_months(6)
            .with_urgency(Urgency::Medium),
        BaselineTask::new("Engine air filter", MaintenanceCategory::Filters)
            .with_distance(15_000)
            .with_months(12)
            .with_urgency(Urgency::Low),
        BaselineTask::new("Cabin air filter", MaintenanceCategory::Filters)
            .with_distance(15_000)
            .with_months(12)
            .with_urgency(Urgency::Low),
        BaselineTask::new("Brake inspection", MaintenanceCategory::Brakes)
            .with_distance(10_000)
            .with_months(12)
            .with_urgency(Urgency::High),
        BaselineTask::new("Coolant flush", MaintenanceCategory::Fluids)
            .with_distance(30_000)
            .with_months(24)
            .with_urgency(Urgency::Medium),
        BaselineTask::new("Transmission fluid", MaintenanceCategory::Transmission)
            .with_distance(30_000)
            .with_months(24)
            .with_urgency(Urgency::Medium),
        BaselineTask::new("Battery check", MaintenanceCategory::Electrical)
            .with_months(12)
            .with_urgency(Urgency::Low),
        BaselineTask::new("Wiper blades", MaintenanceCategory::Other)
            .with_months(12)
            .with_urgency(Urgency::Low),
    ]
}
