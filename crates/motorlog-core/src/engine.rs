//! Engine facade tying the forecasting pipeline together.

use chrono::{DateTime, Utc};

use crate::catalog::{sanitize_catalog, BaselineTask};
use crate::classify::{self, ClassifyAction};
use crate::error::{CoreError, Result};
use crate::fallback;
use crate::forecast;
use crate::merge;
use crate::policy::EnginePolicy;
use crate::provider::{ForecastProvider, ForecastRequest};
use crate::reconcile;
use crate::resolver;
use crate::schedule::{MaintenanceTask, TaskStatus};
use crate::vehicle::Vehicle;

/// Maintenance forecasting and scheduling engine.
///
/// Pure synchronous computation over caller-supplied snapshots: the engine
/// holds only policy, never task state, so one instance serves any number of
/// vehicles and concurrent use across vehicles is safe. Concurrent edits to
/// the same vehicle's schedule must be serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    policy: EnginePolicy,
}

impl Engine {
    /// Create an engine with the default policy.
    pub fn new() -> Self {
        Engine {
            policy: EnginePolicy::default(),
        }
    }

    /// Create an engine with a custom policy.
    pub fn with_policy(policy: EnginePolicy) -> Self {
        Engine { policy }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// One next-occurrence task per well-formed catalog entry.
    pub fn derive_schedule(
        &self,
        vehicle: &Vehicle,
        catalog: &[BaselineTask],
        now: DateTime<Utc>,
    ) -> Vec<MaintenanceTask> {
        sanitize_catalog(catalog.to_vec())
            .iter()
            .map(|item| resolver::task_from_baseline(item, vehicle, now, &self.policy))
            .collect()
    }

    /// Forecast placeholders within the policy horizon.
    pub fn forecast(
        &self,
        vehicle: &Vehicle,
        catalog: &[BaselineTask],
        now: DateTime<Utc>,
    ) -> Vec<MaintenanceTask> {
        let catalog = sanitize_catalog(catalog.to_vec());
        forecast::generate_forecast(vehicle, &catalog, now, &self.policy)
    }

    /// Derive the baseline schedule, merge it into the existing task list
    /// and reclassify every non-terminal task.
    pub fn refresh(
        &self,
        vehicle: &Vehicle,
        existing: Vec<MaintenanceTask>,
        catalog: &[BaselineTask],
        now: DateTime<Utc>,
    ) -> Vec<MaintenanceTask> {
        let derived = self.derive_schedule(vehicle, catalog, now);
        let mut merged = merge::merge_tasks(existing, derived);
        let today = now.date_naive();
        for task in &mut merged {
            classify::apply(
                task,
                ClassifyAction::Recompute,
                today,
                vehicle.current_mileage,
            );
        }
        merged
    }

    /// Acquire a forecast via the external service, falling back to local
    /// synthesis, and merge it into the existing schedule.
    pub fn acquire_forecast(
        &self,
        provider: Option<&dyn ForecastProvider>,
        vehicle: &Vehicle,
        existing: Vec<MaintenanceTask>,
        catalog: &[BaselineTask],
        now: DateTime<Utc>,
    ) -> Vec<MaintenanceTask> {
        let catalog = sanitize_catalog(catalog.to_vec());
        let completed_tasks = existing
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .cloned()
            .collect();
        let request = ForecastRequest {
            vehicle: vehicle.clone(),
            completed_tasks,
            catalog,
        };
        let schedule = fallback::forecast_or_synthesize(provider, &request, now, &self.policy);
        merge::merge_tasks(existing, schedule)
    }

    /// Mark a task completed and archive every matching forecast
    /// placeholder. Returns the number of archived placeholders.
    ///
    /// An unknown id is a caller contract violation and fails loudly.
    pub fn complete_task(
        &self,
        tasks: &mut Vec<MaintenanceTask>,
        id: &str,
        vehicle: &Vehicle,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let today = now.date_naive();
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::UnknownTask(id.to_string()))?;

        classify::apply(
            &mut tasks[index],
            ClassifyAction::SetStatus(TaskStatus::Completed),
            today,
            vehicle.current_mileage,
        );
        let completed = tasks[index].clone();
        let archived =
            reconcile::archive_matching_forecasts(tasks, &completed, self.policy.match_tolerance);
        Ok(archived.len())
    }

    /// Apply a classification action to one task in the schedule.
    pub fn apply_action(
        &self,
        tasks: &mut [MaintenanceTask],
        id: &str,
        action: ClassifyAction,
        vehicle: &Vehicle,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::UnknownTask(id.to_string()))?;
        classify::apply(task, action, now.date_naive(), vehicle.current_mileage);
        Ok(())
    }
}
