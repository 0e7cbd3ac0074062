//! Local forecast synthesis when the external service cannot be used.
//!
//! An explicit two-step pipeline: attempt the external call, and on any
//! error or empty result fall through to deterministic local synthesis.
//! Provider failures are swallowed at this boundary; the caller always
//! receives an internally consistent schedule and never an error.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::BaselineTask;
use crate::forecast::generate_forecast;
use crate::policy::EnginePolicy;
use crate::provider::{ForecastProvider, ForecastRequest};
use crate::schedule::MaintenanceTask;
use crate::vehicle::Vehicle;

/// Deterministically reproduce a forecast schedule from the catalog in hand.
///
/// Same horizon and per-item iteration as the forecast generator; needs no
/// network access. Synthesized tasks keep the forecast flag so completion
/// reconciliation and active-view filtering behave identically on both
/// forecast paths.
pub fn synthesize_schedule(
    vehicle: &Vehicle,
    catalog: &[BaselineTask],
    now: DateTime<Utc>,
    policy: &EnginePolicy,
) -> Vec<MaintenanceTask> {
    generate_forecast(vehicle, catalog, now, policy)
}

/// Try the external forecast service, fall through to local synthesis on
/// any failure or empty response. Never raises to the caller.
pub fn forecast_or_synthesize(
    provider: Option<&dyn ForecastProvider>,
    request: &ForecastRequest,
    now: DateTime<Utc>,
    policy: &EnginePolicy,
) -> Vec<MaintenanceTask> {
    if let Some(provider) = provider {
        match provider.full_forecast(request) {
            Ok(schedule) if !schedule.is_empty() => return schedule,
            Ok(_) => debug!(
                provider = provider.name(),
                "forecast service returned an empty schedule, synthesizing locally"
            ),
            Err(err) => debug!(
                provider = provider.name(),
                error = %err,
                "forecast service failed, synthesizing locally"
            ),
        }
    }
    synthesize_schedule(&request.vehicle, &request.catalog, now, policy)
}
