//! Boundary contracts for external catalog and forecast collaborators.
//!
//! The engine itself performs no I/O. Implementations of these traits own
//! all transport, caching, timeout, and retry policy; the engine only sees
//! their results. Failures never reach the end caller: the fallback module
//! recovers from every provider error locally.

use serde::{Deserialize, Serialize};

use crate::catalog::BaselineTask;
use crate::error::ProviderError;
use crate::schedule::MaintenanceTask;
use crate::vehicle::Vehicle;

/// Source of manufacturer baseline catalogs.
pub trait CatalogProvider: Send + Sync {
    /// Unique identifier (e.g. "carmd", "fixture").
    fn name(&self) -> &str;

    /// Baseline maintenance items for a make/model/year.
    fn baseline_for(
        &self,
        make: &str,
        model: &str,
        year: i32,
    ) -> Result<Vec<BaselineTask>, ProviderError>;
}

/// Input bundle handed to a forecast service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub vehicle: Vehicle,
    pub completed_tasks: Vec<MaintenanceTask>,
    pub catalog: Vec<BaselineTask>,
}

/// External service producing a full forecast schedule.
pub trait ForecastProvider: Send + Sync {
    /// Unique identifier (e.g. "cloud-forecast", "fixture").
    fn name(&self) -> &str;

    /// Full forecast schedule for the request.
    fn full_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<Vec<MaintenanceTask>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{generic_catalog, MaintenanceCategory};

    struct FixtureCatalog;

    impl CatalogProvider for FixtureCatalog {
        fn name(&self) -> &str {
            "fixture"
        }

        fn baseline_for(
            &self,
            make: &str,
            _model: &str,
            _year: i32,
        ) -> Result<Vec<BaselineTask>, ProviderError> {
            if make.is_empty() {
                return Err(ProviderError::Malformed {
                    service: self.name().to_string(),
                    message: "empty make".to_string(),
                });
            }
            Ok(generic_catalog())
        }
    }

    #[test]
    fn catalog_provider_object_safety() {
        let provider: Box<dyn CatalogProvider> = Box::new(FixtureCatalog);
        let catalog = provider.baseline_for("Honda", "Civic", 2022).unwrap();
        assert!(!catalog.is_empty());
        assert!(provider.baseline_for("", "Civic", 2022).is_err());
    }

    #[test]
    fn forecast_request_serialization() {
        let request = ForecastRequest {
            vehicle: Vehicle::new("Honda", "Civic", 2022).with_mileage(40_000),
            completed_tasks: Vec::new(),
            catalog: vec![BaselineTask::new("Oil change", MaintenanceCategory::Engine)
                .with_distance(5_000)],
        };

        let json = serde_json::to_string(&request).unwrap();
        let decoded: ForecastRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.vehicle, request.vehicle);
        assert_eq!(decoded.catalog, request.catalog);
    }
}
