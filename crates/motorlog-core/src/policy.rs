//! Engine policy constants, reconfigurable via TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PolicyError;

/// Tunable constants of the forecasting engine.
///
/// The assumed annual distance is a plain usage-rate guess used to convert
/// remaining miles into a month estimate; it carries no vehicle-specific
/// adjustment and callers with better telemetry should override it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnginePolicy {
    /// Assumed distance driven per year when estimating dates from mileage.
    #[serde(default = "default_annual_distance")]
    pub assumed_annual_distance: i64,
    /// Maximum projected distance beyond the current odometer.
    #[serde(default = "default_horizon")]
    pub forecast_horizon: i64,
    /// Inclusive mileage tolerance when matching a completion against a
    /// forecast placeholder.
    #[serde(default = "default_tolerance")]
    pub match_tolerance: i64,
    /// Months granted to a freshly added vehicle whose computed due date is
    /// already past.
    #[serde(default = "default_grace")]
    pub overdue_grace_months: u32,
}

fn default_annual_distance() -> i64 {
    12_000
}
fn default_horizon() -> i64 {
    20_000
}
fn default_tolerance() -> i64 {
    500
}
fn default_grace() -> u32 {
    1
}

impl Default for EnginePolicy {
    fn default() -> Self {
        EnginePolicy {
            assumed_annual_distance: default_annual_distance(),
            forecast_horizon: default_horizon(),
            match_tolerance: default_tolerance(),
            overdue_grace_months: default_grace(),
        }
    }
}

impl EnginePolicy {
    /// Parse a policy from TOML, rejecting non-positive values.
    pub fn from_toml_str(raw: &str) -> Result<Self, PolicyError> {
        let policy: EnginePolicy =
            toml::from_str(raw).map_err(|e| PolicyError::ParseFailed(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let raw = std::fs::read_to_string(path).map_err(|e| PolicyError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// All policy values must be positive.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.assumed_annual_distance <= 0 {
            return Err(PolicyError::InvalidValue {
                key: "assumed_annual_distance",
                message: format!("must be positive, got {}", self.assumed_annual_distance),
            });
        }
        if self.forecast_horizon <= 0 {
            return Err(PolicyError::InvalidValue {
                key: "forecast_horizon",
                message: format!("must be positive, got {}", self.forecast_horizon),
            });
        }
        if self.match_tolerance <= 0 {
            return Err(PolicyError::InvalidValue {
                key: "match_tolerance",
                message: format!("must be positive, got {}", self.match_tolerance),
            });
        }
        if self.overdue_grace_months == 0 {
            return Err(PolicyError::InvalidValue {
                key: "overdue_grace_months",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let policy = EnginePolicy::default();
        assert_eq!(policy.assumed_annual_distance, 12_000);
        assert_eq!(policy.forecast_horizon, 20_000);
        assert_eq!(policy.match_tolerance, 500);
        assert_eq!(policy.overdue_grace_months, 1);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let policy = EnginePolicy::from_toml_str("assumed_annual_distance = 15000\n").unwrap();
        assert_eq!(policy.assumed_annual_distance, 15_000);
        assert_eq!(policy.forecast_horizon, 20_000);
    }

    #[test]
    fn empty_toml_is_default() {
        let policy = EnginePolicy::from_toml_str("").unwrap();
        assert_eq!(policy, EnginePolicy::default());
    }

    #[test]
    fn non_positive_values_rejected() {
        assert!(EnginePolicy::from_toml_str("assumed_annual_distance = 0\n").is_err());
        assert!(EnginePolicy::from_toml_str("forecast_horizon = -20000\n").is_err());
        assert!(EnginePolicy::from_toml_str("match_tolerance = -1\n").is_err());
        assert!(EnginePolicy::from_toml_str("overdue_grace_months = 0\n").is_err());
    }

    #[test]
    fn invalid_toml_rejected() {
        assert!(matches!(
            EnginePolicy::from_toml_str("forecast_horizon = \"far\"\n"),
            Err(PolicyError::ParseFailed(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "forecast_horizon = 30000").unwrap();
        let policy = EnginePolicy::load(file.path()).unwrap();
        assert_eq!(policy.forecast_horizon, 30_000);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = EnginePolicy::load(Path::new("/nonexistent/motorlog-policy.toml"));
        assert!(matches!(err, Err(PolicyError::LoadFailed { .. })));
    }
}
