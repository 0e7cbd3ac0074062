//! Vehicle facts consumed by the forecasting engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Facts about one vehicle, supplied by the caller.
///
/// The engine never mutates a vehicle; it only reads the odometer and the
/// purchase date when deriving due dates and mileages. Interval math anchors
/// on the purchase date when one is known and on "today" otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Current odometer reading, in the same unit as catalog intervals.
    pub current_mileage: i64,
    /// Purchase date. Absent for vehicles added without history.
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

impl Vehicle {
    /// Create a new vehicle with a zeroed odometer.
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Vehicle {
            make: make.into(),
            model: model.into(),
            year,
            current_mileage: 0,
            purchase_date: None,
        }
    }

    /// Set the odometer reading.
    pub fn with_mileage(mut self, mileage: i64) -> Self {
        self.current_mileage = mileage;
        self
    }

    /// Set the purchase date.
    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Anchor date for interval math: purchase date when known, otherwise today.
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        self.purchase_date.unwrap_or(today)
    }

    /// Reject odometer readings the engine cannot work with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.current_mileage < 0 {
            return Err(ValidationError::InvalidValue {
                field: "current_mileage".to_string(),
                message: format!("must be >= 0, got {}", self.current_mileage),
            });
        }
        Ok(())
    }
}
