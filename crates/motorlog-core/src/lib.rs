//! # Motorlog Core Library
//!
//! This library provides the core business logic for Motorlog, a vehicle
//! maintenance tracker. Given vehicle facts, a baseline interval catalog,
//! and the current task list, the engine derives concrete due dates and
//! mileages, classifies task lifecycle status, projects future occurrences
//! within a bounded mileage horizon, and reconciles real completions
//! against forecast placeholders so reminders never duplicate.
//!
//! ## Architecture
//!
//! - **Interval resolution**: converts manufacturer baseline intervals into
//!   concrete due dates/mileages for one vehicle
//! - **Classification**: derives lifecycle status from due information and
//!   the present, via explicit tagged actions
//! - **Forecasting**: projects recurring items over a bounded horizon and
//!   merges them into the schedule without duplication
//! - **Reconciliation**: archives forecast placeholders superseded by real
//!   completions
//! - **Providers**: trait boundaries for external catalog and forecast
//!   services, with a deterministic local fallback
//!
//! The engine performs no I/O and reads no ambient clock: callers pass the
//! current time and the odometer snapshot into every operation, so tests
//! can inject fixed clocks and fixture catalogs.
//!
//! ## Key Components
//!
//! - [`Engine`]: facade over the full pipeline
//! - [`EnginePolicy`]: tunable constants (usage rate, horizon, tolerance)
//! - [`MaintenanceTask`]: a schedule entry
//! - [`ForecastProvider`]/[`CatalogProvider`]: external collaborator traits

pub mod catalog;
pub mod classify;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod forecast;
pub mod merge;
pub mod policy;
pub mod provider;
pub mod reconcile;
pub mod resolver;
pub mod schedule;
pub mod vehicle;

pub use catalog::{generic_catalog, sanitize_catalog, BaselineTask, MaintenanceCategory, Urgency};
pub use classify::ClassifyAction;
pub use engine::Engine;
pub use error::{CoreError, PolicyError, ProviderError, Result, ValidationError};
pub use policy::EnginePolicy;
pub use provider::{CatalogProvider, ForecastProvider, ForecastRequest};
pub use resolver::ResolvedDue;
pub use schedule::{active_tasks, archived_tasks, Importance, MaintenanceTask, TaskStatus};
pub use vehicle::Vehicle;
