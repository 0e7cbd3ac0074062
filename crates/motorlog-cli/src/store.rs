//! JSON file persistence for the CLI.
//!
//! The core engine owns no storage; the CLI plays the caller role and keeps
//! one vehicle plus its task list in a plain JSON file.

use motorlog_core::{MaintenanceTask, Vehicle};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    #[serde(default)]
    pub tasks: Vec<MaintenanceTask>,
}

impl Store {
    /// Load the store; an absent file is an empty store.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Store::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the store, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Schedule operations need vehicle facts first.
    pub fn require_vehicle(&self) -> Result<&Vehicle, Box<dyn std::error::Error>> {
        self.vehicle
            .as_ref()
            .ok_or_else(|| "no vehicle configured; run `motorlog vehicle set` first".into())
    }
}
