//! Persisted dashboard preferences (native file storage)
//!
//! Directory structure:
//! ~/.macropulse/
//!   preferences.yaml     # Weights and scenario toggles
//!   macropulse.log       # Rotating log file

use std::fs;
use std::path::PathBuf;

use macropulse_core::{ScenarioFlags, ScenarioId, WeightCategory, WeightConfig};
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

pub const PREFERENCES_FILE: &str = "preferences.yaml";

/// Weights and scenario toggles carried between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub weights: WeightConfig,
    pub scenarios: ScenarioFlags,
}

/// Command-line changes layered over the stored preferences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub weights: Vec<(WeightCategory, f64)>,
    /// Scenarios switched on
    pub enable: Vec<ScenarioId>,
    /// Scenarios switched off; wins over `enable`
    pub disable: Vec<ScenarioId>,
    /// Switch every stored scenario off before `enable` applies
    pub clear_scenarios: bool,
}

impl Preferences {
    /// Apply command-line overrides on top of the stored values
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        for &(category, value) in &overrides.weights {
            tracing::debug!(?category, value, "Weight override");
            self.weights.set(category, value);
        }
        if overrides.clear_scenarios {
            tracing::debug!("Scenarios cleared");
            self.scenarios = ScenarioFlags::all_inactive();
        }
        for &id in &overrides.enable {
            tracing::debug!(scenario = %id, "Scenario enabled");
            self.scenarios.set(id, true);
        }
        for &id in &overrides.disable {
            tracing::debug!(scenario = %id, "Scenario disabled");
            self.scenarios.set(id, false);
        }
    }
}

/// Parse a `name=value` weight override, e.g. `growth=1.5`
pub fn parse_weight_override(arg: &str) -> Result<(WeightCategory, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{arg}'"))?;
    let category = name.parse::<WeightCategory>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{value}': {e}"))?;
    if !value.is_finite() {
        return Err(format!("weight must be finite, got '{value}'"));
    }
    Ok((category, value))
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding the preferences file
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.macropulse/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".macropulse")
    }

    fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    /// Load preferences, or defaults when none were saved yet
    pub fn load(&self) -> Result<Preferences, StorageError> {
        let path = self.preferences_path();
        if !path.exists() {
            tracing::debug!("No preferences file, using defaults");
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read preferences: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse preferences: {}", e)))
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        let yaml = serde_saphyr::to_string(preferences).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize preferences: {}", e))
        })?;

        atomic_write(&self.preferences_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write preferences: {}", e)))?;

        tracing::info!(path = %self.preferences_path().display(), "Preferences saved");
        Ok(())
    }
}
