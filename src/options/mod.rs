//! Rig configuration with TOML file support.
//!
//! Starting camera state, fit tuning and gesture sensitivities live here.
//! Options serialize to/from TOML; every section uses `#[serde(default)]`
//! so a file only needs the values it overrides.

mod camera;
mod interaction;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Starting camera state and fit tuning.
    pub camera: CameraOptions,
    /// Gesture sensitivities and default behaviors.
    pub interaction: InteractionOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// Check every section. Called on parse and when a rig is built.
    pub fn validate(&self) -> Result<(), RigError> {
        self.camera.validate()?;
        self.interaction.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, RigError> {
        let options: Self =
            toml::from_str(content).map_err(|e| RigError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), RigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RigError::invalid(name, value))
    }
}
