use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, CommandResult};

/// Tunables for a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Distance from the defining point to the far display endpoint of rays
    /// and lines.
    pub projection_distance: f64,
    /// Display flag used when a construction does not pass `--show`.
    pub default_visible: bool,
    /// Seed for generated colors. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            projection_distance: 1.0e6,
            default_visible: true,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(text: &str) -> CommandResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| CommandError::Config(e.to_string()))?;
        if !config.projection_distance.is_finite() || config.projection_distance <= 0.0 {
            return Err(CommandError::Config(format!(
                "projection_distance must be a positive number, got {}",
                config.projection_distance
            )));
        }
        Ok(config)
    }

    /// Read a TOML config file. A missing or unreadable file is a
    /// [`CommandError::Config`].
    pub fn load(path: &Path) -> CommandResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CommandError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
