//! Tunable gameplay parameters.

use std::path::Path;

use serde::Deserialize;
use slingcast_core::constants::{DEFAULT_IMPULSE_Y, DEFAULT_IMPULSE_Z, DEFAULT_RAY_LENGTH};
use slingcast_core::{Error, Result};

use crate::launcher::Launcher;

/// Tunable parameters for the throwable systems.
///
/// Deserialized from a RON file; omitted fields keep their defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ThrowTuning {
    /// Maximum probe ray length in world units
    pub ray_length: f32,
    /// Launch impulse along the world Y axis
    pub impulse_y: f32,
    /// Launch impulse along the world Z axis
    pub impulse_z: f32,
}

impl Default for ThrowTuning {
    fn default() -> Self {
        Self {
            ray_length: DEFAULT_RAY_LENGTH,
            impulse_y: DEFAULT_IMPULSE_Y,
            impulse_z: DEFAULT_IMPULSE_Z,
        }
    }
}

impl ThrowTuning {
    /// Load tuning from a RON file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        ron::from_str(&text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Build the launcher configured by this tuning
    #[must_use]
    pub const fn launcher(&self) -> Launcher {
        Launcher::new(self.impulse_y, self.impulse_z)
    }
}
