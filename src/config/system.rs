//! System configuration - root configuration structure.

use serde::Deserialize;

use super::pacing::PacingConfig;
use super::servo::ServoConfig;

/// Root configuration structure from TOML.
///
/// Both tables are optional; a missing table takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// The simulated servo.
    #[serde(default)]
    pub servo: ServoConfig,

    /// Pause behaviour of the demo driver.
    #[serde(default)]
    pub pacing: PacingConfig,
}

impl SystemConfig {
    /// Defaults with pauses disabled, for tests and quick runs.
    pub fn instant() -> Self {
        Self {
            servo: ServoConfig::default(),
            pacing: PacingConfig::instant(),
        }
    }
}
