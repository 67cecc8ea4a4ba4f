//! Pacing configuration for the scripted demo run.

use serde::Deserialize;

use super::units::Milliseconds;

/// How the test driver spaces out its tool calls.
///
/// Pauses in the scripted scenarios exist only so a human can follow the
/// trace. `pace_percent` scales every pause; `enabled = false` skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Whether pauses are honoured at all.
    pub enabled: bool,

    /// Pause scaling as a percentage (0-200, 100 = as scripted).
    pub pace_percent: u16,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pace_percent: 100,
        }
    }
}

impl PacingConfig {
    /// Pacing with every pause skipped.
    pub const fn instant() -> Self {
        Self {
            enabled: false,
            pace_percent: 100,
        }
    }

    /// Effective duration of a scripted pause.
    pub fn effective(&self, scripted: Milliseconds) -> Milliseconds {
        if self.enabled {
            scripted.scaled(self.pace_percent)
        } else {
            Milliseconds(0)
        }
    }
}
