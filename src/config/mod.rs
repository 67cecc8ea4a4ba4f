//! Configuration module for servo-mcp.
//!
//! Provides types for loading and validating the simulated servo and the
//! demo pacing from TOML files or pre-parsed data.

mod loader;
mod pacing;
mod pulse;
mod servo;
mod system;
pub mod units;
mod validation;

pub use loader::{load_config, load_from_env, parse_config, CONFIG_ENV_VAR};
pub use pacing::PacingConfig;
pub use pulse::{PulseOutput, PulseTiming};
pub use servo::ServoConfig;
pub use system::SystemConfig;
pub use validation::{validate_config, MAX_TRIM_DEGREES};

// Re-export unit types at config level
pub use units::{Angle, Microseconds, Milliseconds};
