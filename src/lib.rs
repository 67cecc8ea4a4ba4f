//! # servo-mcp
//!
//! Simulated MCP tool-call control of a hobby servo, with a scripted test
//! driver that exercises the tools the way a client would.
//!
//! ## Features
//!
//! - **Tool-call dispatch**: `servo.set_angle`, `servo.set_preset`,
//!   `servo.oscillate`, `servo.stop` and `servo.get_angle`, decoded from JSON
//!   arguments into a typed [`Command`]
//! - **Soft failures**: bad presets and unknown tools answer `false`, never panic
//! - **Pulse model**: angles are reported with the pulse width and PWM duty a
//!   real board would emit
//! - **Scripted scenarios**: built-in suite with per-call expectations
//! - **embedded-hal 1.0**: pacing goes through `DelayNs`, so tests run instantly
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use servo_mcp::{MockController, Params};
//!
//! let mut servo = MockController::new();
//! let response = servo.call_tool("servo.set_angle", &Params::new().with("angle", 200));
//! assert_eq!(servo.angle().value(), 180);
//! println!("{}", response.message);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod motion;
pub mod scenario;
pub mod servo;
pub mod tool;

// Re-exports for ergonomic API
pub use config::{load_config, validate_config, PacingConfig, ServoConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Oscillation, OscillationPlan};
pub use scenario::{Expectation, RunReport, Scenario, ScenarioBuilder, ScenarioSuite, TestDriver};
pub use servo::{MockController, Preset};
pub use tool::{Command, Params, ReturnValue, ToolResponse};

// Unit types
pub use config::units::{Angle, Microseconds, Milliseconds};
