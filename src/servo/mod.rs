//! Servo module for servo-mcp.
//!
//! Provides the mock controller and the named preset positions it accepts.

mod controller;
mod preset;

pub use controller::MockController;
pub use preset::Preset;
