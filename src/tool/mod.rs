//! Tool-call layer for servo-mcp.
//!
//! Decodes MCP-style tool calls (a namespaced name plus JSON arguments)
//! into typed servo commands, and describes the tools a servo board offers.

mod command;
mod params;
mod response;
pub mod schema;

pub use command::Command;
pub use params::Params;
pub use response::{ReturnValue, ToolResponse};
pub use schema::{RangeViolation, ToolSchema, SERVO_TOOLS};
