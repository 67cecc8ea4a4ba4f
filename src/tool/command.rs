//! Typed servo commands built from tool calls.

use crate::error::ToolError;
use crate::motion::Oscillation;

use super::schema::{GET_ANGLE, OSCILLATE, SET_ANGLE, SET_PRESET, STOP};
use super::Params;

/// A servo command, decoded from a tool name and its arguments.
///
/// Absent arguments take their defaults here; clamping and preset
/// validation happen when the command is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to an angle (clamped on execution).
    SetAngle {
        /// Requested angle in degrees.
        angle: i64,
    },
    /// Move to a named preset.
    SetPreset {
        /// Requested preset, not yet validated.
        preset: String,
    },
    /// Swing between two angles.
    Oscillate(Oscillation),
    /// Stop any oscillation.
    Stop,
    /// Report the current angle.
    GetAngle,
}

impl Command {
    /// Decode a tool call.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::UnknownTool` for unregistered names and
    /// `ToolError::InvalidArgument` for arguments of the wrong type.
    pub fn parse(tool: &str, params: &Params) -> Result<Self, ToolError> {
        match tool {
            SET_ANGLE => Ok(Command::SetAngle {
                angle: params.int_or(SET_ANGLE, "angle", 90)?,
            }),
            SET_PRESET => Ok(Command::SetPreset {
                preset: params.str_or(SET_PRESET, "preset", "90")?.to_string(),
            }),
            OSCILLATE => {
                let defaults = Oscillation::default();
                Ok(Command::Oscillate(Oscillation {
                    start_angle: params.int_or(OSCILLATE, "start_angle", defaults.start_angle)?,
                    end_angle: params.int_or(OSCILLATE, "end_angle", defaults.end_angle)?,
                    cycles: params.int_or(OSCILLATE, "cycles", defaults.cycles)?,
                    period_ms: params.int_or(OSCILLATE, "period_ms", defaults.period_ms)?,
                }))
            }
            STOP => Ok(Command::Stop),
            GET_ANGLE => Ok(Command::GetAngle),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

}
