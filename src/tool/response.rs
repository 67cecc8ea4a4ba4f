//! Tool call results.

use core::fmt;

/// Value returned by a tool, as on the MCP wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnValue {
    /// Success flag.
    Bool(bool),
    /// Integer payload (the current angle for `servo.get_angle`).
    Integer(i32),
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnValue::Bool(b) => write!(f, "{}", b),
            ReturnValue::Integer(v) => write!(f, "{}", v),
        }
    }
}

/// Result of one simulated tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResponse {
    /// Value returned to the caller.
    pub value: ReturnValue,
    /// Human-readable description of the simulated effect.
    pub message: String,
}

impl ToolResponse {
    /// Successful call returning `true`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            value: ReturnValue::Bool(true),
            message: message.into(),
        }
    }

    /// Soft failure returning `false`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            value: ReturnValue::Bool(false),
            message: message.into(),
        }
    }

    /// Successful call returning an integer.
    pub fn integer(value: i32, message: impl Into<String>) -> Self {
        Self {
            value: ReturnValue::Integer(value),
            message: message.into(),
        }
    }

    /// Whether the call succeeded. Integer results always count as success.
    pub fn is_success(&self) -> bool {
        !matches!(self.value, ReturnValue::Bool(false))
    }
}
