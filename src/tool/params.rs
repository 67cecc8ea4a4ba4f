//! Named tool-call arguments.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::ToolError;

/// Arguments of one tool call, as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from a JSON value. Anything but an object yields no arguments.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Null => Self::new(),
            other => {
                log::warn!("ignoring non-object tool arguments: {}", other);
                Self::new()
            }
        }
    }

    /// Add or replace an argument.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer argument, if present and integral.
    ///
    /// Integers outside the `i64` range saturate so that clamping still
    /// applies to them.
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.0.get(name) {
            Some(Value::Number(n)) => saturating_i64(n),
            _ => None,
        }
    }

    /// Integer argument, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::InvalidArgument` if the argument is present but
    /// not an integer.
    pub fn int_or(
        &self,
        tool: &'static str,
        name: &'static str,
        default: i64,
    ) -> Result<i64, ToolError> {
        if !self.0.contains_key(name) {
            return Ok(default);
        }

        self.int(name).ok_or(ToolError::InvalidArgument {
            tool,
            argument: name,
            expected: "an integer",
        })
    }

    /// String argument, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::InvalidArgument` if the argument is present but
    /// not a string.
    pub fn str_or<'a>(
        &'a self,
        tool: &'static str,
        name: &'static str,
        default: &'a str,
    ) -> Result<&'a str, ToolError> {
        match self.0.get(name) {
            None => Ok(default),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(ToolError::InvalidArgument {
                tool,
                argument: name,
                expected: "a string",
            }),
        }
    }

    /// Indented JSON dump used in the console trace.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| String::from("{}"))
    }
}

// Integer literals beyond `u64` are parsed as floats; those saturate by
// sign. Fractional numbers and floats within `i64` are not integers.
fn saturating_i64(n: &Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }

    let f = n.as_f64()?;
    if f.fract() != 0.0 {
        None
    } else if f >= i64::MAX as f64 {
        Some(i64::MAX)
    } else if f <= i64::MIN as f64 {
        Some(i64::MIN)
    } else {
        None
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
