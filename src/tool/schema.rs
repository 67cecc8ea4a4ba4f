//! Servo tool catalogue.
//!
//! The names, descriptions and parameter ranges a servo board registers
//! with its MCP server. The mock accepts values outside these ranges (it
//! clamps or echoes them) but reports them as advisory violations.

use core::fmt;

use super::Params;

/// `servo.set_angle`
pub const SET_ANGLE: &str = "servo.set_angle";
/// `servo.set_preset`
pub const SET_PRESET: &str = "servo.set_preset";
/// `servo.oscillate`
pub const OSCILLATE: &str = "servo.oscillate";
/// `servo.stop`
pub const STOP: &str = "servo.stop";
/// `servo.get_angle`
pub const GET_ANGLE: &str = "servo.get_angle";

/// Type and advertised range of one tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Integer with an inclusive advertised range.
    Integer {
        /// Smallest advertised value.
        min: i64,
        /// Largest advertised value.
        max: i64,
    },
    /// Free-form string.
    String,
}

/// One named tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    /// Argument name.
    pub name: &'static str,
    /// Argument type and range.
    pub kind: PropertyKind,
}

/// One registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSchema {
    /// Namespaced tool name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Accepted parameters.
    pub properties: &'static [Property],
}

/// An integer argument outside its advertised range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeViolation {
    /// Argument name.
    pub property: &'static str,
    /// Value received.
    pub value: i64,
    /// Smallest advertised value.
    pub min: i64,
    /// Largest advertised value.
    pub max: i64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' = {} outside advertised range {}-{}",
            self.property, self.value, self.min, self.max
        )
    }
}

const fn int(name: &'static str, min: i64, max: i64) -> Property {
    Property {
        name,
        kind: PropertyKind::Integer { min, max },
    }
}

/// Every servo tool, in registration order.
pub static SERVO_TOOLS: [ToolSchema; 5] = [
    ToolSchema {
        name: SET_ANGLE,
        description: "Set the servo angle",
        properties: &[int("angle", 0, 180)],
    },
    ToolSchema {
        name: SET_PRESET,
        description: "Move the servo to a preset angle (0, 90 or 180)",
        properties: &[Property {
            name: "preset",
            kind: PropertyKind::String,
        }],
    },
    ToolSchema {
        name: OSCILLATE,
        description: "Swing the servo between two angles",
        properties: &[
            int("start_angle", 0, 180),
            int("end_angle", 0, 180),
            int("cycles", 1, 10),
            int("period_ms", 500, 5000),
        ],
    },
    ToolSchema {
        name: STOP,
        description: "Stop servo oscillation",
        properties: &[],
    },
    ToolSchema {
        name: GET_ANGLE,
        description: "Get the current servo angle",
        properties: &[],
    },
];

/// Look up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolSchema> {
    SERVO_TOOLS.iter().find(|tool| tool.name == name)
}

impl ToolSchema {
    /// Integer arguments that fall outside the advertised ranges.
    ///
    /// Missing or non-integer arguments are not reported here.
    pub fn range_violations(&self, params: &Params) -> Vec<RangeViolation> {
        self.properties
            .iter()
            .filter_map(|property| match property.kind {
                PropertyKind::Integer { min, max } => {
                    let value = params.int(property.name)?;
                    if (min..=max).contains(&value) {
                        None
                    } else {
                        Some(RangeViolation {
                            property: property.name,
                            value,
                            min,
                            max,
                        })
                    }
                }
                PropertyKind::String => None,
            })
            .collect()
    }

    /// One-line summary, e.g. `servo.set_angle(angle: 0-180)`.
    pub fn signature(&self) -> String {
        let args: Vec<String> = self
            .properties
            .iter()
            .map(|p| match p.kind {
                PropertyKind::Integer { min, max } => format!("{}: {}-{}", p.name, min, max),
                PropertyKind::String => format!("{}: string", p.name),
            })
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }
}
