//! Error types for servo-mcp.
//!
//! Provides unified error handling across configuration, tool calls, and
//! scenario execution.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all servo-mcp operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Tool call could not be turned into a command
    Tool(ToolError),
    /// Scenario construction or lookup error
    Scenario(ScenarioError),
    /// Writing the console trace failed
    Output(String),
    /// The run was interrupted by the user (Ctrl-C)
    Interrupted,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(String),
    /// File I/O error
    IoError(String),
    /// Trim outside -90..=90
    InvalidTrim(i32),
    /// Pulse range is empty or inverted
    InvalidPulseRange {
        /// Pulse width at 0 degrees (microseconds)
        min_us: u32,
        /// Pulse width at 180 degrees (microseconds)
        max_us: u32,
    },
    /// PWM frequency must be > 0 and leave room for the longest pulse
    InvalidFrequency(u32),
    /// Duty resolution must be 1-20 bits
    InvalidDutyResolution(u8),
    /// Pace percent must be 0-200
    InvalidPacePercent(u16),
}

/// Tool call errors. All of these are soft failures at the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// No tool with this name is registered
    UnknownTool(String),
    /// An argument is present but has the wrong JSON type
    InvalidArgument {
        /// Tool name
        tool: &'static str,
        /// Argument name
        argument: &'static str,
        /// Expected JSON type
        expected: &'static str,
    },
    /// Preset is not one of "0", "90", "180"
    InvalidPreset(String),
}

/// Scenario construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// Scenario has no steps
    Empty,
    /// Scenario name is invalid or already taken
    InvalidName(heapless::String<64>),
    /// Expectation attached before any call step
    ExpectationWithoutCall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Tool(e) => write!(f, "Tool error: {}", e),
            Error::Scenario(e) => write!(f, "Scenario error: {}", e),
            Error::Output(msg) => write!(f, "Output error: {}", msg),
            Error::Interrupted => write!(f, "Interrupted by user"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::InvalidTrim(v) => write!(f, "Invalid trim: {}. Must be -90 to 90", v),
            ConfigError::InvalidPulseRange { min_us, max_us } => {
                write!(f, "Invalid pulse range: min ({}us) must be < max ({}us)", min_us, max_us)
            }
            ConfigError::InvalidFrequency(v) => {
                write!(f, "Invalid PWM frequency: {}Hz. Period must exceed the max pulse", v)
            }
            ConfigError::InvalidDutyResolution(v) => {
                write!(f, "Invalid duty resolution: {} bits. Must be 1-20", v)
            }
            ConfigError::InvalidPacePercent(v) => {
                write!(f, "Invalid pace percent: {}. Must be 0-200", v)
            }
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::UnknownTool(name) => write!(f, "Unknown tool: {}", name),
            ToolError::InvalidArgument { tool, argument, expected } => {
                write!(f, "{}: argument '{}' must be {}", tool, argument, expected)
            }
            ToolError::InvalidPreset(preset) => write!(f, "Invalid preset: {}", preset),
        }
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Empty => write!(f, "Scenario has no steps"),
            ScenarioError::InvalidName(name) => write!(f, "Invalid scenario name: {}", name),
            ScenarioError::ExpectationWithoutCall => {
                write!(f, "Expectation must follow a tool call step")
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ToolError> for Error {
    fn from(e: ToolError) -> Self {
        Error::Tool(e)
    }
}

impl From<ScenarioError> for Error {
    fn from(e: ScenarioError) -> Self {
        Error::Scenario(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Output(e.to_string())
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}

impl std::error::Error for ToolError {}

impl std::error::Error for ScenarioError {}
