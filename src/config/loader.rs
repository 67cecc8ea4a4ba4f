//! Configuration loading from files.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Environment variable naming an optional TOML config for the demo.
pub const CONFIG_ENV_VAR: &str = "SERVO_DEMO_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use servo_mcp::load_config;
///
/// let config = load_config("servo.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(e.to_string())))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(e.message().to_string())))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Load the config named by [`CONFIG_ENV_VAR`], if set.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn load_from_env() -> Result<Option<SystemConfig>> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            log::info!("loading config from {}", Path::new(&path).display());
            load_config(path).map(Some)
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.servo.pin, 12);
        assert_eq!(config.servo.initial_angle.value(), 90);
        assert!(config.pacing.enabled);
    }

    #[test]
    fn test_parse_servo_table() {
        let toml = r#"
[servo]
name = "gripper"
pin = 4
trim_degrees = -5
initial_angle = 0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.servo.name.as_str(), "gripper");
        assert_eq!(config.servo.pin, 4);
        assert_eq!(config.servo.trim_degrees, -5);
        assert_eq!(config.servo.initial_angle.value(), 0);
        // Untouched fields keep their defaults
        assert_eq!(config.servo.frequency_hz, 50);
    }

    #[test]
    fn test_parse_pacing_table() {
        let toml = r#"
[pacing]
enabled = false
pace_percent = 10
"#;

        let config = parse_config(toml).unwrap();
        assert!(!config.pacing.enabled);
        assert_eq!(config.pacing.pace_percent, 10);
    }

    #[test]
    fn test_out_of_range_initial_angle_is_parse_error() {
        let toml = r#"
[servo]
initial_angle = 270
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/nonexistent/servo-demo.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
