//! Unit tests for TOML configuration parsing.

use servo_mcp::config::{parse_config, SystemConfig};
use servo_mcp::error::{ConfigError, Error};
use servo_mcp::{Angle, Microseconds};

/// Test parsing a fully specified configuration.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[servo]
name = "wrist"
pin = 18
trim_degrees = 3
initial_angle = 0
min_pulse_us = 1000
max_pulse_us = 2000
frequency_hz = 100
duty_resolution_bits = 14

[pacing]
enabled = true
pace_percent = 150
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.servo.name.as_str(), "wrist");
    assert_eq!(config.servo.pin, 18);
    assert_eq!(config.servo.trim_degrees, 3);
    assert_eq!(config.servo.initial_angle, Angle::MIN);
    assert_eq!(config.servo.min_pulse, Microseconds(1000));
    assert_eq!(config.servo.max_pulse, Microseconds(2000));
    assert_eq!(config.servo.period_us(), 10_000);
    assert_eq!(config.servo.duty_scale(), 16_384);
    assert_eq!(config.pacing.pace_percent, 150);
}

/// Test that a partial table keeps defaults for the remaining fields.
#[test]
fn test_partial_table_keeps_defaults() {
    let config: SystemConfig = toml::from_str("[servo]\npin = 5\n").expect("Failed to parse TOML");

    assert_eq!(config.servo.pin, 5);
    assert_eq!(config.servo.name.as_str(), "servo");
    assert_eq!(config.servo.initial_angle, Angle::CENTER);
    assert_eq!(config.servo.max_pulse, Microseconds(2500));
    assert!(config.pacing.enabled);
}

/// Test that a wrong value type is a parse error.
#[test]
fn test_wrong_type_is_parse_error() {
    let result = parse_config("[servo]\npin = \"twelve\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that names longer than 32 characters are rejected.
#[test]
fn test_name_too_long() {
    let toml_str = format!("[servo]\nname = \"{}\"\n", "x".repeat(33));
    assert!(parse_config(&toml_str).is_err());

    let toml_str = format!("[servo]\nname = \"{}\"\n", "x".repeat(32));
    assert!(parse_config(&toml_str).is_ok());
}

/// Test that negative pulse widths cannot be expressed.
#[test]
fn test_negative_pulse_is_parse_error() {
    let result = parse_config("[servo]\nmin_pulse_us = -500\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}
