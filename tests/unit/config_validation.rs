//! Unit tests for configuration validation.

use servo_mcp::config::{parse_config, validate_config, SystemConfig, MAX_TRIM_DEGREES};
use servo_mcp::error::{ConfigError, Error};

/// Test that the built-in defaults validate.
#[test]
fn test_defaults_pass_validation() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
    assert!(validate_config(&SystemConfig::instant()).is_ok());
}

/// Test the trim limit at and past the boundary.
#[test]
fn test_trim_boundary() {
    let ok = format!("[servo]\ntrim_degrees = {}\n", -MAX_TRIM_DEGREES);
    assert!(parse_config(&ok).is_ok());

    let result = parse_config("[servo]\ntrim_degrees = 91\n");
    assert_eq!(result.err(), Some(Error::Config(ConfigError::InvalidTrim(91))));
}

/// Test that an equal min and max pulse is rejected.
#[test]
fn test_empty_pulse_range() {
    let result = parse_config("[servo]\nmin_pulse_us = 1500\nmax_pulse_us = 1500\n");
    assert_eq!(
        result.err(),
        Some(Error::Config(ConfigError::InvalidPulseRange {
            min_us: 1500,
            max_us: 1500,
        }))
    );
}

/// Test that the PWM period must leave room for the longest pulse.
#[test]
fn test_frequency_limits() {
    let result = parse_config("[servo]\nfrequency_hz = 0\n");
    assert_eq!(result.err(), Some(Error::Config(ConfigError::InvalidFrequency(0))));

    // 500 Hz gives a 2000us period, shorter than the 2500us max pulse
    let result = parse_config("[servo]\nfrequency_hz = 500\n");
    assert_eq!(result.err(), Some(Error::Config(ConfigError::InvalidFrequency(500))));

    assert!(parse_config("[servo]\nfrequency_hz = 300\n").is_ok());
}

/// Test duty resolution bounds.
#[test]
fn test_duty_resolution_bounds() {
    for bits in [0u8, 21] {
        let result = parse_config(&format!("[servo]\nduty_resolution_bits = {bits}\n"));
        assert_eq!(
            result.err(),
            Some(Error::Config(ConfigError::InvalidDutyResolution(bits)))
        );
    }

    assert!(parse_config("[servo]\nduty_resolution_bits = 20\n").is_ok());
}

/// Test pace percent bounds and the error message.
#[test]
fn test_pace_percent_limit() {
    assert!(parse_config("[pacing]\npace_percent = 200\n").is_ok());

    let err = parse_config("[pacing]\npace_percent = 201\n").unwrap_err();
    assert_eq!(err, Error::Config(ConfigError::InvalidPacePercent(201)));
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid pace percent: 201. Must be 0-200"
    );
}
