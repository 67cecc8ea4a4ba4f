//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{PacingConfig, ServoConfig, SystemConfig};

/// Largest trim accepted, in degrees either way.
pub const MAX_TRIM_DEGREES: i32 = 90;

/// Validate a system configuration.
///
/// Checks:
/// - Trim is within ±90 degrees
/// - Pulse range is non-empty (min < max)
/// - PWM period is longer than the longest pulse
/// - Duty resolution is 1-20 bits
/// - Pace percent is 0-200
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_servo(&config.servo)?;
    validate_pacing(&config.pacing)?;
    Ok(())
}

fn validate_servo(config: &ServoConfig) -> Result<()> {
    if config.trim_degrees.abs() > MAX_TRIM_DEGREES {
        return Err(Error::Config(ConfigError::InvalidTrim(config.trim_degrees)));
    }

    if config.min_pulse >= config.max_pulse {
        return Err(Error::Config(ConfigError::InvalidPulseRange {
            min_us: config.min_pulse.0,
            max_us: config.max_pulse.0,
        }));
    }

    // Period must fit the longest pulse, which also rules out 0 Hz
    if config.frequency_hz == 0 || config.period_us() <= config.max_pulse.0 {
        return Err(Error::Config(ConfigError::InvalidFrequency(config.frequency_hz)));
    }

    if config.duty_resolution_bits == 0 || config.duty_resolution_bits > 20 {
        return Err(Error::Config(ConfigError::InvalidDutyResolution(
            config.duty_resolution_bits,
        )));
    }

    Ok(())
}

fn validate_pacing(config: &PacingConfig) -> Result<()> {
    if config.pace_percent > 200 {
        return Err(Error::Config(ConfigError::InvalidPacePercent(
            config.pace_percent,
        )));
    }

    Ok(())
}
