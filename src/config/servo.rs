//! Servo configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::{Angle, Microseconds};

/// Complete servo configuration from TOML.
///
/// Every field has a default matching a standard 180° hobby servo wired to
/// GPIO 12 and driven by a 50 Hz, 13-bit PWM timer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServoConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Control pin the servo signal wire is connected to.
    pub pin: u8,

    /// Mechanical trim in degrees, added to the output pulse only.
    pub trim_degrees: i32,

    /// Angle the servo reports before the first command.
    pub initial_angle: Angle,

    /// Pulse width commanding 0 degrees.
    #[serde(rename = "min_pulse_us")]
    pub min_pulse: Microseconds,

    /// Pulse width commanding 180 degrees.
    #[serde(rename = "max_pulse_us")]
    pub max_pulse: Microseconds,

    /// PWM frequency in hertz.
    pub frequency_hz: u32,

    /// PWM timer resolution in bits.
    pub duty_resolution_bits: u8,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            name: String::try_from("servo").unwrap_or_default(),
            pin: 12,
            trim_degrees: 0,
            initial_angle: Angle::CENTER,
            min_pulse: Microseconds(500),
            max_pulse: Microseconds(2500),
            frequency_hz: 50,
            duty_resolution_bits: 13,
        }
    }
}

impl ServoConfig {
    /// PWM period in microseconds.
    pub fn period_us(&self) -> u32 {
        if self.frequency_hz == 0 {
            u32::MAX
        } else {
            1_000_000 / self.frequency_hz
        }
    }

    /// Full-scale duty count for the configured resolution.
    pub fn duty_scale(&self) -> u32 {
        1u32 << self.duty_resolution_bits.min(31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = ServoConfig::default();

        // 50 Hz => 20 ms period
        assert_eq!(config.period_us(), 20_000);
        // 13 bits => 8192 counts
        assert_eq!(config.duty_scale(), 8192);
        assert_eq!(config.pin, 12);
        assert_eq!(config.initial_angle, Angle::CENTER);
    }
}
