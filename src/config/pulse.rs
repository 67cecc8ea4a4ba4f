//! Pulse timing derived from servo configuration.

use super::servo::ServoConfig;
use super::units::{Angle, Microseconds};

/// Derived PWM parameters computed from servo configuration.
///
/// These are computed once when the controller is created and used to
/// describe what the hardware would be driven with for a given angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseTiming {
    /// Pulse width at 0 degrees, in microseconds.
    pub min_pulse_us: f32,

    /// Pulse width span from 0 to 180 degrees, in microseconds.
    pub span_us: f32,

    /// PWM period in microseconds.
    pub period_us: f32,

    /// Duty count corresponding to a 100% duty cycle.
    pub duty_scale: f32,

    /// Trim applied to the output angle before conversion.
    pub trim_degrees: i32,
}

/// What the PWM channel would be driven with for one angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseOutput {
    /// Angle after trim, as seen by the servo horn.
    pub output_angle: Angle,
    /// Pulse width, rounded to the nearest microsecond.
    pub pulse: Microseconds,
    /// Raw duty count written to the timer.
    pub duty: u32,
}

impl PulseTiming {
    /// Compute pulse timing from servo configuration.
    pub fn from_config(config: &ServoConfig) -> Self {
        let min_pulse_us = config.min_pulse.0 as f32;
        let span_us = config.max_pulse.0.saturating_sub(config.min_pulse.0) as f32;

        Self {
            min_pulse_us,
            span_us,
            period_us: config.period_us() as f32,
            duty_scale: config.duty_scale() as f32,
            trim_degrees: config.trim_degrees,
        }
    }

    /// Pulse width in microseconds for an untrimmed angle.
    #[inline]
    pub fn pulse_width_us(&self, angle: Angle) -> f32 {
        self.min_pulse_us + (angle.value() as f32 / Angle::MAX.value() as f32) * self.span_us
    }

    /// Duty count for a pulse width. Truncates, like the timer register does.
    #[inline]
    pub fn pulse_to_duty(&self, pulse_us: f32) -> u32 {
        libm::floorf(pulse_us / self.period_us * self.duty_scale) as u32
    }

    /// Full output for a commanded angle, with trim applied.
    pub fn output(&self, angle: Angle) -> PulseOutput {
        let output_angle = angle.trimmed(self.trim_degrees);
        let pulse_us = self.pulse_width_us(output_angle);

        PulseOutput {
            output_angle,
            pulse: Microseconds(libm::roundf(pulse_us) as u32),
            duty: self.pulse_to_duty(pulse_us),
        }
    }
}
