//! Mock servo controller.
//!
//! Stands in for a servo board reached over MCP: it keeps the one piece of
//! state a servo has (its angle) and answers tool calls with the effect the
//! board would have produced.

use crate::config::{Angle, PulseOutput, PulseTiming, ServoConfig};
use crate::motion::Oscillation;
use crate::tool::{schema, Command, Params, ToolResponse};

use super::preset::Preset;

/// Stateful stand-in for a remotely controlled servo.
///
/// The stored angle is always within `0..=180`. Only `set_angle` and a
/// valid `set_preset` change it.
#[derive(Debug, Clone)]
pub struct MockController {
    /// Servo name for logging.
    name: heapless::String<32>,

    /// Control pin the servo is wired to.
    pin: u8,

    /// Last commanded angle, untrimmed.
    angle: Angle,

    /// Angle to pulse/duty conversion.
    timing: PulseTiming,
}

impl Default for MockController {
    fn default() -> Self {
        Self::new()
    }
}

impl MockController {
    /// Create a controller with the default servo configuration (angle 90).
    pub fn new() -> Self {
        Self::from_config(&ServoConfig::default())
    }

    /// Create a controller from servo configuration.
    pub fn from_config(config: &ServoConfig) -> Self {
        Self {
            name: config.name.clone(),
            pin: config.pin,
            angle: config.initial_angle,
            timing: PulseTiming::from_config(config),
        }
    }

    /// Get the servo name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the control pin.
    #[inline]
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Get the stored angle.
    #[inline]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Pulse the hardware would currently be driven with.
    #[inline]
    pub fn pulse_output(&self) -> PulseOutput {
        self.timing.output(self.angle)
    }

    /// Handle one tool call by name.
    ///
    /// Never fails: unknown tools, malformed arguments and invalid presets
    /// come back as a `false` response and leave the angle untouched.
    pub fn call_tool(&mut self, tool: &str, params: &Params) -> ToolResponse {
        if let Some(schema) = schema::find(tool) {
            for violation in schema.range_violations(params) {
                log::warn!("{}: {}", tool, violation);
            }
        }

        match Command::parse(tool, params) {
            Ok(command) => self.execute(command),
            Err(e) => {
                log::warn!("{}: rejected call: {}", self.name, e);
                ToolResponse::failure(e.to_string())
            }
        }
    }

    /// Execute a decoded command.
    pub fn execute(&mut self, command: Command) -> ToolResponse {
        log::debug!("{}: executing {:?}", self.name, command);

        match command {
            Command::SetAngle { angle } => self.set_angle(angle),
            Command::SetPreset { preset } => self.set_preset(&preset),
            Command::Oscillate(request) => self.oscillate(&request),
            Command::Stop => ToolResponse::ok("Servo oscillation stopped"),
            Command::GetAngle => {
                ToolResponse::integer(self.angle.value(), format!("Current angle: {}", self.angle))
            }
        }
    }

    /// Clamp and store an angle. Always succeeds.
    pub fn set_angle(&mut self, degrees: i64) -> ToolResponse {
        self.angle = Angle::clamped(degrees);
        ToolResponse::ok(format!("Servo set to {}{}", self.angle, self.describe_output()))
    }

    /// Move to a preset. Fails without changing state if the preset is unknown.
    pub fn set_preset(&mut self, preset: &str) -> ToolResponse {
        match preset.parse::<Preset>() {
            Ok(preset) => {
                self.angle = preset.angle();
                ToolResponse::ok(format!(
                    "Servo moved to preset {}{}",
                    self.angle,
                    self.describe_output()
                ))
            }
            Err(e) => ToolResponse::failure(e.to_string()),
        }
    }

    /// Report an oscillation. The stored angle is not touched.
    pub fn oscillate(&self, request: &Oscillation) -> ToolResponse {
        for issue in request.issues() {
            log::warn!("{}: board would reject oscillation: {}", self.name, issue);
        }

        let plan = request.plan();
        ToolResponse::ok(format!(
            "Servo oscillating: {}° -> {}°, {} cycles, period {}ms ({} half-swings over {})",
            request.start_angle,
            request.end_angle,
            request.cycles,
            request.period_ms,
            plan.half_swings(),
            plan.total_duration(),
        ))
    }

    fn describe_output(&self) -> String {
        let out = self.pulse_output();
        if out.output_angle == self.angle {
            format!(" (pulse {}us, duty {})", out.pulse.value(), out.duty)
        } else {
            format!(
                " (trimmed to {}, pulse {}us, duty {})",
                out.output_angle,
                out.pulse.value(),
                out.duty
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ReturnValue;

    #[test]
    fn test_initial_angle() {
        let controller = MockController::new();
        assert_eq!(controller.angle(), Angle::CENTER);
        assert_eq!(controller.pin(), 12);
    }

    #[test]
    fn test_set_angle_clamps() {
        let mut controller = MockController::new();

        let response = controller.call_tool(schema::SET_ANGLE, &Params::new().with("angle", -10));
        assert!(response.is_success());
        assert_eq!(controller.angle(), Angle::MIN);

        controller.call_tool(schema::SET_ANGLE, &Params::new().with("angle", 200));
        assert_eq!(controller.angle(), Angle::MAX);
    }

    #[test]
    fn test_set_angle_clamps_integers_beyond_i64() {
        let mut controller = MockController::new();
        controller.set_angle(30);

        let params: Params = serde_json::from_str::<serde_json::Value>(
            r#"{"angle": -9223372036854775809}"#,
        )
        .unwrap()
        .into();
        assert!(controller.call_tool(schema::SET_ANGLE, &params).is_success());
        assert_eq!(controller.angle(), Angle::MIN);

        let params: Params = serde_json::from_str::<serde_json::Value>(
            r#"{"angle": 100000000000000000000}"#,
        )
        .unwrap()
        .into();
        assert!(controller.call_tool(schema::SET_ANGLE, &params).is_success());
        assert_eq!(controller.angle(), Angle::MAX);
    }

    #[test]
    fn test_set_angle_message_includes_pulse() {
        let mut controller = MockController::new();
        let response = controller.set_angle(90);
        assert_eq!(response.message, "Servo set to 90° (pulse 1500us, duty 614)");
    }

    #[test]
    fn test_invalid_preset_leaves_angle() {
        let mut controller = MockController::new();
        controller.set_angle(30);

        let response = controller.call_tool(schema::SET_PRESET, &Params::new().with("preset", "45"));
        assert_eq!(response.value, ReturnValue::Bool(false));
        assert_eq!(response.message, "Invalid preset: 45");
        assert_eq!(controller.angle().value(), 30);
    }

    #[test]
    fn test_get_angle_returns_integer() {
        let mut controller = MockController::new();
        controller.set_angle(135);

        let response = controller.call_tool(schema::GET_ANGLE, &Params::new());
        assert_eq!(response.value, ReturnValue::Integer(135));
        assert_eq!(response.message, "Current angle: 135°");
    }

    #[test]
    fn test_oscillate_and_stop_keep_angle() {
        let mut controller = MockController::new();
        controller.set_angle(45);

        let params = Params::new()
            .with("start_angle", 0)
            .with("end_angle", 90)
            .with("cycles", 3)
            .with("period_ms", 1000);
        let response = controller.call_tool(schema::OSCILLATE, &params);
        assert!(response.is_success());
        assert_eq!(
            response.message,
            "Servo oscillating: 0° -> 90°, 3 cycles, period 1000ms (6 half-swings over 3000ms)"
        );
        assert_eq!(controller.angle().value(), 45);

        let response = controller.call_tool(schema::STOP, &Params::new());
        assert!(response.is_success());
        assert_eq!(controller.angle().value(), 45);
    }

    #[test]
    fn test_unknown_tool_is_soft_failure() {
        let mut controller = MockController::new();
        let response = controller.call_tool("servo.spin", &Params::new());

        assert!(!response.is_success());
        assert_eq!(response.message, "Unknown tool: servo.spin");
        assert_eq!(controller.angle(), Angle::CENTER);
    }

    #[test]
    fn test_trim_reported_but_not_stored() {
        let config = ServoConfig {
            trim_degrees: -10,
            ..ServoConfig::default()
        };
        let mut controller = MockController::from_config(&config);

        let response = controller.set_angle(90);
        assert_eq!(controller.angle().value(), 90);
        assert!(response.message.contains("trimmed to 80°"));
    }
}
