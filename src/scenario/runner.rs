//! Scripted test driver.
//!
//! Plays scenarios against a [`MockController`], writing a console trace of
//! every call and tallying how the outcomes compare with what each step
//! expected.

use std::io::Write;

use embedded_hal::delay::DelayNs;

use crate::config::units::Milliseconds;
use crate::error::Result;
use crate::servo::MockController;
use crate::tool::{ReturnValue, SERVO_TOOLS};

use super::builder::{Expectation, Scenario, Step, ToolCall};
use super::pacing::Pacer;
use super::registry::ScenarioSuite;

const RULE: &str = "==================================================";

/// A call whose outcome differed from its expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Title of the scenario the call belongs to.
    pub scenario: String,
    /// Tool invoked.
    pub tool: String,
    /// What the step expected.
    pub expected: Expectation,
    /// What the controller returned.
    pub actual: ReturnValue,
}

/// Tally of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Scenarios played to the end.
    pub scenarios: usize,
    /// Tool calls made.
    pub calls: usize,
    /// Calls answered with `false`.
    pub soft_failures: usize,
    /// Calls that did not meet their expectation.
    pub mismatches: Vec<Mismatch>,
    /// Total time spent pausing.
    pub paused: Milliseconds,
}

impl RunReport {
    /// Whether every call met its expectation.
    pub fn all_matched(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Drives scenarios against a controller.
pub struct TestDriver<'a, D: DelayNs, W: Write> {
    controller: &'a mut MockController,
    pacer: Pacer<D>,
    out: W,
}

impl<'a, D: DelayNs, W: Write> TestDriver<'a, D, W> {
    /// Create a driver writing its trace to `out`.
    pub fn new(controller: &'a mut MockController, pacer: Pacer<D>, out: W) -> Self {
        Self {
            controller,
            pacer,
            out,
        }
    }

    /// Print the banner and the tool catalogue.
    pub fn print_header(&mut self) -> Result<()> {
        writeln!(self.out, "Servo control test")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(
            self.out,
            "Tools on '{}' (pin {}):",
            self.controller.name(),
            self.controller.pin()
        )?;
        for tool in SERVO_TOOLS.iter() {
            writeln!(self.out, "  {} - {}", tool.signature(), tool.description)?;
        }
        Ok(())
    }

    /// Play one scenario, adding its outcomes to `report`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interrupted` if the user stops the run, or an output
    /// error if the trace cannot be written. Soft failures are not errors.
    pub fn run_scenario(&mut self, scenario: &Scenario, report: &mut RunReport) -> Result<()> {
        log::info!("running scenario '{}'", scenario.title);
        writeln!(self.out)?;
        writeln!(self.out, "=== {} ===", scenario.title)?;

        for step in &scenario.steps {
            self.pacer.checkpoint()?;
            match step {
                Step::Narrate(text) => writeln!(self.out, "\n{}", text)?,
                Step::Call(call) => self.call(&scenario.title, call, report)?,
                Step::Pause(ms) => {
                    let waited = self.pacer.pause(*ms)?;
                    report.paused = report.paused + waited;
                }
            }
        }

        report.scenarios += 1;
        Ok(())
    }

    /// Play every scenario of a suite, then print the summary and the
    /// pre-deployment checklist.
    pub fn run_suite(&mut self, suite: &ScenarioSuite) -> Result<RunReport> {
        let mut report = RunReport::default();

        self.print_header()?;
        for (_, scenario) in suite.iter() {
            self.run_scenario(scenario, &mut report)?;
        }

        self.print_summary(&report)?;
        self.print_checklist()?;
        Ok(report)
    }

    /// Release the trace writer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn call(&mut self, scenario: &str, call: &ToolCall, report: &mut RunReport) -> Result<()> {
        writeln!(self.out, "\nCalling tool: {}", call.tool)?;
        writeln!(self.out, "Parameters: {}", call.params.to_pretty_json())?;

        let response = self.controller.call_tool(&call.tool, &call.params);
        writeln!(self.out, "{}", response.message)?;
        if let ReturnValue::Integer(value) = response.value {
            writeln!(self.out, "Returned: {}", value)?;
        }

        report.calls += 1;
        if !response.is_success() {
            report.soft_failures += 1;
        }

        if !call.expect.matches(&response) {
            log::warn!(
                "{}: expected {}, got {}",
                call.tool,
                call.expect,
                response.value
            );
            report.mismatches.push(Mismatch {
                scenario: scenario.to_string(),
                tool: call.tool.clone(),
                expected: call.expect,
                actual: response.value,
            });
        }

        Ok(())
    }

    fn print_summary(&mut self, report: &RunReport) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== Tests completed ===")?;
        writeln!(
            self.out,
            "{} scenarios, {} calls, {} soft failures, {} mismatches",
            report.scenarios,
            report.calls,
            report.soft_failures,
            report.mismatches.len()
        )?;

        if report.all_matched() {
            writeln!(self.out, "Every call behaved as expected")?;
        } else {
            for m in &report.mismatches {
                writeln!(
                    self.out,
                    "  [{}] {}: expected {}, got {}",
                    m.scenario, m.tool, m.expected, m.actual
                )?;
            }
        }
        Ok(())
    }

    fn print_checklist(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Before running on real hardware, check that:")?;
        writeln!(self.out, "1. The servo is connected to GPIO {}", self.controller.pin())?;
        writeln!(self.out, "2. The servo has a stable 5V supply")?;
        writeln!(self.out, "3. The board is connected to WiFi")?;
        writeln!(self.out, "4. The MCP protocol is working")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PacingConfig;
    use crate::error::Error;
    use crate::scenario::builder::ScenarioBuilder;
    use crate::scenario::interrupt::InterruptFlag;
    use crate::tool::schema;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use serde_json::json;

    fn instant_pacer(flag: InterruptFlag) -> Pacer<NoopDelay> {
        Pacer::new(NoopDelay::new(), PacingConfig::instant(), flag)
    }

    #[test]
    fn test_trace_format() {
        let mut controller = MockController::new();
        let scenario = ScenarioBuilder::new("Single")
            .call(schema::SET_ANGLE, json!({ "angle": 0 }))
            .build()
            .unwrap();

        let mut driver = TestDriver::new(
            &mut controller,
            instant_pacer(InterruptFlag::new()),
            Vec::new(),
        );
        let mut report = RunReport::default();
        driver.run_scenario(&scenario, &mut report).unwrap();

        let trace = String::from_utf8(driver.into_output()).unwrap();
        assert_eq!(
            trace,
            "\n=== Single ===\n\
             \nCalling tool: servo.set_angle\n\
             Parameters: {\n  \"angle\": 0\n}\n\
             Servo set to 0° (pulse 500us, duty 204)\n"
        );
        assert_eq!(report.calls, 1);
        assert_eq!(report.scenarios, 1);
    }

    #[test]
    fn test_mismatch_recorded() {
        let mut controller = MockController::new();
        let scenario = ScenarioBuilder::new("Wrong")
            .call(schema::GET_ANGLE, json!({}))
            .expect(Expectation::Returns(10))
            .build()
            .unwrap();

        let mut driver = TestDriver::new(
            &mut controller,
            instant_pacer(InterruptFlag::new()),
            Vec::new(),
        );
        let mut report = RunReport::default();
        driver.run_scenario(&scenario, &mut report).unwrap();

        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                scenario: "Wrong".to_string(),
                tool: schema::GET_ANGLE.to_string(),
                expected: Expectation::Returns(10),
                actual: ReturnValue::Integer(90),
            }]
        );
        assert_eq!(report.soft_failures, 0);
    }

    #[test]
    fn test_interrupt_stops_before_first_call() {
        let mut controller = MockController::new();
        let scenario = ScenarioBuilder::new("Never")
            .call(schema::SET_ANGLE, json!({ "angle": 10 }))
            .build()
            .unwrap();

        let flag = InterruptFlag::new();
        flag.raise();
        let mut driver = TestDriver::new(&mut controller, instant_pacer(flag), Vec::new());
        let mut report = RunReport::default();

        assert_eq!(driver.run_scenario(&scenario, &mut report), Err(Error::Interrupted));
        drop(driver);
        assert_eq!(report.calls, 0);
        assert_eq!(controller.angle().value(), 90);
    }
}
