//! Scenario steps and a builder for scripting them.

use core::fmt;

use crate::config::units::Milliseconds;
use crate::error::{Error, Result, ScenarioError};
use crate::tool::{Params, ReturnValue, ToolResponse};

/// What a scripted tool call is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expectation {
    /// Any successful response.
    #[default]
    Succeeds,
    /// A soft failure (`false`).
    Fails,
    /// An integer result with this value.
    Returns(i32),
}

impl Expectation {
    /// Whether a response meets this expectation.
    pub fn matches(&self, response: &ToolResponse) -> bool {
        match self {
            Expectation::Succeeds => response.is_success(),
            Expectation::Fails => !response.is_success(),
            Expectation::Returns(v) => response.value == ReturnValue::Integer(*v),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Succeeds => write!(f, "success"),
            Expectation::Fails => write!(f, "failure"),
            Expectation::Returns(v) => write!(f, "return {}", v),
        }
    }
}

/// One scripted tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    /// Tool name.
    pub tool: String,
    /// Arguments.
    pub params: Params,
    /// Expected outcome.
    pub expect: Expectation,
}

/// One step of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Print a line of narration.
    Narrate(String),
    /// Invoke a tool.
    Call(ToolCall),
    /// Wait, purely so a human can follow along.
    Pause(Milliseconds),
}

/// A titled, ordered list of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Heading printed before the steps run.
    pub title: String,
    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Iterate over the tool calls only.
    pub fn calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.steps.iter().filter_map(|step| match step {
            Step::Call(call) => Some(call),
            _ => None,
        })
    }

    /// Sum of all scripted pauses, before pacing is applied.
    pub fn scripted_pause(&self) -> Milliseconds {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Pause(ms) => Some(*ms),
                _ => None,
            })
            .fold(Milliseconds(0), |acc, ms| acc + ms)
    }
}

/// Builder for scripting scenarios.
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new("Preset control")
///     .call(schema::SET_PRESET, json!({ "preset": "0" }))
///     .pause(1000)
///     .call(schema::SET_PRESET, json!({ "preset": "45" }))
///     .expect(Expectation::Fails)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    title: String,
    steps: Vec<Step>,
    misplaced_expectation: bool,
}

impl ScenarioBuilder {
    /// Create a new builder.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            steps: Vec::new(),
            misplaced_expectation: false,
        }
    }

    /// Add a line of narration.
    pub fn narrate(mut self, text: &str) -> Self {
        self.steps.push(Step::Narrate(text.to_string()));
        self
    }

    /// Add a tool call expected to succeed.
    pub fn call(mut self, tool: &str, params: impl Into<Params>) -> Self {
        self.steps.push(Step::Call(ToolCall {
            tool: tool.to_string(),
            params: params.into(),
            expect: Expectation::Succeeds,
        }));
        self
    }

    /// Set the expectation of the most recent tool call.
    pub fn expect(mut self, expect: Expectation) -> Self {
        match self.steps.iter_mut().rev().find_map(|step| match step {
            Step::Call(call) => Some(call),
            _ => None,
        }) {
            Some(call) => call.expect = expect,
            None => self.misplaced_expectation = true,
        }
        self
    }

    /// Add a pause in milliseconds.
    pub fn pause(mut self, ms: u32) -> Self {
        self.steps.push(Step::Pause(Milliseconds(ms)));
        self
    }

    /// Build the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no steps or an expectation was set
    /// before any call.
    pub fn build(self) -> Result<Scenario> {
        if self.misplaced_expectation {
            return Err(Error::Scenario(ScenarioError::ExpectationWithoutCall));
        }

        if self.steps.is_empty() {
            return Err(Error::Scenario(ScenarioError::Empty));
        }

        Ok(Scenario {
            title: self.title,
            steps: self.steps,
        })
    }
}
