//! Named scenario suite, including the built-in demo run.

use heapless::{FnvIndexMap, String};
use serde_json::json;

use crate::error::{Error, Result, ScenarioError};
use crate::tool::schema::{GET_ANGLE, OSCILLATE, SET_ANGLE, SET_PRESET, STOP};

use super::builder::{Expectation, Scenario, ScenarioBuilder};

/// Maximum number of scenarios in a suite.
pub const MAX_SCENARIOS: usize = 16;

/// Ordered collection of named scenarios. Runs in registration order.
#[derive(Debug, Default)]
pub struct ScenarioSuite {
    scenarios: FnvIndexMap<String<32>, Scenario, MAX_SCENARIOS>,
}

impl ScenarioSuite {
    /// Create a new empty suite.
    pub fn new() -> Self {
        Self {
            scenarios: FnvIndexMap::new(),
        }
    }

    /// The five scenarios of the standard servo demo.
    pub fn builtin() -> Result<Self> {
        let mut suite = Self::new();
        suite.register("basic", basic_control()?)?;
        suite.register("presets", preset_control()?)?;
        suite.register("oscillation", oscillation()?)?;
        suite.register("angle", angle_retrieval()?)?;
        suite.register("mechanical", mechanical()?)?;
        Ok(suite)
    }

    /// Register a scenario under a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or already taken, or the
    /// suite is full.
    pub fn register(&mut self, name: &str, scenario: Scenario) -> Result<()> {
        let key = String::try_from(name).map_err(|_| invalid_name("name too long", name))?;

        if self.scenarios.contains_key(&key) {
            return Err(invalid_name("duplicate", name));
        }

        self.scenarios
            .insert(key, scenario)
            .map_err(|_| invalid_name("suite full", name))?;

        log::debug!("registered scenario '{}'", name);
        Ok(())
    }

    /// Get a scenario by name.
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        let key = String::try_from(name).ok()?;
        self.scenarios.get(&key)
    }

    /// Number of registered scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check if the suite is empty.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenarios in run order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scenario)> {
        self.scenarios.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn invalid_name(reason: &str, name: &str) -> Error {
    let mut text: String<64> = String::new();
    for c in reason.chars().chain(": ".chars()).chain(name.chars()) {
        if text.push(c).is_err() {
            break;
        }
    }
    Error::Scenario(ScenarioError::InvalidName(text))
}

fn basic_control() -> Result<Scenario> {
    [0, 90, 180, -10, 200]
        .into_iter()
        .fold(ScenarioBuilder::new("Basic angle control"), |b, angle| {
            b.call(SET_ANGLE, json!({ "angle": angle })).pause(1000)
        })
        .build()
}

fn preset_control() -> Result<Scenario> {
    ["0", "90", "180"]
        .into_iter()
        .fold(ScenarioBuilder::new("Preset control"), |b, preset| {
            b.call(SET_PRESET, json!({ "preset": preset })).pause(1000)
        })
        .narrate("Trying an invalid preset")
        .call(SET_PRESET, json!({ "preset": "45" }))
        .expect(Expectation::Fails)
        .build()
}

fn oscillation() -> Result<Scenario> {
    ScenarioBuilder::new("Oscillation")
        .call(
            OSCILLATE,
            json!({ "start_angle": 0, "end_angle": 90, "cycles": 3, "period_ms": 1000 }),
        )
        .pause(3000)
        .call(
            OSCILLATE,
            json!({ "start_angle": 90, "end_angle": 180, "cycles": 2, "period_ms": 800 }),
        )
        .pause(2000)
        .call(STOP, json!({}))
        .build()
}

fn angle_retrieval() -> Result<Scenario> {
    ScenarioBuilder::new("Angle retrieval")
        .call(SET_ANGLE, json!({ "angle": 45 }))
        .call(GET_ANGLE, json!({}))
        .expect(Expectation::Returns(45))
        .call(SET_ANGLE, json!({ "angle": 135 }))
        .call(GET_ANGLE, json!({}))
        .expect(Expectation::Returns(135))
        .build()
}

fn mechanical() -> Result<Scenario> {
    ScenarioBuilder::new("Mechanical scenarios")
        .narrate("Scenario 1: arm raise")
        .call(SET_ANGLE, json!({ "angle": 180 }))
        .pause(2000)
        .narrate("Scenario 2: arm lower")
        .call(SET_ANGLE, json!({ "angle": 0 }))
        .pause(2000)
        .narrate("Scenario 3: arm swing")
        .call(
            OSCILLATE,
            json!({ "start_angle": 0, "end_angle": 90, "cycles": 5, "period_ms": 1200 }),
        )
        .pause(5000)
        .narrate("Scenario 4: return to center")
        .call(SET_PRESET, json!({ "preset": "90" }))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Milliseconds;

    #[test]
    fn test_builtin_order() {
        let suite = ScenarioSuite::builtin().unwrap();
        let names: Vec<_> = suite.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["basic", "presets", "oscillation", "angle", "mechanical"]);
    }

    #[test]
    fn test_builtin_call_counts() {
        let suite = ScenarioSuite::builtin().unwrap();
        let counts: Vec<_> = suite.iter().map(|(_, s)| s.calls().count()).collect();
        assert_eq!(counts, vec![5, 4, 3, 4, 4]);

        let failures = suite
            .iter()
            .flat_map(|(_, s)| s.calls())
            .filter(|c| c.expect == Expectation::Fails)
            .count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_builtin_pauses() {
        let suite = ScenarioSuite::builtin().unwrap();
        let total = suite
            .iter()
            .map(|(_, s)| s.scripted_pause())
            .fold(Milliseconds(0), |acc, ms| acc + ms);
        assert_eq!(total, Milliseconds(22000));
        assert_eq!(suite.get("angle").map(|s| s.scripted_pause()), Some(Milliseconds(0)));
    }

    #[test]
    fn test_register_duplicate() {
        let mut suite = ScenarioSuite::new();
        let scenario = ScenarioBuilder::new("t")
            .call(STOP, json!({}))
            .build()
            .unwrap();

        suite.register("stop", scenario.clone()).unwrap();
        assert!(matches!(
            suite.register("stop", scenario),
            Err(Error::Scenario(ScenarioError::InvalidName(_)))
        ));
        assert_eq!(suite.len(), 1);
        assert!(suite.get("stop").is_some());
        assert!(suite.get("missing").is_none());
        assert!(ScenarioSuite::new().is_empty());
    }
}
