//! Scripted scenarios and the driver that plays them.

mod builder;
mod interrupt;
mod pacing;
mod registry;
mod runner;

pub use builder::{Expectation, Scenario, ScenarioBuilder, Step, ToolCall};
pub use interrupt::{install_ctrl_c_handler, InterruptFlag};
pub use pacing::{Pacer, StdDelay, SLICE_MS};
pub use registry::{ScenarioSuite, MAX_SCENARIOS};
pub use runner::{Mismatch, RunReport, TestDriver};
