//! Motion module for servo-mcp.
//!
//! Provides oscillation planning: the back-and-forth sweep a servo performs
//! for an `oscillate` request.

mod oscillation;

pub use oscillation::{Oscillation, OscillationPlan, PlanIssue};
