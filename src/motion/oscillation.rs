//! Oscillation request and sweep planning.

use core::fmt;
use core::ops::RangeInclusive;

use crate::config::units::{Angle, Milliseconds};

/// Cycle counts the firmware advertises for `servo.oscillate`.
pub const CYCLES_RANGE: RangeInclusive<i64> = 1..=10;

/// Periods (ms) the firmware advertises for `servo.oscillate`.
pub const PERIOD_RANGE: RangeInclusive<i64> = 500..=5000;

/// An oscillation request, holding the arguments exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillation {
    /// First endpoint of the sweep, in degrees.
    pub start_angle: i64,
    /// Second endpoint of the sweep, in degrees.
    pub end_angle: i64,
    /// Number of full start -> end -> start cycles.
    pub cycles: i64,
    /// Duration of one full cycle in milliseconds.
    pub period_ms: i64,
}

impl Default for Oscillation {
    fn default() -> Self {
        Self {
            start_angle: 0,
            end_angle: 90,
            cycles: 3,
            period_ms: 1000,
        }
    }
}

/// Reason the firmware would refuse an oscillation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanIssue {
    /// Both endpoints clamp to the same angle.
    SameEndpoints(Angle),
    /// Cycle count outside the advertised range.
    CyclesOutOfRange(i64),
    /// Period outside the advertised range.
    PeriodOutOfRange(i64),
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::SameEndpoints(angle) => {
                write!(f, "start and end both clamp to {}", angle)
            }
            PlanIssue::CyclesOutOfRange(v) => write!(
                f,
                "cycles {} outside {}-{}",
                v,
                CYCLES_RANGE.start(),
                CYCLES_RANGE.end()
            ),
            PlanIssue::PeriodOutOfRange(v) => write!(
                f,
                "period {}ms outside {}-{}ms",
                v,
                PERIOD_RANGE.start(),
                PERIOD_RANGE.end()
            ),
        }
    }
}

impl Oscillation {
    /// Clamp the request into a sweep that could actually be executed.
    pub fn plan(&self) -> OscillationPlan {
        OscillationPlan {
            start: Angle::clamped(self.start_angle),
            end: Angle::clamped(self.end_angle),
            cycles: self.cycles.clamp(0, u32::MAX as i64) as u32,
            half_period: Milliseconds((self.period_ms.clamp(0, u32::MAX as i64) as u32) / 2),
        }
    }

    /// Everything the firmware would reject about this request.
    pub fn issues(&self) -> Vec<PlanIssue> {
        let mut issues = Vec::new();
        let plan = self.plan();

        if plan.start == plan.end {
            issues.push(PlanIssue::SameEndpoints(plan.start));
        }
        if !CYCLES_RANGE.contains(&self.cycles) {
            issues.push(PlanIssue::CyclesOutOfRange(self.cycles));
        }
        if !PERIOD_RANGE.contains(&self.period_ms) {
            issues.push(PlanIssue::PeriodOutOfRange(self.period_ms));
        }

        issues
    }
}

/// A clamped, executable oscillation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OscillationPlan {
    /// First endpoint.
    pub start: Angle,
    /// Second endpoint.
    pub end: Angle,
    /// Number of full cycles.
    pub cycles: u32,
    /// Hold time at each endpoint.
    pub half_period: Milliseconds,
}

impl OscillationPlan {
    /// Number of endpoint moves (two per cycle).
    #[inline]
    pub fn half_swings(&self) -> u32 {
        self.cycles.saturating_mul(2)
    }

    /// Time the whole sweep takes.
    #[inline]
    pub fn total_duration(&self) -> Milliseconds {
        Milliseconds(self.half_period.0.saturating_mul(self.half_swings()))
    }
}
