//! Unit types for servo quantities.
//!
//! Provides type-safe representations of servo angles, pulse widths, and
//! pause durations to prevent unit confusion at compile time.

use core::fmt;
use core::ops::Add;

use serde::Deserialize;

/// Servo position in whole degrees, always within `0..=180`.
///
/// Every constructor clamps, so a stored `Angle` is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(i32);

impl Angle {
    /// Lowest reachable position.
    pub const MIN: Self = Self(0);
    /// Neutral position the servo starts from.
    pub const CENTER: Self = Self(90);
    /// Highest reachable position.
    pub const MAX: Self = Self(180);

    /// Create an angle, clamping into `0..=180`.
    #[inline]
    pub fn clamped(degrees: i64) -> Self {
        Self(degrees.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as i32)
    }

    /// Create an angle only if it is already in range.
    #[inline]
    pub fn new(degrees: i32) -> Option<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&degrees) {
            Some(Self(degrees))
        } else {
            None
        }
    }

    /// Get the raw value in degrees.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Apply a trim offset, clamping the result back into range.
    #[inline]
    pub fn trimmed(self, trim: i32) -> Self {
        Self::clamped(self.0 as i64 + trim as i64)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        Angle::new(value).ok_or_else(|| {
            serde::de::Error::custom(format!("angle {} outside 0-180", value))
        })
    }
}

/// Servo pulse width in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Duration in milliseconds (pauses, oscillation periods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Milliseconds(pub u32);

impl Milliseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Scale by a percentage (100 = unchanged).
    #[inline]
    pub fn scaled(self, percent: u16) -> Self {
        Self(((self.0 as u64 * percent as u64) / 100).min(u32::MAX as u64) as u32)
    }
}

impl Add for Milliseconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Milliseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
