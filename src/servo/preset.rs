//! Named preset positions.

use core::fmt;
use core::str::FromStr;

use crate::config::units::Angle;
use crate::error::ToolError;

/// One of the three preset positions a servo can be sent to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// "0": fully one way.
    Min,
    /// "90": centred.
    Center,
    /// "180": fully the other way.
    Max,
}

impl Preset {
    /// Every preset, in ascending angle order.
    pub const ALL: [Preset; 3] = [Preset::Min, Preset::Center, Preset::Max];

    /// Angle this preset stands for.
    #[inline]
    pub const fn angle(self) -> Angle {
        match self {
            Preset::Min => Angle::MIN,
            Preset::Center => Angle::CENTER,
            Preset::Max => Angle::MAX,
        }
    }

    /// Wire spelling of this preset.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Preset::Min => "0",
            Preset::Center => "90",
            Preset::Max => "180",
        }
    }
}

impl FromStr for Preset {
    type Err = ToolError;

    /// Only the exact spellings `"0"`, `"90"` and `"180"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ToolError::InvalidPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
