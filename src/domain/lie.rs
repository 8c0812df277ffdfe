use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Surface the ball rests on before a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LieCategory {
    Tee,
    Fairway,
    Rough,
    Sand,
    Recovery,
    Green,
}

/// Unit a distance is entered and shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Yards,
    Feet,
}

impl LieCategory {
    pub const ALL: [LieCategory; 6] = [
        LieCategory::Tee,
        LieCategory::Fairway,
        LieCategory::Rough,
        LieCategory::Sand,
        LieCategory::Recovery,
        LieCategory::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LieCategory::Tee => "Tee",
            LieCategory::Fairway => "Fairway",
            LieCategory::Rough => "Rough",
            LieCategory::Sand => "Sand",
            LieCategory::Recovery => "Recovery",
            LieCategory::Green => "Green",
        }
    }

    /// Putting distances are entered in feet, everything else in yards.
    pub fn display_unit(&self) -> DistanceUnit {
        match self {
            LieCategory::Green => DistanceUnit::Feet,
            _ => DistanceUnit::Yards,
        }
    }

    pub fn is_green(&self) -> bool {
        matches!(self, LieCategory::Green)
    }
}

impl fmt::Display for LieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LieCategory {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        LieCategory::ALL
            .into_iter()
            .find(|lie| lie.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::Validation(format!("unknown lie `{}`", needle)))
    }
}

impl DistanceUnit {
    /// Number of display units in one canonical unit (yard).
    pub fn per_canonical(&self) -> f64 {
        match self {
            DistanceUnit::Yards => 1.0,
            DistanceUnit::Feet => 3.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Yards => "yards",
            DistanceUnit::Feet => "feet",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Yards => "yds",
            DistanceUnit::Feet => "ft",
        }
    }
}
