//! Grade scale
//!
//! Static mapping from letter grade to grade point. The scale is closed: every
//! [`Grade`] has a defined point value, so lookups cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest grade point on the scale
pub const MAX_GRADE_POINT: f64 = 10.0;

/// Letter grade awarded for a subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 10 points
    #[default]
    S,
    /// 9 points
    A,
    /// 8 points
    B,
    /// 7 points
    C,
    /// 6 points
    D,
    /// 5 points
    E,
    /// 0 points (fail)
    U,
}

impl Grade {
    /// All grades from highest to lowest
    pub const ALL: [Self; 7] = [
        Self::S,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::U,
    ];

    /// All grades from lowest to highest point value
    pub const ASCENDING: [Self; 7] = [
        Self::U,
        Self::E,
        Self::D,
        Self::C,
        Self::B,
        Self::A,
        Self::S,
    ];

    /// Grade point for this grade
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::U => 0,
        }
    }

    /// Letter for this grade
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::U => "U",
        }
    }

    /// Human readable label including the point value (e.g. `"B (8)"`)
    #[must_use]
    pub fn label(self) -> String {
        if self == Self::U {
            "U (0 - Fail)".to_string()
        } else {
            format!("{} ({})", self.letter(), self.points())
        }
    }

    /// Whether this grade is a fail
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::U)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "U" => Ok(Self::U),
            _ => Err(format!("Unknown grade: '{s}' (expected one of S, A, B, C, D, E, U)")),
        }
    }
}
