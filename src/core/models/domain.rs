//! Academic domain and curriculum level models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two degree programs, each with its own catalog and entry data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// BS in Data Science and Applications
    #[default]
    Ds,
    /// BS in Electronic Systems
    Es,
}

impl Domain {
    /// Every domain, in display order
    pub const ALL: [Self; 2] = [Self::Ds, Self::Es];

    /// Short tag used in configuration and state files
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ds => "ds",
            Self::Es => "es",
        }
    }

    /// Full program name
    #[must_use]
    pub const fn program_name(self) -> &'static str {
        match self {
            Self::Ds => "BS in Data Science and Applications",
            Self::Es => "BS in Electronic Systems",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ds" | "data-science" => Ok(Self::Ds),
            "es" | "electronic-systems" => Ok(Self::Es),
            _ => Err(format!("Unknown domain: '{s}' (expected 'ds' or 'es')")),
        }
    }
}

/// Sequential stage within a domain's curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// First stage
    Foundation,
    /// Second stage
    Diploma,
    /// Final stage
    Degree,
}

impl Level {
    /// Every level in curriculum order
    pub const ALL: [Self; 3] = [Self::Foundation, Self::Diploma, Self::Degree];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Diploma => "Diploma",
            Self::Degree => "Degree",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "foundation" => Ok(Self::Foundation),
            "diploma" => Ok(Self::Diploma),
            "degree" => Ok(Self::Degree),
            _ => Err(format!("Unknown level: '{s}'")),
        }
    }
}
