//! Catalog subject model

use super::Level;
use serde::Serialize;

/// A subject offered in a domain's catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    /// Catalog identifier (e.g., "ds-f-1")
    pub id: &'static str,

    /// Subject name (e.g., "Statistics for Data Science I")
    pub name: &'static str,

    /// Credit value
    pub credits: u32,

    /// Curriculum level the subject belongs to
    pub level: Level,

    /// Subject area (e.g., "Mathematics", "Elective")
    pub category: &'static str,
}

impl Subject {
    /// Create a catalog subject
    #[must_use]
    pub const fn new(
        id: &'static str,
        name: &'static str,
        credits: u32,
        level: Level,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            credits,
            level,
            category,
        }
    }
}
