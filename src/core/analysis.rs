//! Derived views over entry lists: grade distribution, per-level breakdown and
//! CGPA prediction. All functions take already-filtered valid entries.

use crate::core::catalog;
use crate::core::cgpa::{CgpaSummary, Graded};
use crate::core::grading::Grade;
use crate::core::models::{Domain, Level, SubjectEntry};
use serde::Serialize;

/// Number of entries carrying one grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeCount {
    /// Grade
    pub grade: Grade,
    /// Entries with this grade
    pub count: usize,
    /// Share of all counted entries, 0 to 100
    pub percent: f64,
}

/// How entries spread over the grade scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeDistribution {
    /// One row per grade, S first
    pub rows: Vec<GradeCount>,
    /// Number of entries counted
    pub total: usize,
}

impl GradeDistribution {
    /// Count grades over `entries`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of<E: Graded>(entries: &[E]) -> Self {
        let total = entries.len();
        let rows = Grade::ALL
            .into_iter()
            .map(|grade| {
                let count = entries.iter().filter(|e| e.grade() == grade).count();
                let percent = if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                };
                GradeCount {
                    grade,
                    count,
                    percent,
                }
            })
            .collect();
        Self { rows, total }
    }

    /// Whether nothing was counted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Largest single count, at least 1 so it can scale bars
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.rows.iter().map(|r| r.count).max().unwrap_or(0).max(1)
    }

    /// Count for one grade
    #[must_use]
    pub fn count(&self, grade: Grade) -> usize {
        self.rows
            .iter()
            .find(|r| r.grade == grade)
            .map_or(0, |r| r.count)
    }

    /// Grades that occur at least once, S first
    #[must_use]
    pub fn present_grades(&self) -> Vec<Grade> {
        self.rows
            .iter()
            .filter(|r| r.count > 0)
            .map(|r| r.grade)
            .collect()
    }
}

/// CGPA figures for one curriculum level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelStats {
    /// Curriculum level
    pub level: Level,
    /// CGPA, credits and count of the entries at this level
    pub summary: CgpaSummary,
    /// Catalog subjects available at this level
    pub total_available: usize,
}

/// Per-level CGPA of a domain's entries
///
/// Only catalog entries are attributed to a level; custom subjects have none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelBreakdown {
    /// Domain whose catalog decides the levels
    pub domain: Domain,
    /// One row per level, in curriculum order
    pub levels: Vec<LevelStats>,
}

impl LevelBreakdown {
    /// Group `entries` by the catalog level of their subject
    #[must_use]
    pub fn of(domain: Domain, entries: &[&SubjectEntry]) -> Self {
        let levels = Level::ALL
            .into_iter()
            .map(|level| {
                let at_level: Vec<&SubjectEntry> = entries
                    .iter()
                    .copied()
                    .filter(|e| {
                        e.subject
                            .catalog_id()
                            .and_then(|id| catalog::level_of(domain, id))
                            == Some(level)
                    })
                    .collect();
                LevelStats {
                    level,
                    summary: CgpaSummary::of(&at_level),
                    total_available: catalog::subjects_at_level(domain, level).count(),
                }
            })
            .collect();
        Self { domain, levels }
    }

    /// Whether any level has an entry
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.levels.iter().any(|l| l.summary.has_data())
    }
}

/// Current CGPA compared with the CGPA after adding more entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Completed entries only
    pub current: CgpaSummary,
    /// Completed entries plus the additional ones
    pub combined: CgpaSummary,
    /// `combined − current`, zero unless both sides have data
    pub difference: f64,
    /// Whether the additional list contributed anything
    pub has_additional: bool,
}

impl Prediction {
    /// Compare completed entries with completed plus `additional`
    #[must_use]
    pub fn of(completed: &[&SubjectEntry], additional: &[&SubjectEntry]) -> Self {
        let current = CgpaSummary::of(completed);
        let combined = CgpaSummary::combined(&[completed, additional]);
        let has_additional = !additional.is_empty();
        let difference = if current.has_data() && has_additional {
            combined.cgpa - current.cgpa
        } else {
            0.0
        };
        Self {
            current,
            combined,
            difference,
            has_additional,
        }
    }

    /// Difference with an explicit sign, two decimals
    #[must_use]
    pub fn display_difference(&self) -> String {
        format!("{:+.2}", self.difference)
    }
}
