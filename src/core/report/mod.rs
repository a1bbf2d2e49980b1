//! Report generation for a domain's grade record
//!
//! Reports summarize the active domain of an [`EntryStore`]: current CGPA,
//! predictions with ongoing and future subjects, the grade distribution,
//! the per-level breakdown and the target solver table.

pub mod formats;

use crate::core::analysis::{GradeDistribution, LevelBreakdown, Prediction};
use crate::core::cgpa::CgpaSummary;
use crate::core::models::{Domain, SubjectEntry};
use crate::core::store::{Category, EntryStore};
use crate::core::targets::TargetPlan;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report shows so every format renders the same numbers.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Domain being reported
    pub domain: Domain,
    /// Valid entries per category, in category order
    pub entries: Vec<(Category, Vec<&'a SubjectEntry>)>,
    /// CGPA over completed subjects
    pub current: CgpaSummary,
    /// Completed vs completed + ongoing
    pub with_ongoing: Prediction,
    /// Completed vs completed + future
    pub with_future: Prediction,
    /// Grades of completed subjects
    pub distribution: GradeDistribution,
    /// Completed subjects per curriculum level
    pub breakdown: LevelBreakdown,
    /// Target solver results, if any future subject is planned
    pub targets: Option<TargetPlan>,
}

impl<'a> ReportContext<'a> {
    /// Build a context from the active domain of a store
    #[must_use]
    pub fn from_store(store: &'a EntryStore, targets: &[f64]) -> Self {
        let domain = store.domain();
        let entries: Vec<(Category, Vec<&SubjectEntry>)> = Category::ALL
            .into_iter()
            .map(|category| (category, store.collection(category).valid_entries()))
            .collect();

        let completed = store.collection(Category::Completed).valid_entries();
        let ongoing = store.collection(Category::Ongoing).valid_entries();
        let future = store.collection(Category::Future).valid_entries();

        Self {
            domain,
            current: CgpaSummary::of(&completed),
            with_ongoing: Prediction::of(&completed, &ongoing),
            with_future: Prediction::of(&completed, &future),
            distribution: GradeDistribution::of(&completed),
            breakdown: LevelBreakdown::of(domain, &completed),
            targets: TargetPlan::from_entries(
                store.collection(Category::Completed).entries(),
                store.collection(Category::Future).entries(),
                targets,
            ),
            entries,
        }
    }

    /// Full program name of the domain
    #[must_use]
    pub const fn program_name(&self) -> &'static str {
        self.domain.program_name()
    }

    /// Valid entries of one category
    #[must_use]
    pub fn entries_in(&self, category: Category) -> &[&'a SubjectEntry] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(&[][..], |(_, entries)| entries.as_slice())
    }

    /// Number of valid entries over all categories
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|(_, entries)| entries.len()).sum()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
