//! HTML report generator
//!
//! Renders a self-contained HTML page with embedded CSS through an askama
//! template (`templates/report.html`). Values are escaped by the template engine.

use crate::core::cgpa::CgpaSummary;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::store::Category;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

struct SummaryRow {
    label: &'static str,
    cgpa: String,
    credits: u32,
    subjects: usize,
}

impl SummaryRow {
    fn new(label: &'static str, summary: &CgpaSummary) -> Self {
        Self {
            label,
            cgpa: summary.display_cgpa(),
            credits: summary.credits,
            subjects: summary.subjects,
        }
    }
}

struct SubjectRow {
    name: String,
    credits: u32,
    grade: String,
    points: u32,
}

struct CategorySection {
    title: &'static str,
    rows: Vec<SubjectRow>,
}

struct DistributionRow {
    grade: String,
    count: usize,
    percent: String,
    bar_width: String,
}

struct LevelRow {
    level: &'static str,
    cgpa: String,
    progress: String,
    credits: u32,
}

struct TargetRow {
    target: String,
    needed: String,
    minimum: String,
    achievable: bool,
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport {
    program: &'static str,
    domain: &'static str,
    standing: &'static str,
    version: &'static str,
    summary: Vec<SummaryRow>,
    categories: Vec<CategorySection>,
    distribution: Vec<DistributionRow>,
    levels: Vec<LevelRow>,
    current_credits: u32,
    future_credits: u32,
    targets: Vec<TargetRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Flatten the context into template rows
    #[allow(clippy::cast_precision_loss)]
    fn build(ctx: &ReportContext) -> HtmlReport {
        let summary = vec![
            SummaryRow::new("Current (completed)", &ctx.current),
            SummaryRow::new("With ongoing", &ctx.with_ongoing.combined),
            SummaryRow::new("With future", &ctx.with_future.combined),
        ];

        let categories = Category::ALL
            .into_iter()
            .map(|category| CategorySection {
                title: category.title(),
                rows: ctx
                    .entries_in(category)
                    .iter()
                    .map(|entry| SubjectRow {
                        name: entry.display_name().to_string(),
                        credits: entry.credits,
                        grade: entry.grade.to_string(),
                        points: entry.grade.points(),
                    })
                    .collect(),
            })
            .collect();

        let distribution = if ctx.distribution.is_empty() {
            Vec::new()
        } else {
            let max = ctx.distribution.max_count() as f64;
            ctx.distribution
                .rows
                .iter()
                .map(|row| DistributionRow {
                    grade: row.grade.label(),
                    count: row.count,
                    percent: format!("{:.0}", row.percent),
                    bar_width: format!("{:.0}", row.count as f64 * 100.0 / max),
                })
                .collect()
        };

        let levels = if ctx.breakdown.has_any() {
            ctx.breakdown
                .levels
                .iter()
                .map(|level| LevelRow {
                    level: level.level.name(),
                    cgpa: level.summary.display_cgpa(),
                    progress: format!("{}/{}", level.summary.subjects, level.total_available),
                    credits: level.summary.credits,
                })
                .collect()
        } else {
            Vec::new()
        };

        let (current_credits, future_credits, targets) =
            ctx.targets.as_ref().map_or((0, 0, Vec::new()), |plan| {
                let rows = plan
                    .outcomes
                    .iter()
                    .map(|outcome| TargetRow {
                        target: format!("{:.1}", outcome.target),
                        needed: format!("{:.2}", outcome.needed_points),
                        minimum: outcome.minimum.to_string(),
                        achievable: outcome.achievable,
                    })
                    .collect();
                (plan.current_credits, plan.future_credits, rows)
            });

        HtmlReport {
            program: ctx.program_name(),
            domain: ctx.domain.tag(),
            standing: ctx.current.standing().label(),
            version: crate::core::get_version(),
            summary,
            categories,
            distribution,
            levels,
            current_credits,
            future_credits,
            targets,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build(ctx).render()?)
    }
}
