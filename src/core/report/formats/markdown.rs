//! Markdown report generator
//!
//! Renders plain Markdown tables that read well in GitHub, GitLab and VS Code.

use crate::core::cgpa::CgpaSummary;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::store::Category;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let values = [
            ("program", ctx.program_name().to_string()),
            ("domain", ctx.domain.tag().to_string()),
            ("entry_count", ctx.entry_count().to_string()),
            ("standing", ctx.current.standing().label().to_string()),
            ("version", crate::core::get_version().to_string()),
            ("summary_rows", Self::generate_summary_rows(ctx)),
            ("subject_tables", Self::generate_subject_tables(ctx)),
            ("distribution_table", Self::generate_distribution_table(ctx)),
            ("level_table", Self::generate_level_table(ctx)),
            ("targets_section", Self::generate_targets_section(ctx)),
        ];
        fill(MARKDOWN_TEMPLATE, &values)
    }

    fn summary_row(table: &mut String, label: &str, summary: &CgpaSummary) {
        let _ = writeln!(
            table,
            "| {label} | {} | {} | {} |",
            summary.display_cgpa(),
            summary.credits,
            summary.subjects
        );
    }

    /// Current, predicted and planned CGPA rows
    fn generate_summary_rows(ctx: &ReportContext) -> String {
        let mut table = String::new();
        Self::summary_row(&mut table, "Current (completed)", &ctx.current);
        Self::summary_row(&mut table, "With ongoing", &ctx.with_ongoing.combined);
        Self::summary_row(&mut table, "With future", &ctx.with_future.combined);
        table.trim_end().to_string()
    }

    /// One table per category with at least one valid entry
    fn generate_subject_tables(ctx: &ReportContext) -> String {
        let mut out = String::new();

        for category in Category::ALL {
            let entries = ctx.entries_in(category);
            let _ = writeln!(out, "### {}\n", category.title());
            if entries.is_empty() {
                out.push_str("_No subjects recorded._\n\n");
                continue;
            }

            out.push_str("| Subject | Credits | Grade | Points |\n");
            out.push_str("|---|---|---|---|\n");
            for entry in entries {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} |",
                    escape_cell(entry.display_name()),
                    entry.credits,
                    entry.grade,
                    entry.grade.points()
                );
            }
            out.push('\n');
        }

        out.trim_end().to_string()
    }

    /// Grade counts over completed subjects
    fn generate_distribution_table(ctx: &ReportContext) -> String {
        if ctx.distribution.is_empty() {
            return "_No completed subjects yet._".to_string();
        }

        let mut table = String::new();
        table.push_str("| Grade | Count | Share |\n");
        table.push_str("|---|---|---|\n");
        for row in &ctx.distribution.rows {
            let _ = writeln!(
                table,
                "| {} | {} | {:.0}% |",
                row.grade.label(),
                row.count,
                row.percent
            );
        }
        table.trim_end().to_string()
    }

    /// CGPA per curriculum level
    fn generate_level_table(ctx: &ReportContext) -> String {
        if !ctx.breakdown.has_any() {
            return "_No catalog subjects completed yet._".to_string();
        }

        let mut table = String::new();
        table.push_str("| Level | CGPA | Subjects | Credits |\n");
        table.push_str("|---|---|---|---|\n");
        for level in &ctx.breakdown.levels {
            let _ = writeln!(
                table,
                "| {} | {} | {}/{} | {} |",
                level.level,
                level.summary.display_cgpa(),
                level.summary.subjects,
                level.total_available,
                level.summary.credits
            );
        }
        table.trim_end().to_string()
    }

    /// Solver table, or a note when no future subject is planned
    fn generate_targets_section(ctx: &ReportContext) -> String {
        let Some(plan) = &ctx.targets else {
            return "_Add future subjects to see which targets are reachable._".to_string();
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Completed credits: {}, future credits: {}\n",
            plan.current_credits, plan.future_credits
        );
        out.push_str("| Target | Needed GP | Minimum grade | Status |\n");
        out.push_str("|---|---|---|---|\n");
        for outcome in &plan.outcomes {
            let _ = writeln!(
                out,
                "| {:.1} | {:.2} | {} | {} |",
                outcome.target,
                outcome.needed_points,
                outcome.minimum,
                if outcome.achievable { "✓" } else { "✗" }
            );
        }
        out.trim_end().to_string()
    }
}

/// Substitute `{{key}}` placeholders of the template in one pass
///
/// Inserted values are never scanned again, so user text that looks like a
/// placeholder stays literal. Unknown keys are left as written.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push_str("{{");
                output.push_str(key);
                output.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

/// Keep free text inside a single table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
