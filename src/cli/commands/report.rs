//! Report command handler
//!
//! Generates a Markdown or HTML report for the active domain.

use super::{fail, load_store};
use cgpa_planner::config::Config;
use cgpa_planner::report::{ReportContext, ReportFormat};
use cgpa_planner::info;
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// Without `output`, the report is written to the configured reports
/// directory as `cgpa-<domain>.<ext>`.
pub fn run(output: Option<&Path>, format: ReportFormat, config: &Config) {
    let store = load_store(config);
    let targets = config.targets();
    let ctx = ReportContext::from_store(&store, &targets);

    let output_path = output.map_or_else(
        || {
            config
                .reports_dir_path()
                .join(format!("cgpa-{}.{}", store.domain(), format.extension()))
        },
        PathBuf::from,
    );

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            fail(&format!(
                "Failed to create reports directory: {}",
                parent.display()
            ));
        }
    }

    match format.generator().generate(&ctx, &output_path) {
        Ok(()) => {
            info!("Generated {format} report at {}", output_path.display());
            println!("✓ Report generated: {}", output_path.display());
        }
        Err(e) => {
            fail(&format!(
                "Failed to generate report {}: {e}",
                output_path.display()
            ));
        }
    }
}
