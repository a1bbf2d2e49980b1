//! Catalog command handler

use super::load_store;
use cgpa_planner::catalog;
use cgpa_planner::config::Config;
use cgpa_planner::models::Level;

/// List catalog subjects of the active domain, grouped by level
pub fn run(level: Option<Level>, available_only: bool, config: &Config) {
    let store = load_store(config);
    let domain = store.domain();
    let used = store.used_subject_ids();

    println!("\n=== {} ===", domain.program_name());
    let levels: Vec<Level> = level.map_or_else(|| Level::ALL.to_vec(), |l| vec![l]);

    for level in levels {
        println!("\n{level}");
        for subject in catalog::subjects_at_level(domain, level) {
            let in_use = used.contains(subject.id);
            if available_only && in_use {
                continue;
            }
            let marker = if in_use { "✓" } else { " " };
            println!(
                "  {marker} {:<10} {:<60} {:>2} cr  {}",
                subject.id, subject.name, subject.credits, subject.category
            );
        }
    }
}
