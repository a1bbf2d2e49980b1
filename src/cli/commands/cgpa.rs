//! CGPA command handler

use super::load_store;
use cgpa_planner::analysis::{GradeDistribution, LevelBreakdown, Prediction};
use cgpa_planner::config::Config;
use cgpa_planner::store::Category;

/// Print current CGPA, predictions and the completed-grade breakdown
pub fn run(config: &Config) {
    let store = load_store(config);
    let domain = store.domain();
    let completed = store.collection(Category::Completed).valid_entries();
    let ongoing = store.collection(Category::Ongoing).valid_entries();
    let future = store.collection(Category::Future).valid_entries();

    let with_ongoing = Prediction::of(&completed, &ongoing);
    let with_future = Prediction::of(&completed, &future);
    let current = with_ongoing.current;

    println!("\n=== {} ===\n", domain.program_name());
    println!(
        "Current CGPA:   {:>5}  {} ({} credits, {} subjects)",
        current.display_cgpa(),
        current.standing(),
        current.credits,
        current.subjects
    );
    print_prediction("With ongoing:", &with_ongoing);
    print_prediction("With future:", &with_future);

    let distribution = GradeDistribution::of(&completed);
    if !distribution.is_empty() {
        println!("\nGrade distribution");
        let max = distribution.max_count();
        for row in &distribution.rows {
            let bar = "█".repeat(row.count * 20 / max);
            println!(
                "  {:<14} {:>3}  {:>3.0}%  {bar}",
                row.grade.label(),
                row.count,
                row.percent
            );
        }
    }

    let breakdown = LevelBreakdown::of(domain, &completed);
    if breakdown.has_any() {
        println!("\nBy level");
        for level in &breakdown.levels {
            println!(
                "  {:<11} {:>5}  {}/{} subjects, {} credits",
                level.level.name(),
                level.summary.display_cgpa(),
                level.summary.subjects,
                level.total_available,
                level.summary.credits
            );
        }
    }
}

fn print_prediction(label: &str, prediction: &Prediction) {
    if !prediction.has_additional {
        println!("{label:<15} {:>5}", "—");
        return;
    }
    let combined = prediction.combined;
    if prediction.current.has_data() {
        println!(
            "{label:<15} {:>5}  ({})",
            combined.display_cgpa(),
            prediction.display_difference()
        );
    } else {
        println!("{label:<15} {:>5}", combined.display_cgpa());
    }
}
