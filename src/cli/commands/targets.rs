//! Targets command handler

use super::{fail, load_store};
use cgpa_planner::config::{parse_targets, Config};
use cgpa_planner::store::Category;
use cgpa_planner::targets::TargetPlan;
use cgpa_planner::{debug, info};

/// Print the minimum uniform grade needed in future subjects for each target
pub fn run(cli_targets: &[f64], config: &Config) {
    let targets = if cli_targets.is_empty() {
        config.targets()
    } else {
        let joined = cli_targets
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        parse_targets(&joined).unwrap_or_else(|e| fail(&e))
    };
    debug!("Solving for targets {targets:?}");

    let store = load_store(config);
    let Some(plan) = TargetPlan::from_entries(
        store.collection(Category::Completed).entries(),
        store.collection(Category::Future).entries(),
        &targets,
    ) else {
        println!("Add future subjects to see which targets are reachable.");
        println!("  cgpa add future --subject <ID>");
        return;
    };

    info!(
        "Target plan: {} completed credits, {} future credits",
        plan.current_credits, plan.future_credits
    );
    println!(
        "\nCompleted: {} credits, {:.0} grade points. Future: {} credits.\n",
        plan.current_credits, plan.current_points, plan.future_credits
    );
    println!("  {:>6}  {:>9}  {:<16} Status", "Target", "Needed GP", "Minimum grade");
    for outcome in &plan.outcomes {
        let status = if outcome.achievable { "✓ achievable" } else { "✗ not achievable" };
        println!(
            "  {:>6.1}  {:>9.2}  {:<16} {status}",
            outcome.target,
            outcome.needed_points,
            outcome.minimum.to_string()
        );
    }

    match plan.best_achievable() {
        Some(best) => println!("\nHighest reachable target: {:.1}", best.target),
        None => println!("\nNone of the targets is reachable with the planned subjects."),
    }
}
