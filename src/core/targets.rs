//! Target solver
//!
//! Inverse-solves the CGPA formula for the uniform grade point that the
//! future credits must average to reach a target:
//!
//! ```text
//! needed = (target × (current_credits + future_credits) − current_points) / future_credits
//! ```
//!
//! The solver is stateless; rerun it whenever the inputs change.

use crate::core::cgpa::{total_credits, total_grade_points};
use crate::core::grading::{Grade, MAX_GRADE_POINT};
use crate::core::models::SubjectEntry;
use serde::Serialize;
use std::fmt;

/// Conventional target checkpoints
pub const DEFAULT_TARGETS: [f64; 6] = [7.0, 7.5, 8.0, 8.5, 9.0, 9.5];

/// Slack applied to boundary comparisons so exact boundaries survive rounding
const TOLERANCE: f64 = 1e-9;

/// Lowest grade that reaches a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MinimumGrade {
    /// The target is reached whatever the future grades are
    Any,
    /// Every future subject needs at least this grade
    Grade(Grade),
    /// Even S in every future subject falls short
    NotAchievable,
}

impl fmt::Display for MinimumGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any grade"),
            Self::Grade(grade) => f.write_str(&grade.label()),
            Self::NotAchievable => f.write_str("Not possible"),
        }
    }
}

/// Solver result for one target checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetOutcome {
    /// Target CGPA
    pub target: f64,
    /// Whether the target can be reached
    pub achievable: bool,
    /// Grade point the future credits must average
    pub needed_points: f64,
    /// Lowest sufficient grade
    pub minimum: MinimumGrade,
}

/// Lowest grade whose point value reaches `needed`, scanning from U upwards
fn lowest_grade_reaching(needed: f64) -> Grade {
    Grade::ASCENDING
        .into_iter()
        .find(|grade| f64::from(grade.points()) + TOLERANCE >= needed)
        .unwrap_or(Grade::S)
}

/// Solve a single target
#[must_use]
pub fn solve_target(
    target: f64,
    current_credits: u32,
    total_current_points: f64,
    future_credits: u32,
) -> Option<TargetOutcome> {
    if future_credits == 0 {
        return None;
    }

    let future = f64::from(future_credits);
    let needed =
        target.mul_add(f64::from(current_credits) + future, -total_current_points) / future;

    let (achievable, minimum) = if needed <= TOLERANCE {
        (true, MinimumGrade::Any)
    } else if needed <= MAX_GRADE_POINT + TOLERANCE {
        (true, MinimumGrade::Grade(lowest_grade_reaching(needed)))
    } else {
        (false, MinimumGrade::NotAchievable)
    };

    Some(TargetOutcome {
        target,
        achievable,
        needed_points: needed,
        minimum,
    })
}

/// Solve every target in `targets`
///
/// Returns `None` when there are no future credits: the question is undefined
/// without future subjects, which is different from "not achievable".
#[must_use]
pub fn solve_targets(
    current_credits: u32,
    total_current_points: f64,
    future_credits: u32,
    targets: &[f64],
) -> Option<Vec<TargetOutcome>> {
    if future_credits == 0 {
        return None;
    }
    targets
        .iter()
        .map(|&target| {
            solve_target(target, current_credits, total_current_points, future_credits)
        })
        .collect()
}

/// Solver inputs derived from entry collections, with the outcomes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetPlan {
    /// Credits already graded
    pub current_credits: u32,
    /// Σ credits × points of graded entries
    pub current_points: f64,
    /// Credits still to be graded
    pub future_credits: u32,
    /// One outcome per target
    pub outcomes: Vec<TargetOutcome>,
}

impl TargetPlan {
    /// Build a plan from raw entry lists, skipping invalid entries
    ///
    /// Returns `None` when no valid future entry exists.
    #[must_use]
    pub fn from_entries(
        completed: &[SubjectEntry],
        future: &[SubjectEntry],
        targets: &[f64],
    ) -> Option<Self> {
        let completed: Vec<&SubjectEntry> = completed.iter().filter(|e| e.is_valid()).collect();
        let future: Vec<&SubjectEntry> = future.iter().filter(|e| e.is_valid()).collect();
        if future.is_empty() {
            return None;
        }

        let current_credits = total_credits(&completed);
        let current_points = total_grade_points(&completed);
        let future_credits = total_credits(&future);
        let outcomes = solve_targets(current_credits, current_points, future_credits, targets)?;

        Some(Self {
            current_credits,
            current_points,
            future_credits,
            outcomes,
        })
    }

    /// Highest target that can still be reached
    #[must_use]
    pub fn best_achievable(&self) -> Option<&TargetOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.achievable)
            .max_by(|a, b| a.target.total_cmp(&b.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::models::Domain;

    fn solve_one(current: u32, points: f64, future: u32, target: f64) -> TargetOutcome {
        solve_target(target, current, points, future).unwrap()
    }

    #[test]
    fn test_example_achievable_with_b() {
        // (8.5 × 28 − 180) / 8 = 7.25 → C (7) is short, B (8) suffices
        let outcome = solve_one(20, 180.0, 8, 8.5);
        assert!(outcome.achievable);
        assert!((outcome.needed_points - 7.25).abs() < 1e-9);
        assert_eq!(outcome.minimum, MinimumGrade::Grade(Grade::B));
    }

    #[test]
    fn test_example_not_achievable() {
        // (9.5 × 28 − 180) / 8 = 10.75
        let outcome = solve_one(20, 180.0, 8, 9.5);
        assert!(!outcome.achievable);
        assert_eq!(outcome.minimum, MinimumGrade::NotAchievable);
    }

    #[test]
    fn test_no_future_credits_yields_nothing() {
        assert!(solve_targets(20, 180.0, 0, &DEFAULT_TARGETS).is_none());
        assert!(solve_target(7.0, 20, 180.0, 0).is_none());
    }

    #[test]
    fn test_needed_exactly_ten_requires_s() {
        // (9.0 × 10 − 50) / 4 = 10
        let outcome = solve_one(6, 50.0, 4, 9.0);
        assert!(outcome.achievable);
        assert_eq!(outcome.minimum, MinimumGrade::Grade(Grade::S));
    }

    #[test]
    fn test_needed_exactly_zero_is_any() {
        // (7.0 × 10 − 70) / 4 = 0
        let outcome = solve_one(6, 70.0, 4, 7.0);
        assert!(outcome.achievable);
        assert_eq!(outcome.minimum, MinimumGrade::Any);
    }

    #[test]
    fn test_already_guaranteed_is_any() {
        let outcome = solve_one(40, 400.0, 4, 8.0);
        assert!(outcome.needed_points < 0.0);
        assert_eq!(outcome.minimum, MinimumGrade::Any);
    }

    #[test]
    fn test_minimum_not_nearest() {
        // needed 5.1 → E (5) is short, D (6) is the minimum
        let outcome = solve_one(0, 0.0, 10, 5.1);
        assert_eq!(outcome.minimum, MinimumGrade::Grade(Grade::D));
        // needed exactly 5 → E
        let outcome = solve_one(0, 0.0, 10, 5.0);
        assert_eq!(outcome.minimum, MinimumGrade::Grade(Grade::E));
        // needed 0.5 → nothing below E, U (0) is short
        let outcome = solve_one(0, 0.0, 10, 0.5);
        assert_eq!(outcome.minimum, MinimumGrade::Grade(Grade::E));
    }

    #[test]
    fn test_achievability_is_monotonic_in_target() {
        let targets: Vec<f64> = (0_i32..=40).map(|i| f64::from(i).mul_add(0.1, 6.0)).collect();
        let outcomes = solve_targets(20, 150.0, 12, &targets).unwrap();
        let mut seen_unreachable = false;
        for outcome in &outcomes {
            if seen_unreachable {
                assert!(!outcome.achievable, "target {} flipped back", outcome.target);
            }
            seen_unreachable |= !outcome.achievable;
        }
        assert!(seen_unreachable);
    }

    #[test]
    fn test_outcomes_follow_target_order() {
        let outcomes = solve_targets(20, 180.0, 8, &DEFAULT_TARGETS).unwrap();
        let targets: Vec<f64> = outcomes.iter().map(|o| o.target).collect();
        assert_eq!(targets, DEFAULT_TARGETS.to_vec());
    }

    #[test]
    fn test_plan_from_entries_skips_invalid() {
        let subjects = catalog::subjects(Domain::Ds);
        let completed = vec![
            SubjectEntry::for_subject(&subjects[0], Grade::S),
            SubjectEntry::for_subject(&subjects[1], Grade::B),
            SubjectEntry::empty(),
        ];
        let future = vec![SubjectEntry::for_subject(&subjects[2], Grade::S), SubjectEntry::empty()];

        let plan = TargetPlan::from_entries(&completed, &future, &[9.0]).unwrap();
        assert_eq!(plan.current_credits, 8);
        assert!((plan.current_points - 72.0).abs() < 1e-9);
        assert_eq!(plan.future_credits, 4);
        // (9 × 12 − 72) / 4 = 9 → A
        assert_eq!(plan.outcomes[0].minimum, MinimumGrade::Grade(Grade::A));
        assert_eq!(plan.best_achievable().map(|o| o.target), Some(9.0));
    }

    #[test]
    fn test_plan_requires_valid_future_entries() {
        let subjects = catalog::subjects(Domain::Ds);
        let completed = vec![SubjectEntry::for_subject(&subjects[0], Grade::S)];
        let future = vec![SubjectEntry::empty()];
        assert!(TargetPlan::from_entries(&completed, &future, &DEFAULT_TARGETS).is_none());
    }

    #[test]
    fn test_minimum_grade_display() {
        assert_eq!(MinimumGrade::Any.to_string(), "Any grade");
        assert_eq!(MinimumGrade::Grade(Grade::B).to_string(), "B (8)");
        assert_eq!(MinimumGrade::NotAchievable.to_string(), "Not possible");
    }
}
