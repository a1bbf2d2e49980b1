//! Integration smoke tests for `cgpa_planner`

use cgpa_planner::cgpa::calculate_cgpa;
use cgpa_planner::get_version;
use cgpa_planner::grading::Grade;
use cgpa_planner::targets::{solve_targets, MinimumGrade, DEFAULT_TARGETS};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn cgpa_of_mixed_grades() {
    let entries = [(4_u32, Grade::S), (4, Grade::B), (2, Grade::U)];
    // (40 + 32 + 0) / 10
    assert!((calculate_cgpa(&entries) - 7.2).abs() < 1e-9);
}

#[test]
fn cgpa_of_nothing_is_zero() {
    let entries: [(u32, Grade); 0] = [];
    assert!(calculate_cgpa(&entries).abs() < f64::EPSILON);
}

#[test]
fn targets_cover_every_checkpoint() {
    // 40 credits at 8.0, 20 credits still to come
    let outcomes = solve_targets(40, 320.0, 20, &DEFAULT_TARGETS).unwrap();

    assert_eq!(outcomes.len(), DEFAULT_TARGETS.len());
    assert_eq!(outcomes[0].minimum, MinimumGrade::Grade(Grade::E));
    assert_eq!(outcomes[1].minimum, MinimumGrade::Grade(Grade::C));
    assert_eq!(outcomes[2].minimum, MinimumGrade::Grade(Grade::B));
    assert_eq!(outcomes[3].minimum, MinimumGrade::Grade(Grade::S));
    assert_eq!(outcomes[4].minimum, MinimumGrade::NotAchievable);
    assert!(!outcomes[5].achievable);
}

#[test]
fn targets_already_secured_need_any_grade() {
    let outcomes = solve_targets(40, 400.0, 20, &[6.0]).unwrap();
    assert_eq!(outcomes[0].minimum, MinimumGrade::Any);
    assert!(outcomes[0].needed_points < 0.0);
}

#[test]
fn targets_need_future_credits() {
    assert!(solve_targets(40, 320.0, 0, &DEFAULT_TARGETS).is_none());
}
