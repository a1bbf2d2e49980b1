//! End-to-end tests: entries through CGPA, targets and reports

use cgpa_planner::analysis::GradeDistribution;
use cgpa_planner::catalog;
use cgpa_planner::cgpa::CgpaSummary;
use cgpa_planner::grading::Grade;
use cgpa_planner::models::{Domain, Level, SubjectEntry};
use cgpa_planner::report::{ReportContext, ReportFormat, ReportGenerator};
use cgpa_planner::store::{Category, EntryStore};
use cgpa_planner::targets::{MinimumGrade, TargetPlan, DEFAULT_TARGETS};
use std::fs;
use tempfile::TempDir;

fn add_catalog(store: &mut EntryStore, category: Category, id: &str, grade: Grade) {
    let subject = catalog::find(store.domain(), id).unwrap();
    store
        .collection_mut(category)
        .add(SubjectEntry::for_subject(subject, grade));
}

/// Three completed foundation subjects at 9.0, one ongoing project, one future subject
fn build_store() -> EntryStore {
    let mut store = EntryStore::with_domain(Domain::Ds);
    add_catalog(&mut store, Category::Completed, "ds-f-1", Grade::S);
    add_catalog(&mut store, Category::Completed, "ds-f-2", Grade::A);
    add_catalog(&mut store, Category::Completed, "ds-f-3", Grade::B);
    store
        .collection_mut(Category::Ongoing)
        .add(SubjectEntry::custom("Project", 4, Grade::C));
    add_catalog(&mut store, Category::Future, "ds-f-4", Grade::S);
    store
}

#[test]
fn test_current_cgpa_ignores_placeholders() {
    let store = build_store();
    let completed = store.collection(Category::Completed).valid_entries();
    let summary = CgpaSummary::of(&completed);

    assert_eq!(store.collection(Category::Completed).len(), 4);
    assert_eq!(summary.subjects, 3);
    assert_eq!(summary.credits, 12);
    assert!((summary.cgpa - 9.0).abs() < 1e-9);
    assert_eq!(summary.display_cgpa(), "9.00");
}

#[test]
fn test_predictions_with_ongoing_and_future() {
    let store = build_store();
    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);

    // (108 + 28) / 16
    assert!((ctx.with_ongoing.combined.cgpa - 8.5).abs() < 1e-9);
    assert_eq!(ctx.with_ongoing.display_difference(), "-0.50");
    // (108 + 40) / 16
    assert!((ctx.with_future.combined.cgpa - 9.25).abs() < 1e-9);
    assert_eq!(ctx.entry_count(), 5);
}

#[test]
fn test_target_plan_from_store() {
    let store = build_store();
    let plan = TargetPlan::from_entries(
        store.collection(Category::Completed).entries(),
        store.collection(Category::Future).entries(),
        &DEFAULT_TARGETS,
    )
    .unwrap();

    assert_eq!(plan.current_credits, 12);
    assert_eq!(plan.future_credits, 4);

    // 7.0 needs (112 - 108) / 4 = 1 point
    assert_eq!(plan.outcomes[0].minimum, MinimumGrade::Grade(Grade::E));
    // 9.0 needs exactly 9 points
    assert_eq!(plan.outcomes[4].minimum, MinimumGrade::Grade(Grade::A));
    assert_eq!(plan.outcomes[5].minimum, MinimumGrade::NotAchievable);

    let best = plan.best_achievable().unwrap();
    assert!((best.target - 9.0).abs() < 1e-9);
}

#[test]
fn test_target_plan_needs_a_valid_future_entry() {
    let mut store = build_store();
    store.collection_mut(Category::Future).reset();

    let plan = TargetPlan::from_entries(
        store.collection(Category::Completed).entries(),
        store.collection(Category::Future).entries(),
        &DEFAULT_TARGETS,
    );
    assert!(plan.is_none());

    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);
    assert!(ctx.targets.is_none());
}

#[test]
fn test_distribution_and_levels() {
    let store = build_store();
    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);

    assert_eq!(ctx.distribution.count(Grade::S), 1);
    assert_eq!(ctx.distribution.count(Grade::U), 0);
    assert_eq!(
        ctx.distribution.present_grades(),
        vec![Grade::S, Grade::A, Grade::B]
    );

    let foundation = ctx
        .breakdown
        .levels
        .iter()
        .find(|l| l.level == Level::Foundation)
        .unwrap();
    assert_eq!(foundation.summary.subjects, 3);
    assert_eq!(
        foundation.total_available,
        catalog::subjects_at_level(Domain::Ds, Level::Foundation).count()
    );

    let empty: [(u32, Grade); 0] = [];
    assert!(GradeDistribution::of(&empty).is_empty());
}

#[test]
fn test_switching_domain_changes_report_scope() {
    let mut store = build_store();
    store.switch_domain(Domain::Es);

    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);
    assert_eq!(ctx.entry_count(), 0);
    assert!(!ctx.current.has_data());

    store.switch_domain(Domain::Ds);
    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);
    assert_eq!(ctx.entry_count(), 5);
}

#[test]
fn test_reports_written_in_every_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = build_store();
    let ctx = ReportContext::from_store(&store, &DEFAULT_TARGETS);

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = temp_dir
            .path()
            .join(format!("report.{}", format.extension()));
        format
            .generator()
            .generate(&ctx, &path)
            .expect("Failed to generate report");

        let content = fs::read_to_string(&path).expect("Failed to read report");
        assert!(content.contains("BS in Data Science and Applications"));
        assert!(content.contains("Mathematics for Data Science I"));
        assert!(content.contains("Project"));
    }

    let markdown = fs::read_to_string(temp_dir.path().join("report.md")).unwrap();
    assert!(markdown.contains("| Current (completed) | 9.00 | 12 | 3 |"));
    assert!(markdown.contains("| 9.0 | 9.00 | A (9) | ✓ |"));
}
