//! WASM bindings exported to JavaScript/TypeScript

use crate::cgpa::{self, CgpaSummary};
use crate::get_version;
use crate::grading::Grade;
use crate::store::{Category, EntryStore};
use crate::targets::{solve_targets, TargetPlan, DEFAULT_TARGETS};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Returns the current `CgpaPlanner` version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("CgpaPlanner WASM v{}", get_version())
}

fn grade_pairs(credits: &[u32], grades: &[String]) -> Result<Vec<(u32, Grade)>, JsValue> {
    if credits.len() != grades.len() {
        return Err(JsValue::from_str(&format!(
            "Got {} credit values but {} grades",
            credits.len(),
            grades.len()
        )));
    }
    credits
        .iter()
        .zip(grades)
        .map(|(&c, g)| {
            g.parse::<Grade>()
                .map(|grade| (c, grade))
                .map_err(|e| JsValue::from_str(&e))
        })
        .collect()
}

/// Credit-weighted CGPA of parallel credit and grade arrays.
///
/// # Errors
/// Fails when the arrays differ in length or a grade letter is unknown.
#[wasm_bindgen]
pub fn calculate_cgpa(credits: Vec<u32>, grades: Vec<String>) -> Result<f64, JsValue> {
    let pairs = grade_pairs(&credits, &grades)?;
    Ok(cgpa::calculate_cgpa(&pairs))
}

/// Target solver outcomes as JSON, or `null` when there are no future credits.
///
/// # Errors
/// Fails only if serialization fails.
#[wasm_bindgen]
pub fn solve_targets_json(
    current_credits: u32,
    total_current_points: f64,
    future_credits: u32,
    targets: Vec<f64>,
) -> Result<String, JsValue> {
    let outcomes = solve_targets(
        current_credits,
        total_current_points,
        future_credits,
        &targets,
    );
    serde_json::to_string(&outcomes).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct StateSummary {
    completed: CgpaSummary,
    with_ongoing: CgpaSummary,
    with_future: CgpaSummary,
    targets: Option<TargetPlan>,
}

/// Summaries and target plan for a saved state document, as JSON.
///
/// # Errors
/// Fails when the state document cannot be parsed.
#[wasm_bindgen]
pub fn summarize_state_json(state: &str, targets: Vec<f64>) -> Result<String, JsValue> {
    let store: EntryStore =
        serde_json::from_str(state).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let completed = store.collection(Category::Completed).valid_entries();
    let ongoing = store.collection(Category::Ongoing).valid_entries();
    let future = store.collection(Category::Future).valid_entries();
    let targets = if targets.is_empty() {
        DEFAULT_TARGETS.to_vec()
    } else {
        targets
    };

    let summary = StateSummary {
        completed: CgpaSummary::of(&completed),
        with_ongoing: CgpaSummary::combined(&[&completed[..], &ongoing[..]]),
        with_future: CgpaSummary::combined(&[&completed[..], &future[..]]),
        targets: TargetPlan::from_entries(
            store.collection(Category::Completed).entries(),
            store.collection(Category::Future).entries(),
            &targets,
        ),
    };
    serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}
