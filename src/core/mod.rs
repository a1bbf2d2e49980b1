//! Core module: grade scale, CGPA calculator, target solver and the entry store

pub mod analysis;
pub mod catalog;
pub mod cgpa;
pub mod config;
pub mod grading;
pub mod models;
pub mod report;
pub mod store;
pub mod targets;

/// Returns the current version of the `CgpaPlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
