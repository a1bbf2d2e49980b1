//! Data models for `CgpaPlanner`

pub mod domain;
pub mod entry;
pub mod subject;

pub use domain::{Domain, Level};
pub use entry::{
    clamp_credits, EntryUpdate, SubjectEntry, SubjectRef, DEFAULT_CREDITS, MAX_CREDITS, MIN_CREDITS,
};
pub use subject::Subject;
