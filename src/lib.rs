//! Shared library for `CgpaPlanner`
//! Contains the grading engine used by the CLI and WASM targets

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod core;
pub mod logger;

pub use self::core::*;
