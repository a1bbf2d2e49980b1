//! WASM library entry point for `CgpaPlanner`
//! This module exports the calculator and solver to JavaScript/TypeScript

mod rs {
    pub mod bindings;
}

pub use rs::bindings::*;
