//! CLI command handlers for `CgpaPlanner`.
//!
//! Each command is implemented in its own submodule. Commands that touch
//! entries load the state file, apply one change and write it back.

pub mod catalog;
pub mod cgpa;
pub mod config;
pub mod domain;
pub mod entries;
pub mod report;
pub mod targets;

use cgpa_planner::config::Config;
use cgpa_planner::error;
use cgpa_planner::store::EntryStore;

/// Load the entry store named by the config, starting fresh if needed
pub fn load_store(config: &Config) -> EntryStore {
    EntryStore::load_or_default(&config.data_file_path(), config.default_domain())
}

/// Write the entry store back, exiting on failure
pub fn save_store(store: &EntryStore, config: &Config) {
    let path = config.data_file_path();
    if let Err(e) = store.save(&path) {
        error!("Failed to save state to {}: {e}", path.display());
        eprintln!("✗ Failed to save state to {}: {e}", path.display());
        std::process::exit(1);
    }
}

/// Print an error and exit with status 1
pub fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}
