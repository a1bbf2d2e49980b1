//! Integration tests for logger behavior.

use cgpa_planner::logger::{set_level, set_level_from_str, Level};
use cgpa_planner::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert!(set_level_from_str("WARNING"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_names_round_trip() {
    for name in ["error", "warn", "info", "debug"] {
        let parsed: Level = name.parse().unwrap();
        assert_eq!(parsed.to_string(), name);
    }
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}
