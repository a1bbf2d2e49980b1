//! Configuration module for `CgpaPlanner`

use crate::core::models::Domain;
use crate::core::targets::DEFAULT_TARGETS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the per-user planner directory
const DIR_VARIABLE: &str = "$CGPA_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON file holding the subject entries
    #[serde(default)]
    pub data_file: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Target CGPA checkpoints for the solver
    #[serde(default)]
    pub targets: Vec<f64>,
    /// Domain used when no state file exists yet ("ds" or "es")
    #[serde(default)]
    pub domain: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override state file path
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Render targets as a comma-separated list
fn format_targets(targets: &[f64]) -> String {
    targets
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a comma-separated list of CGPA targets in `(0, 10]`
///
/// # Errors
///
/// Returns an error if a value is not a number or lies outside the grade scale
pub fn parse_targets(value: &str) -> Result<Vec<f64>, String> {
    let targets = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let target: f64 = s
                .parse()
                .map_err(|_| format!("Invalid target value: '{s}'"))?;
            if target > 0.0 && target <= 10.0 {
                Ok(target)
            } else {
                Err(format!("Target {target} is outside the 0-10 scale"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        return Err("At least one target is required".to_string());
    }
    Ok(targets)
}

impl Config {
    /// Get the `$CGPA_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/cgpa-planner`
    /// - macOS: `~/Library/Application Support/cgpa-planner`
    /// - Windows: `%APPDATA%\cgpa-planner`
    #[must_use]
    pub fn get_planner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cgpa-planner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Keeps configuration files written by older versions working: only fields
    /// that are empty here and non-empty in defaults are filled in.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_file.is_empty() && !defaults.paths.data_file.is_empty() {
            self.paths.data_file.clone_from(&defaults.paths.data_file);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.planner.targets.is_empty() && !defaults.planner.targets.is_empty() {
            self.planner.targets.clone_from(&defaults.planner.targets);
            changed = true;
        }
        if self.planner.domain.is_empty() && !defaults.planner.domain.is_empty() {
            self.planner.domain.clone_from(&defaults.planner.domain);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for one run and are never saved. Only non-`None` values
    /// replace config values.
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file = Self::expand_variables(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds and `dconfig.toml` for debug builds,
    /// inside [`get_planner_dir`](Self::get_planner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CGPA_PLANNER` in a string to the planner directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let planner_dir = Self::get_planner_dir();
            value.replace(DIR_VARIABLE, planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$CGPA_PLANNER` in path values. Missing fields use their serde
    /// defaults (empty strings, empty lists or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$CGPA_PLANNER/planner.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Existing file: load it, merge missing fields from defaults, save if anything was added
    /// - First run: create the planner directory and write the defaults
    ///
    /// Any read or parse error falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Same as [`load`](Self::load) for an explicit config file path
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as TOML to an explicit path, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory cannot
    /// be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_file`, `reports_dir`,
    /// `targets` (comma-separated) and `domain`. Returns `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "targets" => Some(format_targets(&self.planner.targets)),
            "domain" => Some(self.planner.domain.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., "maybe" for `verbose`, "11" in `targets`, "cs" for `domain`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<crate::logger::Level>()?;
                self.logging.level = value.to_string();
            }
            "file" => self.logging.file = Self::expand_variables(value),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" | "data-file" => self.paths.data_file = Self::expand_variables(value),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = Self::expand_variables(value),
            "targets" => self.planner.targets = parse_targets(value)?,
            "domain" => self.planner.domain = value.parse::<Domain>()?.tag().to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "targets" => self.planner.targets.clone_from(&defaults.planner.targets),
            "domain" => self.planner.domain.clone_from(&defaults.planner.domain),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Targets for the solver, falling back to the conventional checkpoints
    #[must_use]
    pub fn targets(&self) -> Vec<f64> {
        if self.planner.targets.is_empty() {
            DEFAULT_TARGETS.to_vec()
        } else {
            self.planner.targets.clone()
        }
    }

    /// Domain for a fresh state file; unknown values fall back to the default domain
    #[must_use]
    pub fn default_domain(&self) -> Domain {
        self.planner.domain.parse().unwrap_or_default()
    }

    /// State file path
    #[must_use]
    pub fn data_file_path(&self) -> PathBuf {
        if self.paths.data_file.is_empty() {
            Self::get_planner_dir().join("state.json")
        } else {
            PathBuf::from(&self.paths.data_file)
        }
    }

    /// Reports directory path
    #[must_use]
    pub fn reports_dir_path(&self) -> PathBuf {
        if self.paths.reports_dir.is_empty() {
            Self::get_planner_dir().join("reports")
        } else {
            PathBuf::from(&self.paths.reports_dir)
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  targets = [{}]", format_targets(&self.planner.targets))?;
        writeln!(f, "  domain = \"{}\"", self.planner.domain)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert_eq!(config.targets(), DEFAULT_TARGETS.to_vec());
        assert_eq!(config.default_domain(), Domain::Ds);
        assert!(!config.paths.data_file.contains(DIR_VARIABLE));
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!(parse_targets("7, 8.5,9").unwrap(), vec![7.0, 8.5, 9.0]);
        assert!(parse_targets("").is_err());
        assert!(parse_targets("7, abc").is_err());
        assert!(parse_targets("10.5").is_err());
        assert!(parse_targets("0").is_err());
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::from_defaults();
        assert!(config.set("level", "loud").is_err());
        assert!(config.set("domain", "cs").is_err());
        config.set("domain", "Electronic-Systems").unwrap();
        assert_eq!(config.get("domain").as_deref(), Some("es"));
        config.set("targets", "8,9").unwrap();
        assert_eq!(config.get("targets").as_deref(), Some("8, 9"));
    }

    #[test]
    fn test_variable_expansion() {
        let expanded = Config::expand_variables("$CGPA_PLANNER/state.json");
        assert!(expanded.ends_with("state.json"));
        assert!(!expanded.contains(DIR_VARIABLE));
        assert_eq!(Config::expand_variables("/tmp/x.json"), "/tmp/x.json");
    }
}
