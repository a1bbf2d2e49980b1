//! CLI argument definitions for `CgpaPlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_planner::config::ConfigOverrides;
use cgpa_planner::grading::Grade;
use cgpa_planner::logger::Level;
use cgpa_planner::models::{Domain, Level as CurriculumLevel};
use cgpa_planner::report::ReportFormat;
use cgpa_planner::store::Category;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Entry list selector
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// Subjects with a final grade
    Completed,
    /// Subjects in progress
    Ongoing,
    /// Subjects not yet taken
    Future,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Completed => Self::Completed,
            CategoryArg::Ongoing => Self::Ongoing,
            CategoryArg::Future => Self::Future,
        }
    }
}

/// Degree domain selector
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum DomainArg {
    /// BS in Data Science and Applications
    Ds,
    /// BS in Electronic Systems
    Es,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Ds => Self::Ds,
            DomainArg::Es => Self::Es,
        }
    }
}

/// Curriculum level selector
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LevelArg {
    /// Foundation level
    Foundation,
    /// Diploma level
    Diploma,
    /// Degree level
    Degree,
}

impl From<LevelArg> for CurriculumLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Foundation => Self::Foundation,
            LevelArg::Diploma => Self::Diploma,
            LevelArg::Degree => Self::Degree,
        }
    }
}

/// Report format selector
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Markdown tables
    #[value(alias = "md")]
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Html => Self::Html,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `targets`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show or switch the active degree domain.
    ///
    /// Each domain keeps its own entries; switching never discards data.
    Domain {
        /// Domain to make active (omit to show the current one)
        #[arg(value_enum)]
        domain: Option<DomainArg>,
    },
    /// List catalog subjects of the active domain.
    Catalog {
        /// Only show subjects of this level
        #[arg(short, long, value_enum)]
        level: Option<LevelArg>,

        /// Hide subjects already used by an entry
        #[arg(long)]
        available: bool,
    },
    /// Add a subject entry to a list.
    ///
    /// Without --subject or --custom a blank placeholder entry is added.
    Add {
        /// List to add to
        #[arg(value_enum)]
        category: CategoryArg,

        /// Catalog subject id (e.g., ds-f-1)
        #[arg(short, long, value_name = "ID", conflicts_with = "custom")]
        subject: Option<String>,

        /// Name of a subject outside the catalog
        #[arg(short, long, value_name = "NAME")]
        custom: Option<String>,

        /// Credits (clamped to 1-12)
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        credits: Option<i64>,

        /// Grade (S, A, B, C, D, E or U)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<Grade>,
    },
    /// Edit an existing entry.
    Update {
        /// List holding the entry
        #[arg(value_enum)]
        category: CategoryArg,

        /// Entry id or a unique prefix of it
        #[arg(value_name = "ID")]
        id: String,

        /// Point the entry at a catalog subject
        #[arg(short, long, value_name = "SUBJECT", conflicts_with = "custom")]
        subject: Option<String>,

        /// Turn the entry into a custom subject with this name
        #[arg(short, long, value_name = "NAME")]
        custom: Option<String>,

        /// Rename the entry
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,

        /// Credits (clamped to 1-12)
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        credits: Option<i64>,

        /// Grade (S, A, B, C, D, E or U)
        #[arg(short, long, value_name = "GRADE")]
        grade: Option<Grade>,
    },
    /// Remove an entry; a list never becomes empty.
    Remove {
        /// List holding the entry
        #[arg(value_enum)]
        category: CategoryArg,

        /// Entry id or a unique prefix of it
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Clear one list, or every list of the active domain.
    Reset {
        /// List to clear (omit for all three)
        #[arg(value_enum)]
        category: Option<CategoryArg>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show entries of the active domain.
    List {
        /// Only show this list
        #[arg(value_enum)]
        category: Option<CategoryArg>,
    },
    /// Show current, predicted and planned CGPA.
    Cgpa,
    /// Show the grade needed in future subjects to reach target CGPAs.
    Targets {
        /// Target CGPA (repeatable; defaults to config `targets`)
        #[arg(short, long = "target", value_name = "CGPA")]
        targets: Vec<f64>,
    },
    /// Generate a report for the active domain.
    Report {
        /// Output file path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "html")]
        format: FormatArg,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpa",
    about = "CGPA calculator and target planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config state file
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config state file (short form)
    #[arg(long = "state-file", value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--state-file`) take precedence over long-form
    /// flags (e.g., `--config-data-file`) when both are provided. `None` means
    /// no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            data_file: path_string(self.state_file.as_ref())
                .or_else(|| path_string(self.config_data_file.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
        }
    }
}
