//! Command-line interface entry point for `CgpaPlanner`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_planner::config::Config;
use cgpa_planner::info;
use cgpa_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to a copy;
    // `config` subcommands edit the stored values only
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Domain { domain } => {
            commands::domain::run(domain.map(Into::into), &config);
        }
        Command::Catalog { level, available } => {
            commands::catalog::run(level.map(Into::into), available, &config);
        }
        Command::Add {
            category,
            subject,
            custom,
            credits,
            grade,
        } => {
            let fields = commands::entries::EntryFields {
                subject,
                custom,
                name: None,
                credits,
                grade,
            };
            commands::entries::add(category.into(), fields, &config);
        }
        Command::Update {
            category,
            id,
            subject,
            custom,
            name,
            credits,
            grade,
        } => {
            let fields = commands::entries::EntryFields {
                subject,
                custom,
                name,
                credits,
                grade,
            };
            commands::entries::update(category.into(), &id, fields, &config);
        }
        Command::Remove { category, id } => {
            commands::entries::remove(category.into(), &id, &config);
        }
        Command::Reset { category, yes } => {
            commands::entries::reset(category.map(Into::into), yes, &config);
        }
        Command::List { category } => {
            commands::entries::list(category.map(Into::into), &config);
        }
        Command::Cgpa => commands::cgpa::run(&config),
        Command::Targets { targets } => commands::targets::run(&targets, &config),
        Command::Report { output, format } => {
            commands::report::run(output.as_deref(), format.into(), &config);
        }
    }
}
