//! jst-xh-models: parameter catalog for JST XH connector 3D models
//!
//! Lists, shows and exports the model parameters of the JST XH series for
//! use by an external 3D model generator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use regex::Regex;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use jst_xh_models::config::{self, Config};
use jst_xh_models::export::{self, ExportFormat};
use jst_xh_models::jst_xh::{Catalog, Family, Params};

/// Parameter catalog for JST XH connector 3D models.
#[derive(Parser, Debug)]
#[command(name = "jst-xh-models")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog models and their file names
    List {
        /// Restrict to one family (straight, angled, angled-compact)
        #[arg(short, long)]
        family: Option<Family>,

        /// Only list models whose name matches this regular expression
        #[arg(long, value_name = "REGEX")]
        filter: Option<Regex>,
    },

    /// Print the parameters of one model as JSON
    Show {
        /// Model key, e.g. B05B_XH_A
        model: String,
    },

    /// Write the parameter table to a file
    Export {
        /// Restrict to one family (straight, angled, angled-compact)
        #[arg(short, long)]
        family: Option<Family>,

        /// Output format (defaults to the configured format)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output directory (defaults to the configured directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Print the series constants as JSON
    Constants,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Selects the records of one family, or of every family.
fn select(catalog: &Catalog, family: Option<Family>) -> Vec<&Params> {
    match family {
        Some(family) => catalog.family(family).values().collect(),
        None => catalog.iter().map(|(_, params)| params).collect(),
    }
}

/// Runs the selected subcommand.
fn run(command: Command, cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::standard();

    match command {
        Command::List { family, filter } => {
            for params in select(catalog, family) {
                if filter
                    .as_ref()
                    .is_some_and(|re| !re.is_match(&params.model_name))
                {
                    continue;
                }
                println!("{:<14}{}", params.model_name, params.file_name);
            }
        }
        Command::Show { model } => {
            let (family, params) = catalog.find(&model)?;
            info!(model = %model, family = %family, "Found model");
            println!("{}", serde_json::to_string_pretty(params)?);
        }
        Command::Export {
            family,
            format,
            output,
        } => {
            let records = select(catalog, family);
            let format = format.unwrap_or(cfg.export.format);
            let dir = output.unwrap_or_else(|| cfg.output_dir());
            let count = records.len();
            let path = export::export_to_dir(
                &dir,
                &cfg.export.file_stem,
                records,
                format,
                cfg.export.pretty,
            )?;
            info!(path = %path.display(), models = count, "Exported parameters");
            println!("{}", path.display());
        }
        Command::Constants => {
            println!("{}", serde_json::to_string_pretty(catalog.constants())?);
        }
    }

    Ok(())
}

/// Entry point for the jst-xh-models tool.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting jst-xh-models");

    match run(args.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}
