//! langdist CLI
//!
//! Computes KL divergence and Rao distance between every pair of languages
//! of a corpus.
//!
//! # Commands
//!
//! - `compute`: Run the full pipeline and write the distance reports
//! - `vocabulary`: Print the global meaning index of a corpus
//!
//! # Exit Codes
//!
//! 0 on success, 1 on IO errors, 3 on configuration errors, 4 on malformed
//! or empty input. See [`error`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use langdist_core::config::LoggingConfig;
use langdist_core::{LangDistConfig, LangDistResult};

mod commands;
mod error;

pub use error::{exit_code_for_error, CliError, CliExitCode};

/// langdist - pairwise information-geometric language distances
#[derive(Parser)]
#[command(name = "langdist")]
#[command(version)]
#[command(about = "Pairwise KL divergence and Rao distance between language matrices")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file (default: layered config/ files and LANGDIST__* variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute KL and Rao distance matrices and write the reports
    Compute(commands::compute::ComputeArgs),
    /// Print each meaning with its global index
    Vocabulary(commands::vocabulary::VocabularyArgs),
}

fn load_config(path: Option<&PathBuf>) -> LangDistResult<LangDistConfig> {
    match path {
        Some(path) => LangDistConfig::from_file(path),
        None => LangDistConfig::load(),
    }
}

fn init_logging(verbose: u8, logging: &LoggingConfig) {
    // Setup logging based on verbosity, falling back to the configured level
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_file(logging.include_location)
        .with_line_number(logging.include_location)
        .with_writer(std::io::stderr);

    if logging.format.eq_ignore_ascii_case("compact") {
        builder.compact().init();
    } else {
        builder.pretty().init();
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            init_logging(cli.verbose, &LoggingConfig::default());
            std::process::exit(commands::report_failure(err.into()));
        }
    };
    init_logging(cli.verbose, &config.logging);

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Compute(args) => commands::compute::handle_compute(args, config),
        Commands::Vocabulary(args) => commands::vocabulary::handle_vocabulary(args, config),
    };

    std::process::exit(exit_code);
}
