//! Compute command: corpus → registry → KL and Rao matrices → reports.
//!
//! # Usage
//!
//! ```bash
//! # Catalog entries are the languages
//! langdist compute --catalog lm_normalized_dedup --output-dir out
//!
//! # Catalog seeds the vocabulary, one file per language
//! langdist compute --catalog lm_normalized_dedup --languages-dir langs --json
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use langdist_core::pipeline;
use langdist_core::LangDistConfig;

use super::{exit_code, InputArgs};
use crate::error::CliError;

/// Arguments for the compute command.
#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory the reports are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Measure pairs on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Print a JSON run summary to stdout
    #[arg(long)]
    pub json: bool,
}

impl ComputeArgs {
    fn apply(self, config: &mut LangDistConfig) -> bool {
        self.input.apply(&mut config.input);
        if let Some(dir) = self.output_dir {
            config.output.dir = dir;
        }
        if self.sequential {
            config.compute.parallel = false;
        }
        self.json
    }
}

/// Execute the compute command.
///
/// # Returns
///
/// Exit code:
/// - 0: Reports written (failed pairs included)
/// - 1: IO failure
/// - 3: Invalid configuration
/// - 4: Malformed or empty corpus
pub fn handle_compute(args: ComputeArgs, config: LangDistConfig) -> i32 {
    let stdout = std::io::stdout();
    exit_code(execute(args, config, &mut stdout.lock()))
}

fn execute<W: Write>(args: ComputeArgs, mut config: LangDistConfig, out: &mut W) -> Result<(), CliError> {
    let json = args.apply(&mut config);
    config.validate()?;

    info!(
        catalog = %config.input.catalog.display(),
        output = %config.output.dir.display(),
        parallel = config.compute.parallel,
        "Computing language distances"
    );
    let output = pipeline::run(&config)?;
    let summary = output.summary();

    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} languages, {} meanings, {} failed pairs -> {}",
            summary.languages,
            summary.vocabulary_size,
            summary.failed_pairs.len(),
            config.output.dir.display()
        )?;
    }
    Ok(())
}
