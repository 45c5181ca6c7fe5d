//! CLI command handlers
//!
//! # Modules
//!
//! - `compute`: Run the full pipeline and write the reports
//! - `vocabulary`: List the global meaning index of a corpus

pub mod compute;
pub mod vocabulary;

use std::path::PathBuf;

use clap::Args;
use tracing::error;

use crate::error::{CliError, CliExitCode};
use langdist_core::config::InputConfig;

/// Input overrides shared by every command.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Catalog file of meanings and language entries
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory with one record file per language
    #[arg(long)]
    pub languages_dir: Option<PathBuf>,
}

impl InputArgs {
    pub fn apply(self, input: &mut InputConfig) {
        if let Some(catalog) = self.catalog {
            input.catalog = catalog;
        }
        if let Some(dir) = self.languages_dir {
            input.languages_dir = Some(dir);
        }
    }
}

/// Log and print a handler failure, returning its exit code.
pub(crate) fn report_failure(err: CliError) -> i32 {
    let code = err.exit_code();
    error!(exit_code = i32::from(code), "{}", err);
    eprintln!("Error: {}", err);
    code.into()
}

/// Exit code for a handler result.
pub(crate) fn exit_code(result: Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => CliExitCode::Success.into(),
        Err(err) => report_failure(err),
    }
}
