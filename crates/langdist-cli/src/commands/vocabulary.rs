//! Vocabulary command: list every meaning with its global index.

use std::io::Write;

use clap::Args;

use langdist_core::pipeline::load_corpus;
use langdist_core::LangDistConfig;

use super::{exit_code, InputArgs};
use crate::error::CliError;

/// Arguments for the vocabulary command.
#[derive(Args, Debug, Default)]
pub struct VocabularyArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the vocabulary command.
///
/// Prints `meaning<TAB>index` lines in index order, then the matrix size and
/// the number of languages.
pub fn handle_vocabulary(args: VocabularyArgs, config: LangDistConfig) -> i32 {
    let stdout = std::io::stdout();
    exit_code(execute(args, config, &mut stdout.lock()))
}

fn execute<W: Write>(
    args: VocabularyArgs,
    mut config: LangDistConfig,
    out: &mut W,
) -> Result<(), CliError> {
    args.input.apply(&mut config.input);
    config.validate()?;

    let corpus = load_corpus(&config.input)?;
    let vocabulary = corpus.vocabulary();
    for (meaning, index) in vocabulary.iter() {
        writeln!(out, "{}\t{}", meaning, index)?;
    }
    writeln!(out, "matrix size: {0}x{0}", vocabulary.size())?;
    writeln!(out, "languages: {}", corpus.languages().len())?;
    Ok(())
}
