//! Helper functions: deterministic corpora on disk.

use std::fs;
use std::path::{Path, PathBuf};

use langdist_core::LangDistConfig;
use tempfile::TempDir;

/// Four languages over three meanings, each defining every meaning.
pub const FOUR_LANGUAGE_CATALOG: &str = "\
# Old_English
hand\t0.40 0.05 0.05 
foot\t0.05 0.20 0.05 
eye\t0.05 0.05 0.10 
# Welsh
hand\t0.30 0.10 0.05 
foot\t0.10 0.20 0.05 
eye\t0.05 0.05 0.10 
# Scots_Gaelic
eye\t0.20 0.05 0.05 
hand\t0.05 0.30 0.05 
foot\t0.05 0.05 0.20 
# Breton
hand\t0.11 0.11 0.11 
foot\t0.11 0.11 0.11 
eye\t0.11 0.11 0.12 
";

/// Write `body` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}

/// Config reading `catalog` and writing into `dir/out`.
pub fn config_for(dir: &Path, catalog: PathBuf) -> LangDistConfig {
    let mut config = LangDistConfig::default();
    config.input.catalog = catalog;
    config.output.dir = dir.join("out");
    config
}

/// Temporary directory holding [`FOUR_LANGUAGE_CATALOG`] and its config.
pub fn four_language_setup() -> (TempDir, LangDistConfig) {
    let tmp = TempDir::new().expect("tempdir");
    let catalog = write_file(tmp.path(), "catalog", FOUR_LANGUAGE_CATALOG);
    let config = config_for(tmp.path(), catalog);
    (tmp, config)
}
