//! Sub-configuration structures for each stage of a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ingest::DEFAULT_LANGUAGE_MARKER;

/// Where the corpus comes from.
///
/// With only `catalog` set, the catalog's language entries are the
/// languages. With `languages_dir` set, the catalog only seeds the
/// vocabulary and every file in the directory is one language.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Catalog file of meanings and language entries.
    pub catalog: PathBuf,

    /// Directory of per-language record files.
    pub languages_dir: Option<PathBuf>,

    /// Prefix opening a language entry.
    pub language_marker: String,

    /// Prefix stripped from per-language file names to get the language name.
    pub language_file_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("lm_normalized_dedup"),
            languages_dir: None,
            language_marker: DEFAULT_LANGUAGE_MARKER.to_string(),
            language_file_prefix: String::new(),
        }
    }
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.as_os_str().is_empty() {
            return Err("input.catalog must not be empty".to_string());
        }
        if self.language_marker.is_empty() {
            return Err("input.language_marker must not be empty".to_string());
        }
        if self.language_marker.contains(char::is_whitespace) {
            return Err(format!(
                "input.language_marker must not contain whitespace, got {:?}",
                self.language_marker
            ));
        }
        Ok(())
    }
}

/// Where and how results are written.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub labels_file: String,
    pub kl_file: String,
    pub rao_file: String,

    /// Also write the annotated `*-final` reports.
    pub annotated_report: bool,
    pub kl_report_file: String,
    pub rao_report_file: String,

    /// Text written in place of a failed pair's value.
    pub failure_sentinel: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            labels_file: "langs.txt".to_string(),
            kl_file: "kl.txt".to_string(),
            rao_file: "rao.txt".to_string(),
            annotated_report: true,
            kl_report_file: "kl-final.txt".to_string(),
            rao_report_file: "rao-final.txt".to_string(),
            failure_sentinel: "NA".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        let mut names = vec![
            ("output.labels_file", &self.labels_file),
            ("output.kl_file", &self.kl_file),
            ("output.rao_file", &self.rao_file),
        ];
        if self.annotated_report {
            names.push(("output.kl_report_file", &self.kl_report_file));
            names.push(("output.rao_report_file", &self.rao_report_file));
        }
        for (key, name) in &names {
            if name.is_empty() {
                return Err(format!("{} must not be empty", key));
            }
        }
        for (i, (key, name)) in names.iter().enumerate() {
            if let Some((other, _)) = names[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(format!("{} and {} both write {:?}", key, other, name));
            }
        }
        if self.failure_sentinel.is_empty() || self.failure_sentinel.contains(char::is_whitespace)
        {
            return Err(format!(
                "output.failure_sentinel must be a single non-empty token, got {:?}",
                self.failure_sentinel
            ));
        }
        Ok(())
    }

    pub fn labels_path(&self) -> PathBuf {
        self.dir.join(&self.labels_file)
    }

    pub fn kl_path(&self) -> PathBuf {
        self.dir.join(&self.kl_file)
    }

    pub fn rao_path(&self) -> PathBuf {
        self.dir.join(&self.rao_file)
    }

    pub fn kl_report_path(&self) -> PathBuf {
        self.dir.join(&self.kl_report_file)
    }

    pub fn rao_report_path(&self) -> PathBuf {
        self.dir.join(&self.rao_report_file)
    }
}

/// Pairwise computation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// Spread pairs over the rayon thread pool.
    pub parallel: bool,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "logging.level must be one of {:?}, got {:?}",
                LEVELS, self.level
            ));
        }
        if !matches!(self.format.to_lowercase().as_str(), "pretty" | "compact") {
            return Err(format!(
                "logging.format must be \"pretty\" or \"compact\", got {:?}",
                self.format
            ));
        }
        Ok(())
    }
}
