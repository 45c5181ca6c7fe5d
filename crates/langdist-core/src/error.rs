//! Error types for corpus ingestion, matrix alignment and distance computation.
//!
//! Failures of the distance engine ([`LangDistError::ShapeMismatch`],
//! [`LangDistError::DegenerateFisherInformation`],
//! [`LangDistError::NumericOverflow`]) are local to a single language pair.
//! The pairwise driver records them per cell and keeps going. Everything else
//! aborts the step that raised it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building language matrices or measuring them.
#[derive(Debug, Error)]
pub enum LangDistError {
    /// The two matrices handed to the distance engine differ in dimension.
    #[error("Matrix shape mismatch: left is {left}x{left}, right is {right}x{right}")]
    ShapeMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Fisher information is negative or non-finite, or the normalizer is zero.
    #[error(
        "Degenerate Fisher information at a={alpha}: normalizer={normalizer}, fisher={fisher}. {reason}"
    )]
    DegenerateFisherInformation {
        /// Path parameter the information was sampled at
        alpha: f64,
        /// Chernoff normalizer K(a)
        normalizer: f64,
        /// Fisher information value (may be NaN)
        fisher: f64,
        /// Reason for rejection
        reason: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A distance evaluated to a non-finite value.
    #[error("Numeric overflow in {operation}: {details}")]
    NumericOverflow {
        /// The operation that overflowed
        operation: String,
        /// Details about the overflow
        details: String,
    },

    /// A record line could not be parsed into a meaning and a numeric vector.
    #[error("Malformed record in {source_name} line {line_number}: {reason} (line: {line:?})")]
    MalformedRecord {
        /// File or section the line came from
        source_name: String,
        /// 1-based line number within the source
        line_number: usize,
        /// Raw line content
        line: String,
        /// What was wrong with it
        reason: String,
    },

    /// A record set references a meaning the vocabulary was never told about.
    #[error("Meaning {meaning:?} of language {language:?} is not in the vocabulary")]
    UnknownMeaning {
        /// Language being aligned
        language: String,
        /// Missing meaning label
        meaning: String,
    },

    /// The same language identifier was registered twice.
    #[error("Language {0:?} is already registered")]
    DuplicateLanguage(String),

    /// No languages were found in the configured inputs.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File access error
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for langdist operations.
pub type LangDistResult<T> = Result<T, LangDistError>;

impl From<serde_json::Error> for LangDistError {
    fn from(err: serde_json::Error) -> Self {
        LangDistError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for LangDistError {
    fn from(err: config::ConfigError) -> Self {
        LangDistError::ConfigError(err.to_string())
    }
}

impl LangDistError {
    /// Create a MalformedRecord error.
    pub fn malformed(
        source_name: impl Into<String>,
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LangDistError::MalformedRecord {
            source_name: source_name.into(),
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateFisherInformation error.
    pub fn degenerate(alpha: f64, normalizer: f64, fisher: f64, reason: impl Into<String>) -> Self {
        LangDistError::DegenerateFisherInformation {
            alpha,
            normalizer,
            fisher,
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        LangDistError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LangDistError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error only invalidates one language pair.
    pub fn is_pair_local(&self) -> bool {
        matches!(
            self,
            LangDistError::ShapeMismatch { .. }
                | LangDistError::DegenerateFisherInformation { .. }
                | LangDistError::NumericOverflow { .. }
        )
    }

    /// Check if this error was caused by bad input data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LangDistError::MalformedRecord { .. }
                | LangDistError::UnknownMeaning { .. }
                | LangDistError::DuplicateLanguage(_)
                | LangDistError::EmptyCorpus(_)
        )
    }
}
