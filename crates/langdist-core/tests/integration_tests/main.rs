//! Integration tests for the language distance pipeline.
//!
//! Corpora are written to temporary directories and run through the public
//! API the way the CLI does:
//! - Catalog-only and catalog + directory layouts
//! - Malformed input aborting ingestion with line context
//! - Known distance values and zero diagonals
//! - Exact report layouts on disk

mod helpers;
mod distance_tests;
mod ingest_tests;
mod report_tests;
