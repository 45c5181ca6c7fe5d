//! Text renderings of the registry and distance matrices.
//!
//! - Language labels: `<label:10>=<index>` per line
//! - Distance matrix: one row per line, cells separated by single spaces
//! - Annotated report: the language count, then `<label:10>  <row>` per line
//!
//! Values use the shortest representation that round-trips (`0.0`, `1e-7`).
//! Failed cells are written as the caller's sentinel.

use std::io::{self, Write};

use crate::pairwise::DistanceMatrix;
use crate::registry::LanguageRegistry;

/// Write one `label=index` line per language.
pub fn write_language_labels<W: Write>(out: &mut W, registry: &LanguageRegistry) -> io::Result<()> {
    for entry in registry.entries() {
        writeln!(out, "{}={}", entry.label(), entry.index)?;
    }
    Ok(())
}

/// Write the matrix as `L` lines of `L` space-separated values.
pub fn write_distance_matrix<W: Write>(
    out: &mut W,
    matrix: &DistanceMatrix,
    sentinel: &str,
) -> io::Result<()> {
    for row in matrix.rows() {
        writeln!(out, "{}", render_row(row, sentinel))?;
    }
    Ok(())
}

/// Write the annotated report: element count, then labelled rows.
///
/// `labels` must be in registry index order, one per matrix row.
pub fn write_annotated_report<W: Write>(
    out: &mut W,
    labels: &[String],
    matrix: &DistanceMatrix,
    sentinel: &str,
) -> io::Result<()> {
    if labels.len() != matrix.size() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} labels for a {}x{} matrix",
                labels.len(),
                matrix.size(),
                matrix.size()
            ),
        ));
    }

    writeln!(out, "{}", matrix.size())?;
    for (label, row) in labels.iter().zip(matrix.rows()) {
        writeln!(out, "{}  {}", label, render_row(row, sentinel))?;
    }
    Ok(())
}

fn render_row(row: &[Option<f64>], sentinel: &str) -> String {
    row.iter()
        .map(|cell| match cell {
            // Debug keeps the trailing `.0` and switches to exponents at the extremes
            Some(value) => format!("{:?}", value),
            None => sentinel.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
