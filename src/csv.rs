//! CSV rendering for tabular results.
//!
//! Converts a tabular outcome into a CSV artifact with a stable column and
//! row ordering. Values are written as the service's raw string
//! representation with no quoting or escaping; consumers that need
//! RFC-compliant CSV must not rely on this output for values containing
//! commas or newlines.

use crate::error::{Result, ScriptError};
use std::fs;
use std::path::PathBuf;

/// A rendered CSV file: derived path plus serialized contents.
///
/// The artifact owns its bytes until [`write`](Self::write) flushes them to
/// disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    /// Destination path, derived from the script name.
    pub path: PathBuf,

    /// Serialized CSV text.
    pub contents: String,
}

impl CsvArtifact {
    /// Renders a tabular result into an artifact named after `base`.
    pub fn from_tabular(base: &str, columns: &[String], rows: &[Vec<String>]) -> Self {
        Self {
            path: PathBuf::from(derive_csv_name(base)),
            contents: render_csv(columns, rows),
        }
    }

    /// Persists the artifact to its destination path.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.contents).map_err(|e| {
            ScriptError::sink(format!(
                "Could not create CSV file: {}: {e}",
                self.path.display()
            ))
        })
    }
}

/// Derives the CSV filename from a script name.
///
/// The suffix from the last `.` is replaced with `_result.csv`; if the name
/// has no `.`, `_result.csv` is appended.
pub fn derive_csv_name(base: &str) -> String {
    match base.rfind('.') {
        Some(dot_pos) => format!("{}_result.csv", &base[..dot_pos]),
        None => format!("{base}_result.csv"),
    }
}

/// Renders columns and rows as CSV text.
///
/// Header line first, then one line per row; fields joined by `,` with no
/// quoting; every line terminated by exactly one `\n`.
pub fn render_csv(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&columns.join(","));
    out.push('\n');
    for row in rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
