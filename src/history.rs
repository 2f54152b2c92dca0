//! Append-only plain-text log of selection snapshots.
//!
//! Each save appends one block:
//!
//! ```text
//! ---- 2026-10-19 14:03:11 ----
//! Symptoms:
//!  - 2) Cough
//!  - 6) Fatigue / weakness
//!
//! ```
//!
//! The log is never read back; it exists for the user's own records.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::store::SymptomCatalog;
use crate::core::selection::Selection;

/// History file used when none is given
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Timestamp format for entry headers (local time)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writer for the history log file
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a timestamped snapshot of the selection, resolving ids to labels.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Open` if the file cannot be opened for appending,
    /// or `HistoryError::Write` if writing fails.
    pub fn append(
        &self,
        selection: &Selection,
        catalog: &SymptomCatalog,
    ) -> Result<(), HistoryError> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let entry = format_entry(&timestamp, selection, catalog);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| HistoryError::Open {
                path: self.path.clone(),
                source,
            })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(entry.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| HistoryError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            symptoms = selection.len(),
            "Saved selection to history"
        );
        Ok(())
    }
}

/// Render one history block
#[must_use]
pub fn format_entry(timestamp: &str, selection: &Selection, catalog: &SymptomCatalog) -> String {
    let mut entry = format!("---- {timestamp} ----\n");

    if selection.is_empty() {
        entry.push_str("(no symptoms selected)\n\n");
        return entry;
    }

    entry.push_str("Symptoms:\n");
    for &id in selection.list() {
        // Writing to a String cannot fail
        let _ = writeln!(entry, " - {id}) {}", catalog.symptom_label(id));
    }
    entry.push('\n');
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SymptomId;

    #[test]
    fn test_format_entry() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(6)).unwrap();
        selection.add(&catalog, SymptomId(2)).unwrap();

        let entry = format_entry("2026-10-19 09:30:00", &selection, &catalog);
        assert_eq!(
            entry,
            "---- 2026-10-19 09:30:00 ----\nSymptoms:\n - 6) Fatigue / weakness\n - 2) Cough\n\n"
        );
    }

    #[test]
    fn test_format_entry_empty_selection() {
        let catalog = SymptomCatalog::load_embedded().unwrap();
        let entry = format_entry("2026-10-19 09:30:00", &Selection::new(), &catalog);
        assert_eq!(
            entry,
            "---- 2026-10-19 09:30:00 ----\n(no symptoms selected)\n\n"
        );
    }

    #[test]
    fn test_append_accumulates_entries() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("history.txt"));
        let catalog = SymptomCatalog::load_embedded().unwrap();

        let mut selection = Selection::new();
        selection.add(&catalog, SymptomId(12)).unwrap();
        log.append(&selection, &catalog).unwrap();

        selection.clear();
        log.append(&selection, &catalog).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches("---- ").count(), 2);
        assert!(contents.contains(" - 12) Chest pain\n"));
        assert!(contents.ends_with("(no symptoms selected)\n\n"));
    }

    #[test]
    fn test_append_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let log = HistoryLog::new(dir.path());
        let catalog = SymptomCatalog::load_embedded().unwrap();

        let err = log.append(&Selection::new(), &catalog).unwrap_err();
        assert!(matches!(err, HistoryError::Open { .. }));
    }
}
