//! Shared data models for validation outcomes and reports.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Result of validating a single file. Exactly one per input path.
pub enum ValidationOutcome {
    Valid,
    /// First grammar violation in the file; `line` and `column` are 1-based.
    SyntaxError {
        line: u64,
        column: u64,
        message: String,
    },
    /// The file could not be opened, read, or decoded as UTF-8.
    IoError { message: String },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

#[derive(Debug, Clone, Serialize)]
/// One report line: the path as given by the caller and its outcome.
pub struct Entry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub valid: usize,
    pub failed: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Ordered per-file outcomes of one run, in input order.
///
/// Built once by `validate::validate_paths` and only read afterwards.
pub struct ValidationReport {
    entries: Vec<Entry>,
}

impl ValidationReport {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries whose outcome is anything but `Valid`.
    pub fn failures(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.outcome.is_valid())
    }

    /// True iff every file validated. An empty report counts as valid.
    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_valid())
    }

    pub fn summary(&self) -> Summary {
        let valid = self.entries.iter().filter(|e| e.outcome.is_valid()).count();
        Summary {
            valid,
            failed: self.entries.len() - valid,
            files: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, outcome: ValidationOutcome) -> Entry {
        Entry {
            path: PathBuf::from(path),
            outcome,
        }
    }

    #[test]
    fn test_aggregate_flips_on_single_failure() {
        let report = ValidationReport::new(vec![
            entry("a.yml", ValidationOutcome::Valid),
            entry(
                "b.yml",
                ValidationOutcome::SyntaxError {
                    line: 3,
                    column: 7,
                    message: "bad".into(),
                },
            ),
            entry("c.yml", ValidationOutcome::Valid),
        ]);
        assert!(!report.all_valid());
        let failed: Vec<_> = report.failures().map(|e| e.path.clone()).collect();
        assert_eq!(failed, vec![PathBuf::from("b.yml")]);
        assert_eq!(
            report.summary(),
            Summary {
                valid: 2,
                failed: 1,
                files: 3
            }
        );
    }

    #[test]
    fn test_io_error_counts_as_failure() {
        let report = ValidationReport::new(vec![entry(
            "missing.yml",
            ValidationOutcome::IoError {
                message: "missing.yml: not found".into(),
            },
        )]);
        assert!(!report.all_valid());
        assert_eq!(report.summary().failed, 1);
    }

    #[test]
    fn test_entry_serializes_with_status_tag() {
        let e = entry(
            "x.yml",
            ValidationOutcome::SyntaxError {
                line: 2,
                column: 5,
                message: "oops".into(),
            },
        );
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["path"], "x.yml");
        assert_eq!(v["status"], "syntax_error");
        assert_eq!(v["line"], 2);
        assert_eq!(v["column"], 5);
        let ok = serde_json::to_value(entry("y.yml", ValidationOutcome::Valid)).unwrap();
        assert_eq!(ok["status"], "valid");
        assert!(ok.get("line").is_none());
    }
}
