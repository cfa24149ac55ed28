//! YAML syntax validation.
//!
//! `SyntaxValidator` maps one file to one `ValidationOutcome`; the default
//! implementation `YamlSyntax` is backed by `serde_yaml`. Documents are
//! walked with `IgnoredAny`, so the check is pure syntax recognition: tags
//! stay inert, no values are built, and duplicate keys or deep nesting are
//! not rejected.
//!
//! A file holds at most one document, like a safe single-document load.
//! A second document is reported at its `---` marker.
//!
//! Validation is sequential and stateless: every call re-reads the file and
//! reports only the first violation found.

use crate::models::{Entry, ValidationOutcome, ValidationReport};
use regex::Regex;
use serde::de::{Deserializer as _, IgnoredAny, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const SINGLE_DOCUMENT: &str = "a single document in the stream";

/// Maps text (or a file) to a single validation outcome.
pub trait SyntaxValidator {
    /// Check in-memory text. Never touches the filesystem.
    fn check_str(&self, text: &str) -> ValidationOutcome;

    /// Read `path` and check its content.
    ///
    /// Missing, unreadable, or non-UTF-8 files yield `IoError` naming the
    /// path. The file handle does not outlive this call.
    fn validate(&self, path: &Path) -> ValidationOutcome {
        match fs::read_to_string(path) {
            Ok(text) => self.check_str(&text),
            Err(e) => ValidationOutcome::IoError {
                message: format!("{}: {}", path.to_string_lossy(), e),
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
/// YAML 1.1/1.2 syntax checker for single-document files.
pub struct YamlSyntax;

impl SyntaxValidator for YamlSyntax {
    fn check_str(&self, text: &str) -> ValidationOutcome {
        let mut documents = serde_yaml::Deserializer::from_str(text);
        if let Some(first) = documents.next() {
            if let Err(err) = IgnoredAny::deserialize(first) {
                return syntax_error(&err);
            }
        }
        match documents.next() {
            None => ValidationOutcome::Valid,
            Some(extra) => match extra.deserialize_any(ExtraDocument) {
                Err(err) if !err.to_string().contains(SINGLE_DOCUMENT) => syntax_error(&err),
                result => extra_document(text, result.err().as_ref()),
            },
        }
    }
}

/// Rejects whatever the second document holds; serde_yaml stamps the
/// rejection with the mark of the document's first node.
struct ExtraDocument;

impl<'de> Visitor<'de> for ExtraDocument {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(SINGLE_DOCUMENT)
    }
}

/// Validate each path in order. One entry per path; never stops early.
pub fn validate_paths<V>(validator: &V, paths: &[PathBuf]) -> ValidationReport
where
    V: SyntaxValidator + ?Sized,
{
    let entries = paths
        .iter()
        .map(|p| Entry {
            path: p.clone(),
            outcome: validator.validate(p),
        })
        .collect();
    ValidationReport::new(entries)
}

fn syntax_error(err: &serde_yaml::Error) -> ValidationOutcome {
    // Errors raised without a mark point at the start.
    let (line, column) = err
        .location()
        .map(|loc| (loc.line().max(1) as u64, loc.column().max(1) as u64))
        .unwrap_or((1, 1));
    ValidationOutcome::SyntaxError {
        line,
        column,
        message: strip_marks(&err.to_string()),
    }
}

/// Second document found: locate its `---` marker, the last one at or
/// before the line where its content starts.
fn extra_document(text: &str, err: Option<&serde_yaml::Error>) -> ValidationOutcome {
    let content = err.and_then(|e| e.location());
    let content_line = content
        .as_ref()
        .map(|loc| loc.line().max(1))
        .unwrap_or_else(|| text.lines().count().max(1));
    let marker = text
        .lines()
        .take(content_line)
        .enumerate()
        .filter(|(_, l)| is_document_start(l))
        .last()
        .map(|(i, _)| (i as u64 + 1, 1));
    let (line, column) = marker.unwrap_or_else(|| match content {
        Some(loc) => (loc.line().max(1) as u64, loc.column().max(1) as u64),
        None => (content_line as u64, 1),
    });
    ValidationOutcome::SyntaxError {
        line,
        column,
        message: format!("expected {}, but found another document", SINGLE_DOCUMENT),
    }
}

fn is_document_start(line: &str) -> bool {
    match line.strip_prefix("---") {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '\t']),
        None => false,
    }
}

/// Drop the " at line N column M" fragments libyaml embeds in its messages;
/// the location travels in dedicated fields.
fn strip_marks(message: &str) -> String {
    static MARK: OnceLock<Regex> = OnceLock::new();
    let re = MARK.get_or_init(|| {
        Regex::new(r" at (?:line \d+ column \d+|position \d+)").expect("static regex")
    });
    let stripped = re.replace_all(message, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        message.trim().to_string()
    } else {
        trimmed.to_string()
    }
}
