//! Output rendering for validation reports.
//!
//! Supports `human` (default) and `json` outputs. The human form is one
//! status line per file with an indented location/details block on failure;
//! the JSON form includes per-file fields and a top-level summary.

use crate::config::OutputMode;
use crate::locale::{Locale, Messages, Status};
use crate::models::{ValidationOutcome, ValidationReport};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Human rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub locale: Locale,
    pub icons: bool,
    pub color: bool,
}

fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && std::env::var_os("NO_COLOR").is_none()
}

/// Print the report in the requested format.
///
/// Paths are shown relative to `base` when possible.
pub fn print_report(
    report: &ValidationReport,
    output: OutputMode,
    locale: Locale,
    icons: bool,
    base: &Path,
) {
    match output {
        OutputMode::Json => match serde_json::to_string_pretty(&compose_report_json(report, base))
        {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        OutputMode::Human => {
            let style = Style {
                locale,
                icons,
                color: use_colors(output),
            };
            for line in render_human(report, style, base) {
                println!("{}", line);
            }
        }
    }
}

/// Render human lines (pure) for testing purposes.
pub fn render_human(report: &ValidationReport, style: Style, base: &Path) -> Vec<String> {
    let msgs = Messages::new(style.locale);
    let mut lines = Vec::new();
    for entry in report.entries() {
        let shown = display_path(&entry.path, base);
        let status = match &entry.outcome {
            ValidationOutcome::Valid => Status::Pass,
            ValidationOutcome::SyntaxError { .. } => Status::Fail,
            ValidationOutcome::IoError { .. } => Status::Unreadable,
        };
        let marker = msgs.marker(status, style.icons);
        let marker = if style.color && !style.icons {
            match status {
                Status::Pass => marker.green().bold().to_string(),
                Status::Fail | Status::Unreadable => marker.red().bold().to_string(),
            }
        } else {
            marker.to_string()
        };
        let file = if style.color {
            shown.bold().to_string()
        } else {
            shown
        };
        lines.push(format!("{} {} {}", marker, file, msgs.headline(status)));
        match &entry.outcome {
            ValidationOutcome::Valid => {}
            ValidationOutcome::SyntaxError {
                line,
                column,
                message,
            } => {
                lines.push(format!("  {}", msgs.position(*line, *column)));
                lines.push(format!("  {}", msgs.details(message)));
            }
            ValidationOutcome::IoError { message } => {
                // The status line already names the file.
                let prefix = format!("{}: ", entry.path.to_string_lossy());
                let cause = message.strip_prefix(&prefix).unwrap_or(message);
                lines.push(format!("  {}", msgs.details(cause)));
            }
        }
    }
    let s = report.summary();
    let summary = msgs.summary(s.valid, s.failed, s.files);
    if style.color {
        lines.push(summary.bold().to_string());
    } else {
        lines.push(summary);
    }
    lines
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &ValidationReport, base: &Path) -> JsonVal {
    let items: Vec<JsonVal> = report
        .entries()
        .iter()
        .map(|e| {
            let mut item = json!({ "path": display_path(&e.path, base) });
            if let (Some(obj), Ok(JsonVal::Object(outcome))) =
                (item.as_object_mut(), serde_json::to_value(&e.outcome))
            {
                obj.extend(outcome);
            }
            item
        })
        .collect();
    let s = report.summary();
    let summary = json!({
        "valid": s.valid,
        "failed": s.failed,
        "files": s.files,
    });
    json!({"results": items, "summary": summary})
}

/// Path relative to `base` when both are comparable, otherwise as given.
pub fn display_path(path: &Path, base: &Path) -> String {
    match pathdiff::diff_paths(path, base) {
        Some(rel) if path.is_absolute() && !rel.starts_with("..") => {
            rel.to_string_lossy().to_string()
        }
        _ => path.to_string_lossy().to_string(),
    }
}
