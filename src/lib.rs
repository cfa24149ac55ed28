//! yamlgate core library.
//!
//! This crate exposes programmatic APIs for checking that files parse as
//! YAML and for rendering the per-file outcomes.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `validate`: The `SyntaxValidator` trait and its `serde_yaml` backend.
//! - `models`: Outcome, report, and summary types.
//! - `locale`: English/Chinese message catalogue.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod locale;
pub mod models;
pub mod output;
pub mod utils;
pub mod validate;

pub use models::{ValidationOutcome, ValidationReport};
pub use validate::{validate_paths, SyntaxValidator, YamlSyntax};
