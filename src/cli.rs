//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yamlgate",
    version,
    about = "YAML syntax gate for CI",
    long_about = "yamlgate — check that a list of YAML files parses, report the first syntax error per file, and exit non-zero on any failure.\n\nConfiguration precedence: CLI > yamlgate.toml > defaults.",
    after_help = "Examples:\n  yamlgate check .github/workflows/build.yml .github/workflows/android-build.yml\n  yamlgate check --locale zh --icons\n  yamlgate check --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current yamlgate version.")]
    Version,
    /// Validate YAML syntax
    #[command(
        about = "Validate YAML syntax",
        long_about = "Parse each file as YAML and report pass/fail with the first error location. Exits 1 if any file fails, 2 on configuration errors.",
        after_help = "Examples:\n  yamlgate check config.yml\n  yamlgate check --repo-root . --output json"
    )]
    Check {
        #[arg(help = "Files to validate (default: `files` from yamlgate.toml)")]
        paths: Vec<PathBuf>,
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Message language: en|zh (default: en)")]
        locale: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "no_icons", help = "Prefix status lines with ✅/❌")]
        icons: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Use PASS/FAIL/ERROR labels even if the config enables icons")]
        no_icons: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

/// Tri-state icons flag: `Some` only when set on the command line.
pub fn icons_override(icons: bool, no_icons: bool) -> Option<bool> {
    match (icons, no_icons) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
