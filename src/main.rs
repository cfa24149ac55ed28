//! yamlgate CLI binary entry point.
//! Resolves configuration, validates files, and prints results.

use clap::Parser;
use std::path::PathBuf;
use yamlgate::cli::{icons_override, Cli, Commands};
use yamlgate::config::{self, OutputMode, PathSource};
use yamlgate::{output, utils, validate_paths, YamlSyntax};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            paths,
            repo_root,
            locale,
            icons,
            no_icons,
            output: output_mode,
        } => {
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                &paths,
                locale.as_deref(),
                icons_override(icons, no_icons),
                output_mode.as_deref(),
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            if eff.path_source == PathSource::None {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "No files to validate. Pass paths or set `files` in yamlgate.toml."
                );
                std::process::exit(2);
            }
            if eff.output == OutputMode::Human {
                match (&eff.config_path, eff.path_source) {
                    (None, _) => eprintln!(
                        "{} {}",
                        utils::note_prefix(),
                        "No yamlgate.toml found; using defaults."
                    ),
                    (Some(cfg), PathSource::Config) => {
                        let listed: Vec<String> = eff
                            .paths
                            .iter()
                            .map(|p| output::display_path(p, &eff.repo_root))
                            .collect();
                        eprintln!(
                            "{} Using files from {}: [{}]",
                            utils::info_prefix(),
                            cfg.to_string_lossy(),
                            listed.join(", ")
                        );
                    }
                    _ => {}
                }
                for pat in &eff.unmatched_patterns {
                    eprintln!("{} Pattern matched no files: {}", utils::note_prefix(), pat);
                }
            }

            let report = validate_paths(&YamlSyntax, &eff.paths);
            let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            output::print_report(&report, eff.output, eff.locale, eff.icons, &base);
            if !report.all_valid() {
                std::process::exit(1);
            }
        }
    }
}
