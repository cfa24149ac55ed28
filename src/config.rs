//! Configuration discovery and effective settings resolution.
//!
//! yamlgate reads `yamlgate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `files`: none (paths must come from the CLI or the config file)
//! - `locale`: `en`
//! - `icons`: false
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::locale::Locale;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const CONFIG_FILES: [&str; 3] = ["yamlgate.toml", "yamlgate.yaml", "yamlgate.yml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid TOML: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{} is not valid YAML: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("{0}")]
    UnknownLocale(String),
    #[error("unknown output mode '{0}' (expected human|json)")]
    UnknownOutput(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Report rendering mode.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::UnknownOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `yamlgate.toml|yaml`.
pub struct GateConfig {
    /// Files to validate, relative to the repository root. Glob entries expand.
    #[serde(default)]
    pub files: Option<Vec<String>>,
    pub locale: Option<String>,
    pub icons: Option<bool>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the validated path list came from.
pub enum PathSource {
    Cli,
    Config,
    None,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
    pub path_source: PathSource,
    /// Config glob entries that matched nothing.
    pub unmatched_patterns: Vec<String>,
    pub locale: Locale,
    pub icons: bool,
    pub output: OutputMode,
}

/// Walk upward from `start` to detect the repository root.
///
/// `start` is canonicalized first so relative starts such as `.` can climb
/// past the current directory. Stops when a `yamlgate.toml|yaml|yml` or a
/// `.git` directory is found; falls back to `start` itself.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        if CONFIG_FILES.iter().any(|name| cur.join(name).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start,
        }
    }
}

/// Load `GateConfig` from `yamlgate.toml` or `yamlgate.yaml|yml` if present.
///
/// Returns the path that was read alongside the parsed config. A config that
/// exists but cannot be read or parsed is an error, not a silent default.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, GateConfig)>, ConfigError> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str::<GateConfig>(&s).map_err(|source| ConfigError::Toml {
                path: path.clone(),
                source,
            })?
        } else if s.trim().is_empty() {
            GateConfig::default()
        } else {
            serde_yaml::from_str::<GateConfig>(&s).map_err(|source| ConfigError::Yaml {
                path: path.clone(),
                source,
            })?
        };
        return Ok(Some((path, cfg)));
    }
    Ok(None)
}

/// Expand config `files` entries relative to `root`.
///
/// Literal entries are kept even when missing so they surface as I/O
/// failures. Glob entries contribute their sorted matches; empty globs are
/// returned in the second vector.
pub fn expand_files(
    root: &Path,
    entries: &[String],
) -> Result<(Vec<PathBuf>, Vec<String>), ConfigError> {
    let mut paths = Vec::new();
    let mut unmatched = Vec::new();
    for entry in entries {
        if !is_glob(entry) {
            paths.push(root.join(entry));
            continue;
        }
        let pattern = root.join(entry).to_string_lossy().to_string();
        let matches = glob::glob(&pattern).map_err(|source| ConfigError::Pattern {
            pattern: entry.clone(),
            source,
        })?;
        let mut found: Vec<PathBuf> = matches.filter_map(Result::ok).collect();
        found.sort();
        if found.is_empty() {
            unmatched.push(entry.clone());
        }
        paths.extend(found);
    }
    Ok((paths, unmatched))
}

fn is_glob(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_paths: &[PathBuf],
    cli_locale: Option<&str>,
    cli_icons: Option<bool>,
    cli_output: Option<&str>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, GateConfig::default()),
    };

    let locale = match cli_locale.or(cfg.locale.as_deref()) {
        Some(s) => Locale::from_str(s).map_err(ConfigError::UnknownLocale)?,
        None => Locale::default(),
    };
    let icons = cli_icons.or(cfg.icons).unwrap_or(false);
    let output = match cli_output.or(cfg.output.as_deref()) {
        Some(s) => OutputMode::from_str(s)?,
        None => OutputMode::default(),
    };

    let (paths, path_source, unmatched_patterns) = if !cli_paths.is_empty() {
        (cli_paths.to_vec(), PathSource::Cli, Vec::new())
    } else if let Some(entries) = cfg.files.as_ref() {
        let (paths, unmatched) = expand_files(&repo_root, entries)?;
        (paths, PathSource::Config, unmatched)
    } else {
        (Vec::new(), PathSource::None, Vec::new())
    };

    Ok(Effective {
        repo_root,
        config_path,
        paths,
        path_source,
        unmatched_patterns,
        locale,
        icons,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();
        let root = canonical.as_path();
        let mut f = fs::File::create(root.join("yamlgate.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
files = [".github/workflows/build.yml", ".github/workflows/android-build.yml"]
locale = "zh"
icons = true
output = "json"
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), &[], None, None, None).unwrap();
        assert_eq!(eff.locale, Locale::Zh);
        assert!(eff.icons);
        assert_eq!(eff.output, OutputMode::Json);
        assert_eq!(eff.path_source, PathSource::Config);
        assert_eq!(
            eff.paths,
            vec![
                root.join(".github/workflows/build.yml"),
                root.join(".github/workflows/android-build.yml"),
            ]
        );
        assert_eq!(eff.config_path, Some(root.join("yamlgate.toml")));
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();
        let root = canonical.as_path();
        fs::write(root.join("yamlgate.yaml"), "files:\n  - a.yml\n").unwrap();

        let eff = resolve_effective(root.to_str(), &[], None, None, None).unwrap();
        assert_eq!(eff.paths, vec![root.join("a.yml")]);
        assert_eq!(eff.locale, Locale::En);
        assert!(!eff.icons);
        assert_eq!(eff.output, OutputMode::Human);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("yamlgate.toml"),
            "files = [\"a.yml\"]\nlocale = \"zh\"\nicons = true\noutput = \"json\"\n",
        )
        .unwrap();

        let cli_paths = vec![PathBuf::from("other.yml")];
        let eff = resolve_effective(
            root.to_str(),
            &cli_paths,
            Some("en"),
            Some(false),
            Some("human"),
        )
        .unwrap();
        assert_eq!(eff.paths, cli_paths);
        assert_eq!(eff.path_source, PathSource::Cli);
        assert_eq!(eff.locale, Locale::En);
        assert!(!eff.icons);
        assert_eq!(eff.output, OutputMode::Human);
    }

    #[test]
    fn test_discovery_climbs_from_subdirectory() {
        let dir = tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();
        let root = canonical.as_path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join("yamlgate.toml"), "files = [\"a.yml\"]\n").unwrap();
        let sub = root.join("nested").join("deeper");
        fs::create_dir_all(&sub).unwrap();

        assert_eq!(detect_repo_root(&sub), root.to_path_buf());
        let eff = resolve_effective(sub.to_str(), &[], None, None, None).unwrap();
        assert_eq!(eff.repo_root, root.to_path_buf());
        assert_eq!(eff.config_path, Some(root.join("yamlgate.toml")));
        assert_eq!(eff.paths, vec![root.join("a.yml")]);
    }

    #[test]
    fn test_relative_start_is_canonicalized() {
        let resolved = detect_repo_root(Path::new("."));
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_no_config_and_no_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), &[], None, None, None).unwrap();
        assert!(eff.config_path.is_none());
        assert!(eff.paths.is_empty());
        assert_eq!(eff.path_source, PathSource::None);
    }

    #[test]
    fn test_glob_entries_expand_sorted_and_report_unmatched() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let wf = root.join("workflows");
        fs::create_dir_all(&wf).unwrap();
        fs::write(wf.join("b.yml"), "").unwrap();
        fs::write(wf.join("a.yml"), "").unwrap();

        let entries = vec![
            "workflows/*.yml".to_string(),
            "missing.yml".to_string(),
            "nothing/*.yaml".to_string(),
        ];
        let (paths, unmatched) = expand_files(root, &entries).unwrap();
        assert_eq!(
            paths,
            vec![wf.join("a.yml"), wf.join("b.yml"), root.join("missing.yml")]
        );
        assert_eq!(unmatched, vec!["nothing/*.yaml".to_string()]);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("yamlgate.toml"), "files = [unclosed").unwrap();
        let err = resolve_effective(dir.path().to_str(), &[], None, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_unknown_values_are_errors() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let root = dir.path().to_str();
        assert!(matches!(
            resolve_effective(root, &[], Some("fr"), None, None),
            Err(ConfigError::UnknownLocale(_))
        ));
        assert!(matches!(
            resolve_effective(root, &[], None, None, Some("xml")),
            Err(ConfigError::UnknownOutput(_))
        ));
    }
}
