//! Subcommand implementations.

pub mod ast;
pub mod format;
pub mod generate;
pub mod init;
pub mod lint;
pub mod list_rules;
pub mod output;

use anyhow::{bail, Context, Result};
use astfix_core::{Config, Verbosity};
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigSource};

/// Flags shared by every subcommand.
#[derive(Debug, Default)]
pub struct Settings {
    /// `--debug` was given.
    pub debug: bool,
    /// `--config` path, if any.
    pub config: Option<PathBuf>,
}

impl Settings {
    /// Verbosity forced by `--debug`, otherwise `fallback`.
    pub fn verbosity(&self, fallback: Verbosity) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else {
            fallback
        }
    }
}

/// Resolves and loads the configuration for `project_dir`.
///
/// A missing configuration is an error, since every unconfigured rule is off.
pub fn load_config(project_dir: &Path, settings: &Settings) -> Result<Config> {
    let source = config_resolver::resolve(project_dir, settings.config.as_deref());
    let path = match &source {
        ConfigSource::Missing => {
            bail!("No configuration found. Run `astfix init` to create astfix.toml.")
        }
        other => other.path().context("resolved config has no path")?,
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    let mut config =
        Config::from_file(path).with_context(|| format!("Failed to load {}", path.display()))?;
    config
        .validate(&astfix_rules::rule_names())
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    config.verbosity = settings.verbosity(config.verbosity);
    Ok(config)
}

/// Directory a path lives in: the path itself for directories.
pub fn project_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes `text` to `out`, or prints it under `heading`.
pub fn emit(text: &str, out: Option<&Path>, heading: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            println!("{heading}");
            print!("{text}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use astfix_core::RuleLevel;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            debug: false,
            config: Some(dir.path().join("absent.toml")),
        };
        assert!(load_config(dir.path(), &settings).is_err());
    }

    #[test]
    fn debug_flag_overrides_file_verbosity() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("astfix.toml"),
            "[rules]\ndouble-quotes = \"warn\"\n",
        )
        .unwrap();

        let config = load_config(dir.path(), &Settings::default()).unwrap();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.level("double-quotes"), RuleLevel::Warn);

        let settings = Settings {
            debug: true,
            config: None,
        };
        let config = load_config(dir.path(), &settings).unwrap();
        assert!(config.verbosity.is_debug());
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{ "no-such-rule": "warn" }"#).unwrap();
        let err = load_config(dir.path(), &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no-such-rule"));
    }

    #[test]
    fn project_dir_of_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.ts");
        std::fs::write(&file, "").unwrap();
        assert_eq!(project_dir(&file), dir.path());
        assert_eq!(project_dir(dir.path()), dir.path());
        assert_eq!(project_dir(Path::new("a.ts")), PathBuf::from("."));
    }
}
