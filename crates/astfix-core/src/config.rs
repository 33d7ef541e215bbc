//! Configuration types for astfix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configured level of a single rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Violations are reported as errors.
    Error,
    /// Violations are reported as warnings.
    #[serde(alias = "warning")]
    Warn,
    /// The rule does not run.
    #[default]
    Off,
}

impl RuleLevel {
    /// Returns true unless the rule is turned off.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }

    /// Maps the level to a violation severity, `None` when off.
    #[must_use]
    pub fn severity(self) -> Option<crate::Severity> {
        match self {
            Self::Error => Some(crate::Severity::Error),
            Self::Warn => Some(crate::Severity::Warning),
            Self::Off => None,
        }
    }
}

impl std::fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// How much the tree algorithms report about their traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Rule findings and fixes only.
    #[default]
    Normal,
    /// Additionally one line per visited node.
    Debug,
}

impl Verbosity {
    /// Returns true when per-node debug lines should be emitted.
    #[must_use]
    pub fn is_debug(self) -> bool {
        self == Self::Debug
    }
}

/// Top-level configuration for astfix.
///
/// ```toml
/// verbosity = "normal"
///
/// [rules]
/// call-super-in-constructor = "error"
/// use-let-never-reassigned = "warn"
/// double-quotes = "warn"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Traversal verbosity.
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Level per rule name. Rules that are not listed are off.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleLevel>,
}

impl Config {
    /// Creates a new default configuration with every rule off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level of a rule.
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, level: RuleLevel) -> Self {
        self.rules.insert(name.into(), level);
        self
    }

    /// Sets the verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses configuration from JSON.
    ///
    /// Accepts both the nested form (`{"rules": {...}}`) and a flat object
    /// mapping rule names straight to levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;

        let nested = value
            .as_object()
            .is_some_and(|o| o.contains_key("rules") || o.contains_key("verbosity"));
        if nested {
            return serde_json::from_value(value).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            });
        }

        let rules: BTreeMap<String, RuleLevel> =
            serde_json::from_value(value).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        Ok(Self {
            verbosity: Verbosity::default(),
            rules,
        })
    }

    /// Returns the configured level of a rule, `Off` when not configured.
    #[must_use]
    pub fn level(&self, rule_name: &str) -> RuleLevel {
        self.rules.get(rule_name).copied().unwrap_or_default()
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.level(rule_name).is_enabled()
    }

    /// Rejects rule names that are not in `known`.
    ///
    /// # Errors
    ///
    /// Returns the first unknown rule name.
    pub fn validate(&self, known: &[&str]) -> Result<(), ConfigError> {
        match self.rules.keys().find(|name| !known.contains(&name.as_str())) {
            Some(name) => Err(ConfigError::UnknownRule { name: name.clone() }),
            None => Ok(()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule name that no registered rule answers to.
    #[error("Unknown rule in config: {name}")]
    UnknownRule {
        /// The offending rule name.
        name: String,
    },
}
