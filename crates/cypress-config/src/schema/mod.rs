//! Configuration schemas and per-key validation
//!
//! Two mutually incompatible schemas exist: the [`legacy`] shape with an
//! integration folder and test file globs, and the [`modern`] shape built
//! around spec patterns. A resolution call produces exactly one of them.
//!
//! Every known key has a predicate describing the value shapes it accepts.
//! Unknown keys are dropped silently; a known key holding a value of the
//! wrong shape aborts resolution with [`Error::InvalidKeyValue`].

pub mod legacy;
pub mod modern;

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::environment::Environment;
use crate::{Error, Result};

pub use legacy::{LegacyConfiguration, LegacyEntry};
pub use modern::{ModernConfiguration, ModernEntry};

/// A configuration shape the layered resolver can build.
pub trait ConfigSchema: Sized {
    /// One validated `key = value` assignment.
    type Entry;

    /// Keys this schema recognises.
    const KEYS: &'static [&'static str];

    /// The defaults layer for a project rooted at `project_root`.
    fn defaults(project_root: PathBuf) -> Self;

    /// Validate one raw entry. Unknown keys yield `Ok(None)`.
    fn validate_entry(key: &str, value: &Value) -> Result<Option<Self::Entry>>;

    /// Overwrite the field named by `entry`.
    fn apply(&mut self, entry: Self::Entry);

    fn set_environment(&mut self, env: Environment);
}

/// A fully resolved configuration in one of the two schemas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CypressConfiguration {
    Legacy(LegacyConfiguration),
    Modern(ModernConfiguration),
}

impl CypressConfiguration {
    pub fn project_root(&self) -> &Path {
        match self {
            Self::Legacy(config) => &config.project_root,
            Self::Modern(config) => &config.project_root,
        }
    }

    pub fn env(&self) -> &Environment {
        match self {
            Self::Legacy(config) => &config.env,
            Self::Modern(config) => &config.env,
        }
    }

    pub fn is_modern(&self) -> bool {
        matches!(self, Self::Modern(_))
    }
}

impl From<LegacyConfiguration> for CypressConfiguration {
    fn from(config: LegacyConfiguration) -> Self {
        Self::Legacy(config)
    }
}

impl From<ModernConfiguration> for CypressConfiguration {
    fn from(config: ModernConfiguration) -> Self {
        Self::Modern(config)
    }
}

/// A path setting that may be switched off with `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSetting {
    Path(String),
    Disabled,
}

impl FolderSetting {
    /// The configured path, unless disabled or empty.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) if !path.is_empty() => Some(path),
            _ => None,
        }
    }
}

impl From<&str> for FolderSetting {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl Serialize for FolderSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Path(path) => serializer.serialize_str(path),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// One glob pattern or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    /// The patterns as a list, wrapping a single pattern.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::One(pattern) => vec![pattern.clone()],
            Self::Many(patterns) => patterns.clone(),
        }
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self::One(pattern.to_string())
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Self::Many(patterns)
    }
}

pub(crate) fn expect_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::invalid_value(key, "a string", other)),
    }
}

pub(crate) fn expect_string_or_false(key: &str, value: &Value) -> Result<FolderSetting> {
    match value {
        Value::String(s) => Ok(FolderSetting::Path(s.clone())),
        Value::Bool(false) => Ok(FolderSetting::Disabled),
        other => Err(Error::invalid_value(key, "a string or false", other)),
    }
}

pub(crate) fn expect_patterns(key: &str, value: &Value) -> Result<Patterns> {
    let invalid = || Error::invalid_value(key, "a string or array of strings", value);
    match value {
        Value::String(s) => Ok(Patterns::One(s.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()
            .map(Patterns::Many),
        _ => Err(invalid()),
    }
}
