//! Raw resolution inputs and project/file path resolution

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cypress_fs::ensure_is_absolute;
use serde::Serialize;

use crate::argv;
use crate::diagnostics::DiagnosticSink;

/// Configuration file read when `--config-file`/`-C` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cypress.json";

/// Environment overrides file, always read from the project root.
pub const ENVIRONMENT_FILE: &str = "cypress.env.json";

/// Case-insensitive prefix selecting environment variables.
pub const ENV_PREFIX: &str = "cypress_";

/// A snapshot of everything a resolution call reads besides files.
///
/// Environment variables are kept sorted by name so that repeated calls with
/// the same inputs resolve identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawOptions {
    pub argv: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub cwd: PathBuf,
}

impl RawOptions {
    /// Options with no arguments and an empty environment.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            argv: Vec::new(),
            env: BTreeMap::new(),
            cwd: cwd.into(),
        }
    }

    pub fn with_argv<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv = argv.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env<I, K, V>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Environment variables carrying the `cypress_` prefix, with the prefix
    /// stripped. Names consisting of the prefix alone are skipped.
    pub fn prefixed_env(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env
            .iter()
            .filter_map(|(name, value)| Some((strip_env_prefix(name)?, value.as_str())))
    }
}

/// `CYPRESS_foo` / `cypress_foo` to `foo`.
pub fn strip_env_prefix(name: &str) -> Option<&str> {
    let prefix = name.get(..ENV_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(ENV_PREFIX) {
        return None;
    }
    let rest = &name[ENV_PREFIX.len()..];
    (!rest.is_empty()).then_some(rest)
}

/// The project root: `--project`/`-P` resolved against `cwd`, or `cwd`.
pub fn resolve_project_path(options: &RawOptions, sink: &dyn DiagnosticSink) -> PathBuf {
    match argv::PROJECT.find_first_value(&options.argv, sink) {
        Some(custom) => ensure_is_absolute(&options.cwd, custom),
        None => options.cwd.clone(),
    }
}

/// The configuration file as given on the command line, or the default name.
pub fn resolve_configuration_file<'a>(
    options: &'a RawOptions,
    sink: &'a dyn DiagnosticSink,
) -> &'a str {
    argv::CONFIG_FILE
        .find_first_value(&options.argv, sink)
        .unwrap_or(DEFAULT_CONFIG_FILE)
}

/// The configuration file resolved against the project root.
pub fn resolve_configuration_path(
    options: &RawOptions,
    project_path: &Path,
    sink: &dyn DiagnosticSink,
) -> PathBuf {
    ensure_is_absolute(project_path, resolve_configuration_file(options, sink))
}
