//! Environment resolution
//!
//! Builds the free-form `env` map exposed to tests. Layers, lowest precedence
//! first:
//!
//! 1. `cypress.env.json` in the project root
//! 2. the `env` object of the configuration file
//! 3. `cypress_`-prefixed environment variables, names used verbatim
//! 4. the most recent `--env`/`-e` argument
//!
//! Each layer replaces matching keys of the layers below it.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::argv;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::keyvalue::parse_key_value_list;
use crate::options::{
    ENVIRONMENT_FILE, RawOptions, resolve_configuration_path, resolve_project_path,
};
use crate::{Error, Result};

/// A resolved environment: arbitrary keys mapped to JSON values.
///
/// Values from environment variables and the command line are always strings;
/// values from files keep whatever JSON type they were written with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment(Map<String, Value>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value of `key` when it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow-assign `layer` on top of this environment.
    pub fn merge<I>(&mut self, layer: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        for (key, value) in layer {
            self.0.insert(key, value);
        }
    }
}

impl From<Map<String, Value>> for Environment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Resolve the environment for `options`.
///
/// Both files are read afresh on every call. A file that is not valid JSON, or
/// whose top level is not an object, aborts resolution.
pub fn resolve_environment(options: &RawOptions, sink: &dyn DiagnosticSink) -> Result<Environment> {
    tracing::debug!(?options, "Attempting to resolve Cypress environment");

    let project_path = resolve_project_path(options, sink);
    let mut environment = Environment::new();

    // Layer 1 - cypress.env.json
    let env_file_path = project_path.join(ENVIRONMENT_FILE);
    if let Some(env_file) = cypress_fs::read_json_object(&env_file_path)? {
        tracing::debug!(?env_file_path, "Loading environment file (layer 1)");
        environment.merge(env_file);
    }

    // Layer 2 - env object of the configuration file
    let config_path = resolve_configuration_path(options, &project_path, sink);
    environment.merge(configuration_file_env(&config_path)?);

    // Layer 3 - process environment, names verbatim
    environment.merge(
        options
            .prefixed_env()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string()))),
    );

    // Layer 4 - most recent --env/-e only
    environment.merge(cli_env(options, sink));

    tracing::debug!(?environment, "Resolved environment");
    Ok(environment)
}

fn configuration_file_env(config_path: &Path) -> Result<Map<String, Value>> {
    let Some(mut config) = cypress_fs::read_json_object(config_path)? else {
        return Ok(Map::new());
    };

    match config.remove("env") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Map::new()),
        Some(Value::Object(env)) => {
            tracing::debug!(?config_path, "Loading configuration file env (layer 2)");
            Ok(env)
        }
        Some(other) => Err(Error::invalid_value("env", "an object", &other)),
    }
}

fn cli_env(options: &RawOptions, sink: &dyn DiagnosticSink) -> Vec<(String, Value)> {
    let occurrences: Vec<&str> = argv::ENV.values(&options.argv, sink).collect();

    if occurrences.len() > 1 {
        sink.emit(Diagnostic::RepeatedEnvFlag {
            occurrences: occurrences.len(),
        });
    }

    occurrences
        .first()
        .map(|argument| {
            parse_key_value_list(argument)
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect()
        })
        .unwrap_or_default()
}
