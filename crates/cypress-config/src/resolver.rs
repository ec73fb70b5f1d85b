//! Configuration resolution with layered precedence
//!
//! The `ConfigResolver` merges four layers, later layers replacing matching
//! keys of earlier ones:
//!
//! 1. Schema defaults
//! 2. The configuration file (`cypress.json` or `--config-file`/`-C`)
//! 3. `cypress_`-prefixed environment variables
//! 4. Every `--config`/`-c` argument, the chronologically last one winning
//!
//! The resolved environment is attached as `env`.

use std::path::PathBuf;

use serde_json::Value;

use crate::argv;
use crate::case::to_camel_case;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::environment::{Environment, resolve_environment};
use crate::keyvalue::parse_key_value_list;
use crate::options::{RawOptions, resolve_configuration_path, resolve_project_path};
use crate::schema::modern::DISCRIMINANT_KEY;
use crate::schema::{ConfigSchema, CypressConfiguration, LegacyConfiguration, ModernConfiguration};
use crate::Result;

static TRACING_SINK: TracingSink = TracingSink;

/// Raw `(key, value)` pairs collected from each source, not yet validated.
#[derive(Debug, Default)]
struct RawLayers {
    file: Vec<(String, Value)>,
    env: Vec<(String, Value)>,
    cli: Vec<(String, Value)>,
}

impl RawLayers {
    fn keys(&self) -> impl Iterator<Item = &str> {
        self.file
            .iter()
            .chain(&self.env)
            .chain(&self.cli)
            .map(|(key, _)| key.as_str())
    }

    fn validate<S: ConfigSchema>(entries: &[(String, Value)]) -> Result<Vec<S::Entry>> {
        let mut layer = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match S::validate_entry(key, value)? {
                Some(entry) => layer.push(entry),
                None => tracing::trace!(
                    key = key.as_str(),
                    known = ?S::KEYS,
                    "Ignoring unrecognised configuration key"
                ),
            }
        }
        Ok(layer)
    }
}

/// Resolves a Cypress configuration from a [`RawOptions`] snapshot.
///
/// Nothing is cached; every `resolve*` call re-reads the configuration and
/// environment files.
pub struct ConfigResolver<'a> {
    options: &'a RawOptions,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ConfigResolver<'a> {
    /// A resolver reporting diagnostics through `tracing`.
    pub fn new(options: &'a RawOptions) -> Self {
        Self {
            options,
            sink: &TRACING_SINK,
        }
    }

    /// Report diagnostics to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// The effective project root.
    pub fn project_path(&self) -> PathBuf {
        resolve_project_path(self.options, self.sink)
    }

    /// The effective configuration file path.
    pub fn config_file_path(&self) -> PathBuf {
        resolve_configuration_path(self.options, &self.project_path(), self.sink)
    }

    /// Resolve the configuration, choosing the schema from the sources.
    ///
    /// The modern schema is used when any source names `specPattern`,
    /// otherwise the legacy schema.
    pub fn resolve(&self) -> Result<CypressConfiguration> {
        let (project_path, layers) = self.collect()?;

        if layers.keys().any(|key| key == DISCRIMINANT_KEY) {
            tracing::debug!("Found {}, resolving modern configuration", DISCRIMINANT_KEY);
            self.finish::<ModernConfiguration>(project_path, &layers)
                .map(CypressConfiguration::from)
        } else {
            self.finish::<LegacyConfiguration>(project_path, &layers)
                .map(CypressConfiguration::from)
        }
    }

    /// Resolve the configuration in the legacy schema.
    pub fn resolve_legacy(&self) -> Result<LegacyConfiguration> {
        let (project_path, layers) = self.collect()?;
        self.finish(project_path, &layers)
    }

    /// Resolve the configuration in the modern schema.
    pub fn resolve_modern(&self) -> Result<ModernConfiguration> {
        let (project_path, layers) = self.collect()?;
        self.finish(project_path, &layers)
    }

    /// Resolve the free-form environment map on its own.
    pub fn resolve_environment(&self) -> Result<Environment> {
        resolve_environment(self.options, self.sink)
    }

    fn collect(&self) -> Result<(PathBuf, RawLayers)> {
        tracing::debug!(options = ?self.options, "Attempting to resolve Cypress configuration");

        let project_path = self.project_path();
        let config_path = resolve_configuration_path(self.options, &project_path, self.sink);

        let file = match cypress_fs::read_json_object(&config_path)? {
            Some(config) => {
                tracing::debug!(?config_path, "Loading configuration file");
                config.into_iter().collect()
            }
            None => Vec::new(),
        };

        let env = self
            .options
            .prefixed_env()
            .map(|(name, value)| {
                let key = if name.contains('_') {
                    to_camel_case(name)
                } else {
                    name.to_string()
                };
                (key, Value::String(value.to_string()))
            })
            .collect();

        // Occurrences arrive last-first; reverse so the last one is applied last.
        let mut occurrences: Vec<&str> = argv::CONFIG
            .values(&self.options.argv, self.sink)
            .collect();
        occurrences.reverse();
        let cli = occurrences
            .into_iter()
            .flat_map(parse_key_value_list)
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        Ok((project_path, RawLayers { file, env, cli }))
    }

    fn finish<S: ConfigSchema + std::fmt::Debug>(
        &self,
        project_path: PathBuf,
        layers: &RawLayers,
    ) -> Result<S> {
        let file = RawLayers::validate::<S>(&layers.file)?;
        let env = RawLayers::validate::<S>(&layers.env)?;
        let cli = RawLayers::validate::<S>(&layers.cli)?;

        let mut configuration = S::defaults(project_path);
        for entry in file.into_iter().chain(env).chain(cli) {
            configuration.apply(entry);
        }
        configuration.set_environment(self.resolve_environment()?);

        tracing::debug!(?configuration, "Resolved configuration");
        Ok(configuration)
    }
}
