//! Layered Cypress configuration resolution
//!
//! Given command-line arguments, environment variables and the JSON files on
//! disk, this crate produces:
//!
//! - a fully resolved [`CypressConfiguration`] in either the legacy or the
//!   modern schema,
//! - the free-form [`Environment`] map,
//! - the list of test files the configuration selects.
//!
//! # Precedence
//!
//! ```text
//! defaults < configuration file < cypress_* variables < --config / -c
//! ```
//!
//! The environment map adds `cypress.env.json` below the configuration file's
//! `env` object and honours only the last `--env` / `-e` argument.
//!
//! # Example
//!
//! ```no_run
//! use cypress_config::{RawOptions, get_configuration, get_test_files};
//!
//! let options = RawOptions::new("/path/to/project")
//!     .with_argv(["--config", "integrationFolder=features"]);
//! let configuration = get_configuration(&options)?;
//! let files = get_test_files(&configuration)?;
//! # Ok::<(), cypress_config::Error>(())
//! ```

pub mod argv;
pub mod case;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod keyvalue;
pub mod options;
pub mod resolver;
pub mod schema;
pub mod test_files;

use std::path::PathBuf;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use environment::{Environment, resolve_environment};
pub use error::{Error, Result};
pub use options::RawOptions;
pub use resolver::ConfigResolver;
pub use schema::{
    CypressConfiguration, FolderSetting, LegacyConfiguration, ModernConfiguration, Patterns,
};
pub use test_files::{PatternSet, resolve_test_files};

/// Resolve the configuration for `options`, logging diagnostics via `tracing`.
pub fn get_configuration(options: &RawOptions) -> Result<CypressConfiguration> {
    ConfigResolver::new(options).resolve()
}

/// Resolve the environment map for `options`, logging diagnostics via `tracing`.
pub fn get_environment(options: &RawOptions) -> Result<Environment> {
    ConfigResolver::new(options).resolve_environment()
}

/// Expand the test file patterns of `configuration` into absolute paths.
pub fn get_test_files(configuration: &CypressConfiguration) -> Result<Vec<PathBuf>> {
    resolve_test_files(configuration)
}
