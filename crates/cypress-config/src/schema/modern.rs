//! The 10+ configuration shape

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::{ConfigSchema, Patterns, expect_patterns, expect_string};
use crate::Result;
use crate::environment::Environment;

/// The key whose presence in any source selects this schema.
pub const DISCRIMINANT_KEY: &str = "specPattern";

/// Resolved configuration in the modern (spec pattern) shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModernConfiguration {
    pub project_root: PathBuf,
    pub spec_pattern: Patterns,
    pub exclude_spec_pattern: Patterns,
    pub env: Environment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModernEntry {
    ProjectRoot(String),
    SpecPattern(Patterns),
    ExcludeSpecPattern(Patterns),
}

impl ConfigSchema for ModernConfiguration {
    type Entry = ModernEntry;

    const KEYS: &'static [&'static str] = &["projectRoot", "specPattern", "excludeSpecPattern"];

    fn defaults(project_root: PathBuf) -> Self {
        Self {
            project_root,
            spec_pattern: Patterns::from("cypress/e2e/**/*.cy.{js,jsx,ts,tsx}"),
            exclude_spec_pattern: Patterns::from("*.hot-update.js"),
            env: Environment::default(),
        }
    }

    fn validate_entry(key: &str, value: &Value) -> Result<Option<ModernEntry>> {
        let entry = match key {
            "projectRoot" => ModernEntry::ProjectRoot(expect_string(key, value)?),
            "specPattern" => ModernEntry::SpecPattern(expect_patterns(key, value)?),
            "excludeSpecPattern" => ModernEntry::ExcludeSpecPattern(expect_patterns(key, value)?),
            _ => return Ok(None),
        };
        Ok(Some(entry))
    }

    fn apply(&mut self, entry: ModernEntry) {
        match entry {
            ModernEntry::ProjectRoot(root) => self.project_root = PathBuf::from(root),
            ModernEntry::SpecPattern(patterns) => self.spec_pattern = patterns,
            ModernEntry::ExcludeSpecPattern(patterns) => self.exclude_spec_pattern = patterns,
        }
    }

    fn set_environment(&mut self, env: Environment) {
        self.env = env;
    }
}
