//! The pre-10 configuration shape

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::{
    ConfigSchema, FolderSetting, Patterns, expect_patterns, expect_string, expect_string_or_false,
};
use crate::Result;
use crate::environment::Environment;

/// Resolved configuration in the legacy (integration folder) shape.
///
/// Definitions of each key follow the upstream Cypress schema; only this
/// subset is resolved and validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyConfiguration {
    pub project_root: PathBuf,
    pub integration_folder: String,
    pub fixtures_folder: FolderSetting,
    pub support_file: FolderSetting,
    pub test_files: Patterns,
    pub ignore_test_files: Patterns,
    pub env: Environment,
}

/// One validated assignment to a [`LegacyConfiguration`] field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyEntry {
    ProjectRoot(String),
    IntegrationFolder(String),
    FixturesFolder(FolderSetting),
    SupportFile(FolderSetting),
    TestFiles(Patterns),
    IgnoreTestFiles(Patterns),
}

impl ConfigSchema for LegacyConfiguration {
    type Entry = LegacyEntry;

    const KEYS: &'static [&'static str] = &[
        "projectRoot",
        "integrationFolder",
        "fixturesFolder",
        "supportFile",
        "testFiles",
        "ignoreTestFiles",
    ];

    fn defaults(project_root: PathBuf) -> Self {
        Self {
            project_root,
            integration_folder: "cypress/integration".to_string(),
            fixtures_folder: FolderSetting::from("cypress/fixtures"),
            support_file: FolderSetting::from("cypress/support/index.js"),
            test_files: Patterns::from("**/*.*"),
            ignore_test_files: Patterns::from("*.hot-update.js"),
            env: Environment::default(),
        }
    }

    fn validate_entry(key: &str, value: &Value) -> Result<Option<LegacyEntry>> {
        let entry = match key {
            "projectRoot" => LegacyEntry::ProjectRoot(expect_string(key, value)?),
            "integrationFolder" => LegacyEntry::IntegrationFolder(expect_string(key, value)?),
            "fixturesFolder" => LegacyEntry::FixturesFolder(expect_string_or_false(key, value)?),
            "supportFile" => LegacyEntry::SupportFile(expect_string_or_false(key, value)?),
            "testFiles" => LegacyEntry::TestFiles(expect_patterns(key, value)?),
            "ignoreTestFiles" => LegacyEntry::IgnoreTestFiles(expect_patterns(key, value)?),
            _ => return Ok(None),
        };
        Ok(Some(entry))
    }

    fn apply(&mut self, entry: LegacyEntry) {
        match entry {
            LegacyEntry::ProjectRoot(root) => self.project_root = PathBuf::from(root),
            LegacyEntry::IntegrationFolder(folder) => self.integration_folder = folder,
            LegacyEntry::FixturesFolder(folder) => self.fixtures_folder = folder,
            LegacyEntry::SupportFile(file) => self.support_file = file,
            LegacyEntry::TestFiles(patterns) => self.test_files = patterns,
            LegacyEntry::IgnoreTestFiles(patterns) => self.ignore_test_files = patterns,
        }
    }

    fn set_environment(&mut self, env: Environment) {
        self.env = env;
    }
}
