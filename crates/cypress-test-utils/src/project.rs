//! [`TestProject`] builder for configuration resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary working directory holding a Cypress project.
///
/// The temporary directory plays the role of the process working directory;
/// the project itself may live in a subdirectory of it (for `--project`).
///
/// # Example
///
/// ```rust,no_run
/// use cypress_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new();
/// project.write_config(&json!({ "integrationFolder": "features" }));
/// project.touch("features/a.feature");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    project_dir: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// A project rooted directly in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            project_dir,
        }
    }

    /// A project rooted at `relative` inside a fresh temporary directory.
    pub fn in_subdirectory(relative: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join(relative);
        fs::create_dir_all(&project_dir).unwrap_or_else(|e| {
            panic!(
                "TestProject: failed to create {}: {e}",
                project_dir.display()
            )
        });
        Self {
            temp_dir,
            project_dir,
        }
    }

    /// The working directory the resolver should be given as `cwd`.
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Write `cypress.json` in the project root.
    pub fn write_config(&self, config: &Value) {
        self.write_json("cypress.json", config);
    }

    /// Write `cypress.env.json` in the project root.
    pub fn write_env_file(&self, env: &Value) {
        self.write_json("cypress.env.json", env);
    }

    /// Write `value` as pretty JSON to `path` (relative to the project root).
    pub fn write_json(&self, path: &str, value: &Value) {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.write(path, &content);
    }

    /// Write raw `content` to `path` (relative to the project root),
    /// creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.project_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap_or_else(|e| {
            panic!("TestProject: failed to write {}: {e}", full_path.display())
        });
    }

    /// Create an empty file at `path` (relative to the project root).
    pub fn touch(&self, path: &str) -> PathBuf {
        self.write(path, "");
        self.project_dir.join(path)
    }
}
