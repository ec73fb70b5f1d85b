//! Test file discovery
//!
//! Expands the configured include patterns into a sorted, deduplicated list
//! of absolute file paths. Both schemas share one matching rule set:
//!
//! - dotfiles are matched like any other file,
//! - a pattern without `/` is matched against the file name alone,
//! - a pattern starting with `/` is matched against the absolute path,
//! - any other pattern is matched against the path relative to the base folder.
//!
//! The legacy schema prunes the support file and fixtures folder during the
//! walk. Ignore patterns (`ignoreTestFiles`, `excludeSpecPattern`) are tested
//! against files only, after the walk, so both schemas drop exactly the files
//! an ignore pattern matches.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cypress_fs::{ensure_is_absolute, to_slash};
use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::schema::{CypressConfiguration, LegacyConfiguration, ModernConfiguration};
use crate::{Error, Result};

/// Which part of a path a pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTarget {
    FileName,
    Relative,
    Absolute,
}

/// A compiled list of glob patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    matchers: Vec<(MatchTarget, GlobMatcher)>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let matchers = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                let target = if pattern.starts_with('/') {
                    MatchTarget::Absolute
                } else if pattern.contains('/') {
                    MatchTarget::Relative
                } else {
                    MatchTarget::FileName
                };
                let glob = GlobBuilder::new(pattern)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        message: e.kind().to_string(),
                    })?;
                Ok((target, glob.compile_matcher()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Whether `absolute` (found at `relative` under the base folder) matches
    /// any pattern.
    pub fn is_match(&self, absolute: &Path, relative: &Path) -> bool {
        let file_name = relative
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = to_slash(relative);
        let absolute = to_slash(absolute);

        self.matchers.iter().any(|(target, matcher)| match target {
            MatchTarget::FileName => matcher.is_match(&file_name),
            MatchTarget::Relative => matcher.is_match(&relative),
            MatchTarget::Absolute => matcher.is_match(&absolute),
        })
    }
}

/// Resolve the test files of either schema.
pub fn resolve_test_files(configuration: &CypressConfiguration) -> Result<Vec<PathBuf>> {
    match configuration {
        CypressConfiguration::Legacy(config) => resolve_legacy_test_files(config),
        CypressConfiguration::Modern(config) => resolve_modern_test_files(config),
    }
}

/// `testFiles` under the integration folder, minus the support file, the
/// fixtures folder and anything matching `ignoreTestFiles`.
pub fn resolve_legacy_test_files(config: &LegacyConfiguration) -> Result<Vec<PathBuf>> {
    let base = ensure_is_absolute(&config.project_root, &config.integration_folder);
    let include = PatternSet::new(&config.test_files.to_vec())?;
    let ignore = PatternSet::new(&config.ignore_test_files.to_vec())?;

    let support_file = config
        .support_file
        .as_path()
        .map(|file| ensure_is_absolute(&config.project_root, file));
    let fixtures_folder = config
        .fixtures_folder
        .as_path()
        .map(|folder| ensure_is_absolute(&config.project_root, folder));

    let excluded = |path: &Path| {
        support_file.as_deref() == Some(path)
            || fixtures_folder
                .as_deref()
                .is_some_and(|folder| path.starts_with(folder))
    };

    let found = expand(&base, &include, excluded);
    let files = without_ignored(&base, found, &ignore);

    tracing::debug!(?base, ?files, "Resolved legacy test files");
    Ok(files)
}

/// `specPattern` under the project root, minus `excludeSpecPattern`.
pub fn resolve_modern_test_files(config: &ModernConfiguration) -> Result<Vec<PathBuf>> {
    let base = &config.project_root;
    let include = PatternSet::new(&config.spec_pattern.to_vec())?;
    let exclude = PatternSet::new(&config.exclude_spec_pattern.to_vec())?;

    let found = expand(base, &include, |_| false);
    let files = without_ignored(base, found, &exclude);

    tracing::debug!(?base, ?files, "Resolved modern test files");
    Ok(files)
}

/// Drop every file matching `ignore`. Only file paths are tested, so a
/// pattern naming a directory removes nothing.
fn without_ignored(base: &Path, files: BTreeSet<PathBuf>, ignore: &PatternSet) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|absolute| {
            let relative = absolute.strip_prefix(base).unwrap_or(absolute.as_path());
            !ignore.is_match(absolute, relative)
        })
        .collect()
}

/// Walk `base` and collect files matching `include`. Entries whose absolute
/// path `prune` rejects are skipped, directories included.
fn expand<F>(base: &Path, include: &PatternSet, prune: F) -> BTreeSet<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let mut files = BTreeSet::new();
    if include.is_empty() {
        return files;
    }

    let walker = WalkDir::new(base)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !prune(entry.path()));

    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(base) else {
            continue;
        };
        if include.is_match(entry.path(), relative) {
            files.insert(entry.into_path());
        }
    }
    files
}
