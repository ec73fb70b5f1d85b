//! Path resolution relative to a project root

use std::path::{Component, Path, PathBuf};

/// Resolve `maybe_absolute` against `root`.
///
/// Absolute paths pass through unchanged. Relative paths are joined to
/// `root` and lexically normalised, so `ensure_is_absolute("/foo", "bar")`
/// yields `/foo/bar` and `ensure_is_absolute("/foo", "../bar")` yields `/bar`.
pub fn ensure_is_absolute(root: impl AsRef<Path>, maybe_absolute: impl AsRef<Path>) -> PathBuf {
    let maybe_absolute = maybe_absolute.as_ref();
    if maybe_absolute.is_absolute() {
        maybe_absolute.to_path_buf()
    } else {
        normalize_lexically(&root.as_ref().join(maybe_absolute))
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` above the root of an absolute path is dropped; on a relative path it
/// is kept, matching what a plain path join produces.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Render a path with forward slashes regardless of platform.
///
/// Used wherever a path is handed to a glob matcher.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
