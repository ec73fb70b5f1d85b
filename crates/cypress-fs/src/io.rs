//! One-shot file reads

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read and parse a JSON document.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// cannot be parsed is a [`Error::MalformedFile`] naming the path.
pub fn read_json_value(path: &Path) -> Result<Option<Value>> {
    if !path.is_file() {
        tracing::debug!(?path, "No JSON file found, skipping");
        return Ok(None);
    }

    tracing::debug!(?path, "Loading JSON file");
    let content = read_text(path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|_| Error::malformed(path, "JSON"))
}

/// Read a JSON document whose top-level value must be an object.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_json_object(path: &Path) -> Result<Option<Map<String, Value>>> {
    match read_json_value(path)? {
        None => Ok(None),
        Some(Value::Object(object)) => Ok(Some(object)),
        Some(_) => Err(Error::malformed(path, "an object")),
    }
}
