//! Filesystem helpers for Cypress configuration resolution
//!
//! Provides project-relative path resolution and one-shot JSON file reads.
//! Nothing here caches: every call goes back to the disk.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_json_object, read_json_value, read_text};
pub use path::{ensure_is_absolute, normalize_lexically, to_slash};
