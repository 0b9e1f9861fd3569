//! Error Types
//!
//! The helpers themselves are infallible. Errors only arise when dynamic
//! input (JSON or YAML documents handed over by a workflow host) has to be
//! converted into the typed model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the boundary between host documents and typed helpers.
#[derive(Debug, Error)]
pub enum HelperError {
    /// Input had the wrong shape (e.g. `items` is not a list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An element of `items` has no textual form
    #[error("Item at index {index} cannot be converted to text (found {kind})")]
    UnconvertibleItem { index: usize, kind: &'static str },

    /// Requested helper does not exist
    #[error("Unknown helper function: '{0}'")]
    UnknownFunction(String),

    #[error("Integer overflow while summing numbers")]
    Overflow,

    /// Input document could not be parsed
    #[error("Failed to parse input document: {0}. Check the file format.")]
    Parse(String),

    #[error("Failed to read input file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelperError>;

/// Names the JSON kind of a value for error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
