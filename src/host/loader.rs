//! Input Loader
//!
//! Reads the input record a workflow host hands to a helper. Documents may
//! be JSON or YAML; both parse into the same JSON value model.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::error::{HelperError, Result};

/// Parses a JSON or YAML document into a JSON value.
///
/// Blank input is treated as an empty record.
///
/// # Example
///
/// ```
/// use workflow_helpers::host::parse_input;
///
/// let value = parse_input("user: Sam").unwrap();
/// assert_eq!(value["user"], "Sam");
/// ```
pub fn parse_input(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        debug!("Empty input document, using empty record");
        return Ok(Value::Object(Default::default()));
    }

    serde_yaml::from_str(content).map_err(|e| HelperError::Parse(e.to_string()))
}

/// Loads and parses an input document from `path`.
pub fn load_input(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    info!("Loading input from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| HelperError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Input loaded ({} bytes)", content.len());
    parse_input(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_parse_json() {
        let value = parse_input(r#"{"items": ["a", 1], "user": "Sam"}"#).unwrap();
        assert_eq!(value, json!({"items": ["a", 1], "user": "Sam"}));
    }

    #[test]
    fn test_parse_yaml() {
        let value = parse_input("items:\n  - a\n  - 1\nuser: Sam\n").unwrap();
        assert_eq!(value, json!({"items": ["a", 1], "user": "Sam"}));
    }

    #[test]
    fn test_parse_blank_is_empty_record() {
        assert_eq!(parse_input("  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_input("this is not valid yaml: [[[");
        assert!(matches!(result, Err(HelperError::Parse(_))));
    }

    #[test]
    fn test_load_input_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("input.json");
        std::fs::write(&path, r#"{"user": "Lee"}"#).unwrap();

        let value = load_input(&path).unwrap();
        assert_eq!(value["user"], "Lee");
    }

    #[test]
    fn test_load_input_file_not_found() {
        let result = load_input("/nonexistent/path/input.json");
        assert!(matches!(result, Err(HelperError::Io { .. })));
    }
}
