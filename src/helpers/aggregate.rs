//! Workflow Aggregator
//!
//! Combines item normalization and the greeting into the single result
//! record a workflow step consumes.
//!
//! # Example YAML Input
//!
//! ```yaml
//! items:
//!   - a
//!   - 1
//!   - b
//! user: Sam
//! ```
//!
//! produces
//!
//! ```yaml
//! processed: [A, "1", B]
//! greeting: Hello, Sam!
//! version: 1.0.0
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::greeting::greet_or_default;
use super::normalize::{items_from_value, process_data, Item};
use crate::error::{value_kind, HelperError, Result};

/// Version tag stamped on every result record.
pub const MODULE_VERSION: &str = "1.0.0";

/// Input record handed over by the workflow host.
///
/// Both fields are optional; absent fields fall back to an empty item
/// list and the default user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkflowInput {
    /// Items to normalize
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,

    /// Name to greet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl WorkflowInput {
    /// Creates an empty input record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the items to normalize.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Sets the user to greet.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Builds an input record from a loosely typed JSON document.
    ///
    /// `null` (for the whole record or either field) counts as absent.
    /// Unknown keys are ignored. Wrongly typed fields are rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(record) => record,
            other => {
                return Err(HelperError::InvalidInput(format!(
                    "input record must be a mapping, found {}",
                    value_kind(other)
                )))
            }
        };

        let items = match record.get("items") {
            None | Some(Value::Null) => None,
            Some(items) => Some(items_from_value(items)?),
        };

        let user = match record.get("user") {
            None | Some(Value::Null) => None,
            Some(Value::String(user)) => Some(user.clone()),
            Some(other) => {
                return Err(HelperError::InvalidInput(format!(
                    "'user' must be text, found {}",
                    value_kind(other)
                )))
            }
        };

        Ok(Self { items, user })
    }
}

/// Result record returned to the workflow host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowOutput {
    /// Normalized items, in input order
    pub processed: Vec<String>,

    pub greeting: String,

    /// Version of the helper module that produced this record
    pub version: String,
}

/// Aggregator owning the version tag it stamps on results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowHelper {
    version: &'static str,
}

impl Default for WorkflowHelper {
    fn default() -> Self {
        Self::new(MODULE_VERSION)
    }
}

impl WorkflowHelper {
    pub fn new(version: &'static str) -> Self {
        Self { version }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Normalizes the input's items and greets its user.
    pub fn run(&self, input: &WorkflowInput) -> WorkflowOutput {
        let processed = process_data(input.items.as_deref());
        let greeting = greet_or_default(input.user.as_deref());

        debug!(
            "workflow_helper: {} items processed, greeting '{}'",
            processed.len(),
            greeting
        );

        WorkflowOutput {
            processed,
            greeting,
            version: self.version.to_string(),
        }
    }
}

/// Runs the default aggregator over `input`.
///
/// # Example
///
/// ```
/// use workflow_helpers::helpers::{workflow_helper, WorkflowInput};
///
/// let input = WorkflowInput::new()
///     .with_items(vec!["a".into(), 1.into(), "b".into()])
///     .with_user("Sam");
///
/// let output = workflow_helper(&input);
/// assert_eq!(output.processed, vec!["A", "1", "B"]);
/// assert_eq!(output.greeting, "Hello, Sam!");
/// assert_eq!(output.version, "1.0.0");
/// ```
pub fn workflow_helper(input: &WorkflowInput) -> WorkflowOutput {
    WorkflowHelper::default().run(input)
}
