//! Named Processor
//!
//! A small value type that stamps data with the name of whoever
//! processed it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Formats "processed by" messages under a fixed name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataProcessor {
    name: String,
}

impl DataProcessor {
    /// Creates a processor. The name is stored verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formats `data` as processed by this processor.
    ///
    /// # Example
    ///
    /// ```
    /// use workflow_helpers::helpers::DataProcessor;
    ///
    /// let processor = DataProcessor::new("X");
    /// assert_eq!(processor.process("Y"), "Processed by X: Y");
    /// assert_eq!(processor.process(&42), "Processed by X: 42");
    /// ```
    pub fn process<T: Display + ?Sized>(&self, data: &T) -> String {
        format!("Processed by {}: {}", self.name, data)
    }

    /// Like [`process`](Self::process) for a JSON value.
    ///
    /// Strings are inserted without quotes; everything else uses its
    /// compact JSON form.
    pub fn process_value(&self, data: &Value) -> String {
        match data {
            Value::String(s) => self.process(s.as_str()),
            other => self.process(other),
        }
    }
}
