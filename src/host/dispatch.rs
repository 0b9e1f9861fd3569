//! Helper Dispatch
//!
//! Maps a helper name and a loosely typed input document to the typed
//! helper call, and turns the result back into JSON.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{value_kind, HelperError, Result};
use crate::helpers::{
    greet_or_default, items_from_value, process_data, sum_values, workflow_helper,
    DataProcessor, WorkflowInput,
};

/// A helper that can be invoked by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperFunction {
    WorkflowHelper,
    Greet,
    ProcessData,
    CalculateSum,
    /// Named processor; carries the processor's name
    Process { name: String },
}

impl HelperFunction {
    /// Canonical name of this helper.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorkflowHelper => "workflow_helper",
            Self::Greet => "greet",
            Self::ProcessData => "process_data",
            Self::CalculateSum => "calculate_sum",
            Self::Process { .. } => "process",
        }
    }

    /// Resolves a helper name, attaching `processor_name` to `process`.
    pub fn resolve(name: &str, processor_name: Option<&str>) -> Result<Self> {
        let function: HelperFunction = name.parse()?;
        Ok(match function {
            Self::Process { .. } => Self::Process {
                name: processor_name
                    .ok_or_else(|| {
                        HelperError::InvalidInput("'process' requires a processor name".to_string())
                    })?
                    .to_string(),
            },
            other => other,
        })
    }
}

impl fmt::Display for HelperFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HelperFunction {
    type Err = HelperError;

    /// Parses a helper name; `-` and `_` are interchangeable. The parsed
    /// `Process` carries an empty name.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().replace('-', "_").as_str() {
            "workflow_helper" => Ok(Self::WorkflowHelper),
            "greet" => Ok(Self::Greet),
            "process_data" => Ok(Self::ProcessData),
            "calculate_sum" => Ok(Self::CalculateSum),
            "process" => Ok(Self::Process {
                name: String::new(),
            }),
            _ => Err(HelperError::UnknownFunction(s.to_string())),
        }
    }
}

/// Invokes `function` on a JSON input document.
pub fn invoke(function: &HelperFunction, input: &Value) -> Result<Value> {
    debug!("Invoking '{}' with {} input", function, value_kind(input));

    match function {
        HelperFunction::WorkflowHelper => {
            let input = WorkflowInput::from_value(input)?;
            to_json(&workflow_helper(&input))
        }
        HelperFunction::Greet => {
            let name = greet_name(input)?;
            Ok(Value::String(greet_or_default(name)))
        }
        HelperFunction::ProcessData => {
            let items = items_from_value(field_or_self(input, "items"))?;
            to_json(&process_data(Some(&items)))
        }
        HelperFunction::CalculateSum => match field_or_self(input, "numbers") {
            Value::Array(numbers) => sum_values(numbers),
            other => Err(HelperError::InvalidInput(format!(
                "'numbers' must be a list, found {}",
                value_kind(other)
            ))),
        },
        HelperFunction::Process { name } => {
            let processor = DataProcessor::new(name.as_str());
            Ok(Value::String(processor.process_value(input)))
        }
    }
}

/// Returns `record[key]` when the input is a mapping, else the input itself.
fn field_or_self<'a>(input: &'a Value, key: &str) -> &'a Value {
    match input {
        Value::Object(record) => record.get(key).unwrap_or(&Value::Null),
        other => other,
    }
}

/// Extracts the name to greet from text or a `name` / `user` field.
fn greet_name(input: &Value) -> Result<Option<&str>> {
    let value = match input {
        Value::Object(record) => lookup(record, &["name", "user"]),
        other => other,
    };

    match value {
        Value::Null => Ok(None),
        Value::String(name) => Ok(Some(name.as_str())),
        other => Err(HelperError::InvalidInput(format!(
            "name to greet must be text, found {}",
            value_kind(other)
        ))),
    }
}

fn lookup<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> &'a Value {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
        .unwrap_or(&Value::Null)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| HelperError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_function_names() {
        assert_eq!(
            "workflow_helper".parse::<HelperFunction>().unwrap(),
            HelperFunction::WorkflowHelper
        );
        assert_eq!(
            "workflow-helper".parse::<HelperFunction>().unwrap(),
            HelperFunction::WorkflowHelper
        );
        assert_eq!(
            "calculate-sum".parse::<HelperFunction>().unwrap(),
            HelperFunction::CalculateSum
        );
        assert!(matches!(
            "explode".parse::<HelperFunction>(),
            Err(HelperError::UnknownFunction(_))
        ));
    }

    #[test]
    fn test_resolve_process_requires_name() {
        assert!(HelperFunction::resolve("process", None).is_err());
        assert_eq!(
            HelperFunction::resolve("process", Some("X")).unwrap(),
            HelperFunction::Process { name: "X".to_string() }
        );
        assert_eq!(
            HelperFunction::resolve("greet", Some("ignored")).unwrap(),
            HelperFunction::Greet
        );
    }

    #[test]
    fn test_invoke_workflow_helper() {
        let result = invoke(
            &HelperFunction::WorkflowHelper,
            &json!({"items": ["a", 1, "b"], "user": "Sam"}),
        )
        .unwrap();
        assert_eq!(
            result,
            json!({"processed": ["A", "1", "B"], "greeting": "Hello, Sam!", "version": "1.0.0"})
        );
    }

    #[test]
    fn test_invoke_workflow_helper_defaults() {
        let result = invoke(&HelperFunction::WorkflowHelper, &json!({})).unwrap();
        assert_eq!(
            result,
            json!({"processed": [], "greeting": "Hello, Anonymous!", "version": "1.0.0"})
        );
    }

    #[test]
    fn test_invoke_greet() {
        assert_eq!(invoke(&HelperFunction::Greet, &json!("Sam")).unwrap(), json!("Hello, Sam!"));
        assert_eq!(
            invoke(&HelperFunction::Greet, &json!({"name": "Ada"})).unwrap(),
            json!("Hello, Ada!")
        );
        assert_eq!(
            invoke(&HelperFunction::Greet, &json!({"user": "Lee"})).unwrap(),
            json!("Hello, Lee!")
        );
        assert_eq!(invoke(&HelperFunction::Greet, &json!({})).unwrap(), json!("Hello, Anonymous!"));
        assert!(invoke(&HelperFunction::Greet, &json!(7)).is_err());
    }

    #[test]
    fn test_invoke_greet_null_name_falls_back_to_user() {
        assert_eq!(
            invoke(&HelperFunction::Greet, &json!({"name": null, "user": "Lee"})).unwrap(),
            json!("Hello, Lee!")
        );
        assert_eq!(
            invoke(&HelperFunction::Greet, &json!({"name": null, "user": null})).unwrap(),
            json!("Hello, Anonymous!")
        );
    }

    #[test]
    fn test_invoke_process_data() {
        assert_eq!(
            invoke(&HelperFunction::ProcessData, &json!(["x", 2.5, true])).unwrap(),
            json!(["X", "2.5", "true"])
        );
        assert_eq!(
            invoke(&HelperFunction::ProcessData, &json!({"items": ["y"]})).unwrap(),
            json!(["Y"])
        );
        assert_eq!(invoke(&HelperFunction::ProcessData, &Value::Null).unwrap(), json!([]));
    }

    #[test]
    fn test_invoke_calculate_sum() {
        assert_eq!(invoke(&HelperFunction::CalculateSum, &json!([1, 2, 3])).unwrap(), json!(6));
        assert_eq!(
            invoke(&HelperFunction::CalculateSum, &json!({"numbers": []})).unwrap(),
            json!(0)
        );
        assert!(invoke(&HelperFunction::CalculateSum, &json!("1,2")).is_err());
    }

    #[test]
    fn test_invoke_process() {
        let function = HelperFunction::Process { name: "X".to_string() };
        assert_eq!(invoke(&function, &json!("Y")).unwrap(), json!("Processed by X: Y"));
        assert_eq!(
            invoke(&function, &json!({"k": 1})).unwrap(),
            json!(r#"Processed by X: {"k":1}"#)
        );
    }
}
