//! Workflow Helpers - Glue Functions for Workflow Steps
//!
//! A small library of pure, stateless helper functions meant to be called
//! from a workflow engine: a greeting formatter, an item normalizer, a
//! summation utility, a named processor, and the `workflow_helper`
//! aggregator that combines them into one result record.
//!
//! # Architecture
//!
//! The library is organized into three modules:
//!
//! - [`helpers`]: The helper functions themselves (no I/O, no state)
//! - [`host`]: Bridge for hosts that exchange JSON or YAML documents
//! - [`error`]: Errors raised when dynamic input doesn't fit the typed model
//!
//! # Example
//!
//! ```rust
//! use workflow_helpers::helpers::{workflow_helper, WorkflowInput};
//!
//! let input = WorkflowInput::new()
//!     .with_items(vec!["a".into(), 1.into(), "b".into()])
//!     .with_user("Sam");
//!
//! let output = workflow_helper(&input);
//! assert_eq!(output.greeting, "Hello, Sam!");
//! ```

pub mod error;
pub mod helpers;
pub mod host;

// Re-export commonly used types
pub use error::{HelperError, Result};
pub use helpers::{
    calculate_sum, greet, process_data, workflow_helper, DataProcessor, Item, WorkflowInput,
    WorkflowOutput, MODULE_VERSION,
};
pub use host::{invoke, HelperFunction};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "workflow-helpers";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_module_version_matches_package() {
        assert_eq!(MODULE_VERSION, VERSION);
    }

    #[test]
    fn test_module_exports_helpers() {
        assert_eq!(greet("Sam"), "Hello, Sam!");
        assert_eq!(calculate_sum(&[1, 2, 3]), 6);
        assert_eq!(DataProcessor::new("X").process("Y"), "Processed by X: Y");
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = MODULE_VERSION.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be major.minor.patch");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "Version components should be numeric");
        }
    }
}
