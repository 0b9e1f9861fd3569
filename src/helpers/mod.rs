//! Workflow Helper Functions
//!
//! Pure, stateless helpers a workflow step can call.
//!
//! # Structure
//!
//! - [`greeting`]: Greeting formatter
//! - [`normalize`]: Item normalization
//! - [`sum`]: Summation utility
//! - [`processor`]: Named processor
//! - [`aggregate`]: The `workflow_helper` aggregator

pub mod aggregate;
pub mod greeting;
pub mod normalize;
pub mod processor;
pub mod sum;

pub use aggregate::{workflow_helper, WorkflowHelper, WorkflowInput, WorkflowOutput, MODULE_VERSION};
pub use greeting::{greet, greet_or_default, DEFAULT_USER};
pub use normalize::{items_from_value, process_data, Item};
pub use processor::DataProcessor;
pub use sum::{calculate_sum, sum_values};
