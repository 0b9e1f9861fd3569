//! Host Bridge
//!
//! Lets a workflow host drive the helpers with JSON or YAML documents.
//!
//! - [`loader`]: Reading and parsing input documents
//! - [`dispatch`]: Resolving a helper by name and invoking it

pub mod dispatch;
pub mod loader;

pub use dispatch::{invoke, HelperFunction};
pub use loader::{load_input, parse_input};
