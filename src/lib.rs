//! grcutil - core library for a remote runtime-configuration client
//!
//! The heavy lifting (storage, consistency, auth) lives in the remote
//! service; this crate holds the pure pieces the client composes around it:
//! CONSTANT_CASE name normalization, variable-name validation, and rendering
//! of variable lists as env lines or JSON.

// Name normalization
pub mod case;

// Error types
pub mod error;

// Variable-list rendering
pub mod format;

// Resource-name helpers
pub mod resource;

// Data types
pub mod types;

// Write-path name validation
pub mod validate;

// Re-export the common surface
pub use case::to_constant_case;
pub use error::{Error, Result, ValidationError};
pub use format::print_variable_list;
pub use types::{NameFormat, PrintFormat, Variable, VariableList};
pub use validate::validate_variable_name;
