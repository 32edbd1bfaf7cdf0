//! Core data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single name/value pair within a config.
///
/// `value` is `None` when the variable was not found in the remote service.
/// This is distinct from `Some("")`: the client relies on the difference to
/// pick create-vs-update on the write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: Option<String>,
}

impl Variable {
    /// Create a variable with a known value
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a not-found placeholder
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// The value as rendered in output, absent mapping to empty
    #[must_use]
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// An ordered list of variables, as returned by the remote service.
///
/// Order reflects whatever the caller supplied; nothing is sorted or
/// de-duplicated here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariableList {
    pub variables: Vec<Variable>,
}

impl VariableList {
    #[must_use]
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }
}

impl From<Vec<Variable>> for VariableList {
    fn from(variables: Vec<Variable>) -> Self {
        Self { variables }
    }
}

/// Output encoding for a printed variable list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    #[default]
    Env,
    Json,
}

impl PrintFormat {
    /// Parse a user-supplied spelling, case-insensitive
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "env" => Some(PrintFormat::Env),
            "json" => Some(PrintFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintFormat::Env => write!(f, "env"),
            PrintFormat::Json => write!(f, "json"),
        }
    }
}

/// Whether names are rewritten before output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFormat {
    /// Names exactly as stored
    #[default]
    Source,
    /// Names normalized to CONSTANT_CASE
    Constant,
}

impl NameFormat {
    /// Parse a user-supplied spelling, case-insensitive
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "source" => Some(NameFormat::Source),
            "constant" => Some(NameFormat::Constant),
            _ => None,
        }
    }
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameFormat::Source => write!(f, "source"),
            NameFormat::Constant => write!(f, "constant"),
        }
    }
}
