//! Error types for format operations

use crate::ir::nodes::EntryKind;
use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the operation
    NotSupported(String),
    /// An entry command carries fewer arguments than its kind requires
    MissingArguments {
        kind: EntryKind,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The YAML source could not be scanned or parsed
    YamlSyntax(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::MissingArguments {
                kind,
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {line}: {kind} entry needs at least {expected} non-empty arguments, found {found}"
            ),
            FormatError::YamlSyntax(msg) => write!(f, "Error parsing YAML file: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
