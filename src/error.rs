use serde_json::Value;
use thiserror::Error;

/// Errors produced by the core processing operations
#[derive(Debug, Error)]
pub enum Error {
    /// Extraction requires the document root to be a JSON array
    #[error("input must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

/// Human-readable name for a JSON value's type, used in error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
