//! Error types for row and column loading.
//!
//! Cell resolution itself never fails; only the edges that parse
//! external data return these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("row must be a JSON object, found {found}")]
    RowNotObject { found: &'static str },
    #[error("rows must be a JSON array, found {found}")]
    RowsNotArray { found: &'static str },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("column `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
