//! Row records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result, json_type_name};
use crate::value::CellValue;

/// One data record: field name to JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::RowNotObject {
                found: json_type_name(&other),
            }),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw value for `field`; `Undefined` when the row has no such field.
    pub fn get(&self, field: &str) -> CellValue<'_> {
        CellValue::from(self.0.get(field))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Row {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

/// Parse a JSON array of objects into rows.
pub fn rows_from_json(json: &str) -> Result<Vec<Row>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items.into_iter().map(Row::from_json).collect(),
        other => Err(Error::RowsNotArray {
            found: json_type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_field_is_undefined() {
        let row = Row::new().with("id", 1);
        assert_eq!(row.get("id"), CellValue::Value(&json!(1)));
        assert!(row.get("name").is_undefined());
        assert!(row.contains("id"));
        assert!(!row.contains("name"));
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(Row::from_json(json!({"id": 1})).is_ok());
        let err = Row::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::RowNotObject { found: "array" }));
    }

    #[test]
    fn test_rows_from_json() {
        let rows = rows_from_json(r#"[{"id": 0}, {"id": 1, "name": "B"}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("name").as_str(), Some("B"));

        assert!(matches!(
            rows_from_json(r#"{"id": 0}"#),
            Err(Error::RowsNotArray { found: "object" })
        ));
        assert!(matches!(rows_from_json("[1]"), Err(Error::RowNotObject { .. })));
        assert!(matches!(rows_from_json("[{"), Err(Error::Json(_))));
    }
}
