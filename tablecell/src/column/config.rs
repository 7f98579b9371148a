//! Declarative column configuration.
//!
//! Covers the literal part of a column. Formatters, computed facets and
//! event handlers are closures and are attached with the builder after
//! loading.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabledom::{ClassList, Style, TextAlign};

use super::{Attributes, Column};
use crate::error::{Error, Result, json_type_name};
use crate::facet::{Facet, Title};
use crate::value::CellValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub data_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// CSS properties, camelCase or kebab-case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<ClassesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_extra_data: Option<Value>,
}

/// `"a b"` or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassesConfig {
    Text(String),
    List(Vec<String>),
}

/// `true` for the cell value, or a fixed tooltip string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TitleConfig {
    Enabled(bool),
    Text(String),
}

impl Column {
    pub fn from_config(config: ColumnConfig) -> Result<Self> {
        let field = config.data_field;
        if field.trim().is_empty() {
            return Err(invalid(&field, "dataField must not be empty"));
        }

        let mut column = Column::new(field.clone());
        column.text = config.text;
        column.format_extra_data = config.format_extra_data;

        if let Some(props) = config.style {
            let mut style = Style::new();
            for (name, value) in props {
                // null drops the property, like an unset inline style
                if let Some(text) = scalar_text(&field, &name, &value)? {
                    style.set_property(&name, text);
                }
            }
            column.style = Some(Facet::Literal(style));
        }

        column.classes = config.classes.map(|classes| {
            Facet::Literal(match classes {
                ClassesConfig::Text(text) => ClassList::parse(&text),
                ClassesConfig::List(items) => items.iter().collect(),
            })
        });

        column.title = match config.title {
            None | Some(TitleConfig::Enabled(false)) => None,
            Some(TitleConfig::Enabled(true)) => Some(Facet::Literal(Title::CellValue)),
            Some(TitleConfig::Text(text)) => Some(Facet::Literal(Title::from(text))),
        };

        if let Some(align) = config.align {
            let parsed = TextAlign::parse(&align)
                .ok_or_else(|| invalid(&field, format!("unknown align `{align}`")))?;
            column.align = Some(Facet::Literal(parsed));
        }

        if let Some(attrs) = config.attrs {
            let mut out = Attributes::new();
            for (name, value) in attrs {
                if let Some(text) = scalar_text(&field, &name, &value)? {
                    out.insert(name, text);
                }
            }
            column.attrs = Some(Facet::Literal(out));
        }

        Ok(column)
    }
}

impl TryFrom<ColumnConfig> for Column {
    type Error = Error;

    fn try_from(config: ColumnConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

/// Parse a JSON array of column configurations.
pub fn load_columns(json: &str) -> Result<Vec<Column>> {
    let configs: Vec<ColumnConfig> = serde_json::from_str(json)?;
    let columns = configs
        .into_iter()
        .map(Column::from_config)
        .collect::<Result<Vec<_>>>()?;
    log::debug!(
        "[columns] loaded {} column(s): {:?}",
        columns.len(),
        columns.iter().map(|c| c.data_field.as_str()).collect::<Vec<_>>()
    );
    Ok(columns)
}

fn scalar_text(field: &str, name: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(invalid(
            field,
            format!("`{name}` must be a scalar, found {}", json_type_name(value)),
        )),
        scalar => Ok(Some(CellValue::Value(scalar).to_string())),
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        field: field.to_string(),
        reason: reason.into(),
    }
}
