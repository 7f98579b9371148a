//! Column descriptors.

mod config;

pub use config::{ClassesConfig, ColumnConfig, TitleConfig, load_columns};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tabledom::{ClassList, Content, Event, EventKind, Handlers, Style, TextAlign};

use crate::cell::{ResolvedCell, resolve};
use crate::facet::{Facet, Title};
use crate::row::Row;
use crate::value::CellValue;

/// Extra string attributes for a cell.
pub type Attributes = BTreeMap<String, String>;

/// Turns a raw value into cell content: `(value, row, row_index, format_extra_data)`.
pub type Formatter =
    Arc<dyn Fn(CellValue<'_>, &Row, usize, Option<&Value>) -> Content + Send + Sync>;

/// How one row field renders as a cell.
///
/// Only `data_field` is required. Every other facet is optional and,
/// where it makes sense, either a literal or a function of
/// `(value, row, column_index)`.
///
/// # Examples
///
/// ```
/// use tablecell::prelude::*;
///
/// let column = Column::new("price")
///     .text("Price")
///     .classes_with(|value, _, _| {
///         if value.as_f64().unwrap_or(0.0) > 2101.0 { "expensive" } else { "cheap" }
///     })
///     .title(true);
///
/// let row = Row::new().with("price", 2100);
/// let cell = column.resolve(&row, 0, 2);
/// assert_eq!(cell.content.text_content(), "2100");
/// assert!(cell.classes.unwrap().contains("cheap"));
/// ```
#[derive(Clone)]
pub struct Column {
    /// Row key this column reads.
    pub data_field: String,
    /// Header label; not used when resolving cells.
    pub text: Option<String>,
    pub formatter: Option<Formatter>,
    /// Passed through to the formatter untouched.
    pub format_extra_data: Option<Value>,
    pub style: Option<Facet<Style>>,
    pub classes: Option<Facet<ClassList>>,
    pub title: Option<Facet<Title>>,
    pub align: Option<Facet<TextAlign>>,
    pub attrs: Option<Facet<Attributes>>,
    /// Attached to the rendered cell as-is.
    pub events: Option<Handlers>,
}

impl Column {
    pub fn new(data_field: impl Into<String>) -> Self {
        Self {
            data_field: data_field.into(),
            text: None,
            formatter: None,
            format_extra_data: None,
            style: None,
            classes: None,
            title: None,
            align: None,
            attrs: None,
            events: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn formatter<F, C>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize, Option<&Value>) -> C + Send + Sync + 'static,
        C: Into<Content>,
    {
        self.formatter = Some(formatter_fn(move |value, row, row_index, extra| {
            f(value, row, row_index, extra).into()
        }));
        self
    }

    pub fn format_extra_data(mut self, data: impl Into<Value>) -> Self {
        self.format_extra_data = Some(data.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(Facet::Literal(style));
        self
    }

    pub fn style_with<F>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> Style + Send + Sync + 'static,
    {
        self.style = Some(Facet::computed(f));
        self
    }

    pub fn classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.classes = Some(Facet::Literal(classes.into()));
        self
    }

    pub fn classes_with<F, C>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> C + Send + Sync + 'static,
        C: Into<ClassList>,
    {
        self.classes = Some(Facet::computed(move |value, row, column_index| {
            f(value, row, column_index).into()
        }));
        self
    }

    /// `true` shows the raw cell value as the tooltip; `false` clears it.
    pub fn title(mut self, enabled: bool) -> Self {
        self.title = enabled.then_some(Facet::Literal(Title::CellValue));
        self
    }

    pub fn title_with<F, T>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> T + Send + Sync + 'static,
        T: Into<Title>,
    {
        self.title = Some(Facet::computed(move |value, row, column_index| {
            f(value, row, column_index).into()
        }));
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(Facet::Literal(align));
        self
    }

    pub fn align_with<F>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> TextAlign + Send + Sync + 'static,
    {
        self.align = Some(Facet::computed(f));
        self
    }

    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let attrs = attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.attrs = Some(Facet::Literal(attrs));
        self
    }

    pub fn attrs_with<F>(mut self, f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> Attributes + Send + Sync + 'static,
    {
        self.attrs = Some(Facet::computed(f));
        self
    }

    pub fn events(mut self, events: Handlers) -> Self {
        self.events = Some(events);
        self
    }

    /// Add one event handler, keeping any already bound.
    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.events.get_or_insert_with(Handlers::new).insert(kind, handler);
        self
    }

    /// Resolve this column's cell for one row.
    pub fn resolve(&self, row: &Row, row_index: usize, column_index: usize) -> ResolvedCell {
        resolve(row, self, row_index, column_index)
    }
}

// Pins the closure to the higher-ranked formatter signature.
fn formatter_fn<F>(f: F) -> Formatter
where
    F: Fn(CellValue<'_>, &Row, usize, Option<&Value>) -> Content + Send + Sync + 'static,
{
    Arc::new(f)
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("data_field", &self.data_field)
            .field("text", &self.text)
            .field("formatter", &self.formatter.as_ref().map(|_| ".."))
            .field("format_extra_data", &self.format_extra_data)
            .field("style", &self.style)
            .field("classes", &self.classes)
            .field("title", &self.title)
            .field("align", &self.align)
            .field("attrs", &self.attrs)
            .field("events", &self.events)
            .finish()
    }
}
