//! Cell resolution: one row, one column, one `td`.

use serde_json::Value;
use tabledom::{ClassList, Content, Element, Handlers, Style, TextAlign};

use crate::column::{Attributes, Column};
use crate::facet::Title;
use crate::row::Row;
use crate::value::CellValue;

/// Every facet of a cell, resolved for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub content: Content,
    pub style: Option<Style>,
    pub classes: Option<ClassList>,
    /// The tooltip as produced, not converted to text.
    pub title: Option<Value>,
    pub events: Option<Handlers>,
    pub align: Option<TextAlign>,
    pub attrs: Option<Attributes>,
}

/// Resolve every facet of the cell at `(row_index, column_index)`.
///
/// Facets are independent of one another. Each column function is called
/// exactly once: the formatter with `(value, row, row_index, format_extra_data)`,
/// the rest with `(value, row, column_index)`. Nothing is validated or cached.
pub fn resolve(row: &Row, column: &Column, row_index: usize, column_index: usize) -> ResolvedCell {
    let value = row.get(&column.data_field);
    log::trace!(
        "[cell] resolve r{row_index} c{column_index} field={} defined={}",
        column.data_field,
        !value.is_undefined()
    );

    let content = match &column.formatter {
        Some(format) => format(value, row, row_index, column.format_extra_data.as_ref()),
        None => Content::Text(value.to_string()),
    };

    let style = column
        .style
        .as_ref()
        .map(|facet| facet.resolve(value, row, column_index));
    let classes = column
        .classes
        .as_ref()
        .map(|facet| facet.resolve(value, row, column_index));
    let title = column
        .title
        .as_ref()
        .and_then(|facet| match facet.resolve(value, row, column_index) {
            Title::CellValue => value.to_value(),
            Title::Value(v) => Some(v),
        });
    let align = column
        .align
        .as_ref()
        .map(|facet| facet.resolve(value, row, column_index));
    let attrs = column
        .attrs
        .as_ref()
        .map(|facet| facet.resolve(value, row, column_index));

    ResolvedCell {
        content,
        style,
        classes,
        title,
        events: column.events.clone(),
        align,
        attrs,
    }
}

impl ResolvedCell {
    /// Build the `td` element.
    ///
    /// `class` and `style` entries in `attrs` merge into the class list and
    /// style; the style facet replaces an attrs style, `align` sets
    /// `text-align` last, and `title` replaces an attrs title. A `null`
    /// title sets no attribute.
    pub fn into_element(self) -> Element {
        let mut td = Element::td().content(self.content);
        let mut style = Style::new();

        if let Some(attrs) = self.attrs {
            for (name, value) in attrs {
                match name.as_str() {
                    "class" => td = td.class(&value),
                    "style" => {
                        for decl in value.split(';') {
                            if let Some((prop, val)) = decl.split_once(':') {
                                style.set_property(prop.trim(), val.trim());
                            }
                        }
                    }
                    _ => td = td.attr(name, value),
                }
            }
        }

        if let Some(resolved) = self.style {
            style = resolved;
        }
        if let Some(align) = self.align {
            style.text_align = Some(align);
        }
        td = td.style(style);

        if let Some(classes) = self.classes {
            td = td.classes(classes);
        }

        match self.title {
            Some(Value::Null) => {
                td.attributes.remove("title");
            }
            Some(title) => td = td.attr("title", CellValue::Value(&title).to_string()),
            None => {}
        }

        if let Some(events) = self.events {
            td = td.handlers(events);
        }

        td
    }
}

/// The inputs for one cell, as a table supplies them.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    pub row: &'a Row,
    pub column: &'a Column,
    pub row_index: usize,
    pub column_index: usize,
}

impl<'a> Cell<'a> {
    pub fn new(row: &'a Row, column: &'a Column, row_index: usize, column_index: usize) -> Self {
        Self {
            row,
            column,
            row_index,
            column_index,
        }
    }

    pub fn resolve(&self) -> ResolvedCell {
        resolve(self.row, self.column, self.row_index, self.column_index)
    }

    /// Resolve and build the `td` element.
    pub fn render(&self) -> Element {
        self.resolve().into_element()
    }
}
