//! Per-cell rendering for data tables.
//!
//! A [`Column`] describes how one row field renders: an optional formatter
//! plus style, classes, title, alignment and attributes that are each either
//! fixed or computed per cell, and event handlers to attach. [`resolve`]
//! turns a row, a column and the cell's position into a [`ResolvedCell`],
//! which becomes a `td` [`Element`](tabledom::Element).

pub mod cell;
pub mod column;
pub mod error;
pub mod facet;
pub mod prelude;
pub mod row;
pub mod value;

pub use cell::{Cell, ResolvedCell, resolve};
pub use column::{Attributes, Column, ColumnConfig, Formatter, load_columns};
pub use error::{Error, Result};
pub use facet::{Facet, ResolverFn, Title};
pub use row::{Row, rows_from_json};
pub use value::CellValue;

pub use tabledom;
