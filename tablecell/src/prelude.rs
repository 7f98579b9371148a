//! Common imports for building columns and rendering cells.

pub use crate::cell::{Cell, ResolvedCell, resolve};
pub use crate::column::{Attributes, Column};
pub use crate::facet::{Facet, Title};
pub use crate::row::Row;
pub use crate::value::CellValue;

pub use tabledom::{
    ClassList, Color, Content, Element, Event, EventKind, Handlers, Style, TextAlign,
};
