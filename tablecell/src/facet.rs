//! Literal-or-computed column facets.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::row::Row;
use crate::value::CellValue;

/// A function computing a facet from `(value, row, column_index)`.
pub type ResolverFn<T> = Arc<dyn Fn(CellValue<'_>, &Row, usize) -> T + Send + Sync>;

/// A facet value fixed by the column, or computed per cell.
///
/// Style, classes, title, align and attrs all share this shape and are
/// resolved through [`Facet::resolve`].
#[derive(Clone)]
pub enum Facet<T> {
    Literal(T),
    Computed(ResolverFn<T>),
}

impl<T: Clone> Facet<T> {
    pub fn literal(value: impl Into<T>) -> Self {
        Self::Literal(value.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(CellValue<'_>, &Row, usize) -> T + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Literal values are cloned; computed ones call the function exactly once.
    pub fn resolve(&self, value: CellValue<'_>, row: &Row, column_index: usize) -> T {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Computed(f) => f(value, row, column_index),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl<T: fmt::Debug> fmt::Debug for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// What a column's title facet produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Title {
    /// Use the raw cell value, unconverted.
    CellValue,
    Value(Value),
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::Value(Value::String(text.to_string()))
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::Value(Value::String(text))
    }
}

impl From<Value> for Title {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_literal_is_cloned() {
        let facet: Facet<String> = Facet::literal("red");
        let row = Row::new();
        assert_eq!(facet.resolve(CellValue::Undefined, &row, 0), "red");
        assert!(!facet.is_computed());
    }

    #[test]
    fn test_computed_called_once_per_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let facet: Facet<usize> = Facet::computed(move |_, _, column_index| {
            counter.fetch_add(1, Ordering::SeqCst);
            column_index * 10
        });
        let row = Row::new();

        assert_eq!(facet.resolve(CellValue::Undefined, &row, 3), 30);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(format!("{facet:?}"), "Computed(..)");
    }
}
