#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, TestLogger};
use tablecell::{CellValue, Row};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Records the arguments of every call made through it.
#[derive(Clone)]
pub struct Spy<A> {
    calls: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone + PartialEq> Spy<A> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, args: A) {
        self.calls.lock().unwrap().push(args);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_with(&self, args: &A) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == args)
    }
}

/// Arguments of a `(value, row, index)` column function, owned.
pub type FacetArgs = (Option<Value>, Row, usize);

pub fn facet_args(value: CellValue<'_>, row: &Row, index: usize) -> FacetArgs {
    (value.to_value(), row.clone(), index)
}

/// The two-field row most cell tests use.
pub fn sample_row() -> Row {
    Row::from_json(json!({ "id": 1, "name": "A" })).unwrap()
}

/// `quantity` products: `{ id, name: "Item name {id}", price: 2100 + id }`.
pub fn products(quantity: usize) -> Vec<Row> {
    (0..quantity)
        .map(|index| {
            Row::new()
                .with("id", index)
                .with("name", format!("Item name {index}"))
                .with("price", 2100 + index)
        })
        .collect()
}

/// `quantity` jobs with owner and type cycling through small ranges.
pub fn jobs(quantity: usize) -> Vec<Row> {
    (0..quantity)
        .map(|index| {
            Row::new()
                .with("id", index)
                .with("name", format!("Job name {index}"))
                .with("owner", index % 3)
                .with("type", index % 5)
        })
        .collect()
}
