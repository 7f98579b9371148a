//! Borrowed view of a cell's raw value.

use std::fmt;

use serde_json::Value;

/// The raw value a column reads from a row.
///
/// `Undefined` means the row has no such field, which is distinct from an
/// explicit JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Undefined,
    Value(&'a Value),
}

impl<'a> CellValue<'a> {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_json(&self) -> Option<&'a Value> {
        match self {
            Self::Undefined => None,
            Self::Value(v) => Some(v),
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_json().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_json().and_then(Value::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_json().and_then(Value::as_f64)
    }

    /// Owned copy of the value, `None` when undefined.
    pub fn to_value(&self) -> Option<Value> {
        self.as_json().cloned()
    }
}

impl<'a> From<Option<&'a Value>> for CellValue<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Undefined, Self::Value)
    }
}

impl<'a> From<&'a Value> for CellValue<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

/// Script-style string conversion: `undefined`, `null`, integral numbers
/// without a fraction, exponent form for very large or small magnitudes,
/// arrays joined with `,` and objects as `[object Object]`.
impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Value(value) => write_value(value, f),
        }
    }
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                write!(f, "{i}")
            } else if let Some(u) = n.as_u64() {
                write!(f, "{u}")
            } else {
                write_float(n.as_f64().unwrap_or(f64::NAN), f)
            }
        }
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                if !item.is_null() {
                    write_value(item, f)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

/// Exponent form outside `[1e-6, 1e21)`, `-0` as `0`.
fn write_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x == 0.0 {
        return f.write_str("0");
    }
    let abs = x.abs();
    if abs.is_finite() && !(1e-6..1e21).contains(&abs) {
        let exp = format!("{x:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        };
    }
    // f64 Display already drops a zero fraction
    write!(f, "{x}")
}
