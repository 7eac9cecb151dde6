//! Tagged cell values.
//!
//! Spreadsheet cells carry text, numbers, or nothing. The explicit tag keeps
//! comparison and serialization logic exhaustive instead of duck-typed.

use serde::ser::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text form used for table rendering and string comparison.
    /// Integral numbers render without a fractional part.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => {
                if is_integral(*number) {
                    format!("{}", *number as i64)
                } else {
                    number.to_string()
                }
            }
            Self::Empty => String::new(),
        }
    }
}

fn is_integral(number: f64) -> bool {
    number.is_finite() && number.fract() == 0.0 && number.abs() < 9.007_199_254_740_992e15
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            // 30, not 30.0 - the source format does not distinguish the two.
            Self::Number(number) if is_integral(*number) => {
                serializer.serialize_i64(*number as i64)
            }
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::Empty => serializer.serialize_unit(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}
