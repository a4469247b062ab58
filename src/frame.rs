//! Tabular in-memory structure backing both harness flows
//!
//! A `Frame` is a header plus row-major cells. Cell types are inferred
//! loosely per field, so mixed-type columns are tolerated without a
//! whole-file inference pass.

use std::fmt;

/// A single cell with a loosely inferred type
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Missing,
}

impl Value {
    /// Infer a value from a raw CSV field.
    ///
    /// Empty fields become `Missing`; integer-looking fields become `Int`,
    /// float-looking fields `Float`, anything else is kept as text.
    pub fn infer(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(field.to_string())
    }

    /// Normalize to a comparable integer label.
    ///
    /// `Missing` and non-numeric text yield `None`. A `None` label never
    /// matches anything, including another `None`, so missing predictions
    /// always count as incorrect.
    pub fn binary_label(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            Value::Str(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Whether this cell holds no value
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Missing => Ok(()),
        }
    }
}

/// An ordered-column table loaded from (or destined for) CSV
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Create an empty frame with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Missing);
        self.rows.push(row);
    }

    /// Column headers in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Position of a named column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of a named column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }
}
