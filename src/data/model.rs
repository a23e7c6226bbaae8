//! Dataset Model
//! Parsed records and the per-chart key interpretation.

use std::fmt;

/// How the first field of each line is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Key must parse as a number (line and pie charts).
    #[default]
    Numeric,
    /// Key is kept as a text label (bar charts).
    Label,
}

/// First field of a record.
///
/// Numeric keys keep their trimmed source text so labels show `1.50` or `01`
/// exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Number { value: f64, text: String },
    Label(String),
}

impl Key {
    pub fn number(value: f64, text: impl Into<String>) -> Self {
        Key::Number {
            value,
            text: text.into(),
        }
    }

    /// Numeric value of the key, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Key::Number { value, .. } => Some(*value),
            Key::Label(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Number { text, .. } | Key::Label(text) => f.write_str(text),
        }
    }
}

/// One `key,value` line of the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: Key,
    pub value: f64,
}

/// Validated records in file order, plus the optional `xlabel:` override.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub x_label: Option<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>, x_label: Option<String>) -> Self {
        Self { records, x_label }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys rendered as text, in record order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.key.to_string()).collect()
    }

    /// Values in record order.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }
}
