use std::fmt;

/// A single typed cell. Every cell carries its own tag rather than the
/// column declaring one type, so a sloppy source column can mix integers
/// and text without the loader guessing wrong for the whole column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl Value {
    /// Classify a raw CSV field.
    ///
    /// Rules, in order: trim whitespace; empty or a literal `NaN` spelling
    /// (any case) → `Missing`; case-insensitive `true`/`false` → `Bool`;
    /// parses as `i64` → `Int`; parses as a finite `f64` → `Float` (so
    /// `"1.0"` is a float, never text); anything else → `Text` of the
    /// trimmed field. Infinite spellings like `inf` stay text: only finite
    /// floats are representable cells.
    pub fn infer(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_nan() {
                return Value::Missing;
            }
            if f.is_finite() {
                return Value::Float(f);
            }
        }
        Value::Text(trimmed.to_string())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Human-readable tag name, used in value-type error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "text",
            Value::Missing => "missing",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            // Keep a trailing ".0" so float columns stay visually distinct
            // from integer columns in previews.
            Value::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.1}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => write!(f, "NaN"),
        }
    }
}

/// Cell-level transform failure; `Table::apply` attaches the column name
/// and row index when surfacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

/// Uppercase the first character of a text cell, leaving the rest as-is.
/// `Missing` passes through untouched; every other variant is rejected.
pub fn capitalize(value: &Value) -> Result<Value, TypeMismatch> {
    match value {
        Value::Text(s) => {
            let mut chars = s.chars();
            let out = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            Ok(Value::Text(out))
        }
        Value::Missing => Ok(Value::Missing),
        other => Err(TypeMismatch {
            expected: "text",
            found: other.kind(),
        }),
    }
}
