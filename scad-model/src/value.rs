//! Parameter values.

use std::fmt;

/// A value passed to an OpenSCAD command.
///
/// `Display` produces the source text for the value. Strings and
/// identifiers are emitted as-is; quoting a string literal is up to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean, rendered as `true` / `false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value. Non-finite values are passed through
    /// unchecked and render as `NaN` / `inf`, which OpenSCAD rejects.
    Float(f64),
    /// String content, emitted verbatim.
    Str(String),
    /// Raw identifier or expression, emitted verbatim.
    Ident(String),
    /// Vector of values, e.g. a size `[1, 2, 3]` or a matrix.
    Array(Vec<Value>),
}

impl Value {
    /// Create a boolean value.
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create an integer value.
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create a float value.
    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::Str(v.into())
    }

    /// Create an identifier/expression value.
    pub fn ident(v: impl Into<String>) -> Self {
        Self::Ident(v.into())
    }

    /// Create a vector value from anything convertible to values.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) | Self::Ident(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::array(items)
    }
}
