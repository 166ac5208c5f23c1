//! Command parameters.

use std::fmt;

use indexmap::IndexMap;

use crate::Value;

/// Leading character of a parameter name that selects special-variable rendering.
pub const SIGIL: char = '_';

/// One argument of a command: an optional name and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name, `None` for positional arguments.
    pub name: Option<String>,
    /// Parameter value.
    pub value: Value,
}

impl Param {
    /// Create a positional parameter.
    pub fn positional(value: impl Into<Value>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    /// Create a named parameter.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

/// Renders the parameter as it appears in an argument list.
///
/// - positional: `value`
/// - named: `name=value`
/// - named with a leading [`SIGIL`]: the name is replaced by `$` followed by
///   the value text minus its first character, so `_fn` with value `_fn` is
///   emitted as `$fn=_fn`. The original name is discarded.
///
/// An empty name counts as positional.
impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref() {
            Some(name) if name.starts_with(SIGIL) => {
                let value = self.value.to_string();
                let tail = value.char_indices().nth(1).map_or("", |(i, _)| &value[i..]);
                write!(f, "${tail}={value}")
            }
            Some(name) if !name.is_empty() => write!(f, "{name}={}", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

/// Ordered argument bag for a command.
///
/// Positional arguments always come first, followed by named arguments in
/// the order they were first inserted. Setting a name twice keeps its
/// original position and replaces the value.
///
/// # Example
///
/// ```
/// use scadkit_model::Args;
///
/// let args = Args::new().arg(10).kwarg("center", true);
/// let rendered: Vec<String> = args.into_params().iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["10", "center=true"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl Args {
    /// Create an empty argument bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Returns true if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Total number of arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Flatten into a parameter list: positional first, then named.
    pub fn into_params(self) -> Vec<Param> {
        let positional = self.positional.into_iter().map(|value| Param {
            name: None,
            value,
        });
        let named = self.named.into_iter().map(|(name, value)| Param {
            name: Some(name),
            value,
        });
        positional.chain(named).collect()
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::new()
    }
}
