//! Indentation configuration for emitted source.

use std::fmt;

/// Indentation style for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the OpenSCAD house style.
    pub const SCAD: Self = Self::Spaces(4);

    /// Append `level` indentation units to `buffer`.
    pub fn push_to(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', usize::from(*width) * level));
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unit = String::new();
        self.push_to(&mut unit, 1);
        f.write_str(&unit)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SCAD
    }
}
