//! Code writer for emitting properly indented OpenSCAD source.

use super::Indent;

/// Accumulates the text of one source document.
///
/// Every statement starts on a fresh line via [`fill`](Self::fill), which
/// prepends a newline and the current indentation. Inline fragments such as
/// separators and delimiters go through [`write`](Self::write).
///
/// # Example
///
/// ```
/// use scadkit_codegen::CodeWriter;
///
/// let mut writer = CodeWriter::default();
/// writer.fill("union()");
/// writer.block(|w| {
///     w.fill("cube(1);");
/// });
///
/// assert_eq!(writer.source(), "\nunion(){\n    cube(1);\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeWriter {
    /// Create a new CodeWriter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Start a new line at the current indentation and append `text`.
    pub fn fill(&mut self, text: &str) -> &mut Self {
        self.buffer.push('\n');
        self.write_indent();
        self.buffer.push_str(text);
        self
    }

    /// Append `text` verbatim.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Emit a brace-delimited block.
    ///
    /// Writes `{`, runs `f` one indentation level deeper, then places the
    /// closing `}` on its own line at the original level.
    pub fn block<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.write("{");
        let level = self.indent_level;
        self.indent_level += 1;
        f(self);
        self.indent_level = level;
        self.fill("}")
    }

    /// Wrap whatever `f` emits between `start` and `end`, without touching indentation.
    pub fn delimit<F>(&mut self, start: &str, end: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.write(start);
        f(self);
        self.write(end)
    }

    /// Call `emit` for each item, calling `separator` strictly between items.
    ///
    /// The iterator is walked exactly once.
    ///
    /// ```
    /// use scadkit_codegen::CodeWriter;
    ///
    /// let mut writer = CodeWriter::default();
    /// writer.interleave(["a", "b", "c"], |w| { w.write(", "); }, |w, item| { w.write(item); });
    /// assert_eq!(writer.source(), "a, b, c");
    /// ```
    pub fn interleave<I, S, F>(&mut self, items: I, mut separator: S, mut emit: F) -> &mut Self
    where
        I: IntoIterator,
        S: FnMut(&mut Self),
        F: FnMut(&mut Self, I::Item),
    {
        let mut items = items.into_iter();
        if let Some(first) = items.next() {
            emit(self, first);
            for item in items {
                separator(self);
                emit(self, item);
            }
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the accumulated source.
    pub fn source(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the accumulated source.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.push_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::SCAD)
    }
}
