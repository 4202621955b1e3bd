//! Line-oriented text storage.
//!
//! [`TextBuffer`] is the sole owner of document content: an ordered sequence of line strings,
//! never empty and never containing a line break. Reads are public; mutation is reserved to the
//! command layer ([`crate::commands`]), which always validates indices first.
//!
//! Columns are measured in characters (Unicode scalar values), not bytes.

use crate::Position;

/// An ordered, non-empty sequence of lines.
///
/// # Example
///
/// ```rust
/// use lineedit_core::TextBuffer;
///
/// let buffer = TextBuffer::from_text("fn main() {\n}");
/// assert_eq!(buffer.line_count(), 2);
/// assert_eq!(buffer.line(0), "fn main() {");
/// assert_eq!(buffer.text(), "fn main() {\n}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer from a document text.
    ///
    /// Splits on `'\n'` (N newlines give N+1 lines) and strips a trailing `'\r'` from each line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    /// Create a buffer from existing lines (e.g. read from a file by the host).
    ///
    /// An empty input yields `[""]`. Lines containing line breaks are split further so that the
    /// buffer never stores a line terminator.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = lines
            .into_iter()
            .flat_map(|line| split_lines(line.as_ref()))
            .collect();
        if out.is_empty() {
            out.push(String::new());
        }
        Self { lines: out }
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a line.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range. Reading a line that does not exist is a bug in the
    /// calling layer; use [`get_line`](Self::get_line) to probe.
    pub fn line(&self, line: usize) -> &str {
        match self.lines.get(line) {
            Some(text) => text,
            None => panic!(
                "line index {} out of range (buffer has {} lines)",
                line,
                self.lines.len()
            ),
        }
    }

    /// Text of a line, or `None` if `line` is out of range.
    pub fn get_line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Length of a line in characters.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range.
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).chars().count()
    }

    /// All lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The document text: lines joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Total character count, counting one character per line break.
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len() - 1
    }

    /// Returns `true` if the buffer holds a single empty line.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Clamp a position into the buffer: the line to the last line, the column to the line length.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let column = pos.column.min(self.line_len(line));
        Position::new(line, column)
    }

    /// Insert `text` into `line` at `column`.
    ///
    /// No-op (returns `None`) if `line` is out of range. `column` is clamped to the line length;
    /// the column actually used is returned.
    pub(crate) fn insert_at(&mut self, line: usize, column: usize, text: &str) -> Option<usize> {
        let target = self.lines.get_mut(line)?;
        let column = column.min(target.chars().count());
        let at = byte_index(target, column);
        target.insert_str(at, text);
        Some(column)
    }

    /// Delete up to `length` characters of `line` starting at `column`, returning the removed text.
    ///
    /// No-op (returns `None`) if `line` is out of range. Both ends are clamped to the line length.
    pub(crate) fn delete_range(
        &mut self,
        line: usize,
        column: usize,
        length: usize,
    ) -> Option<String> {
        let target = self.lines.get_mut(line)?;
        let start = byte_index(target, column);
        let end = byte_index(target, column.saturating_add(length));
        Some(target.drain(start..end).collect())
    }

    /// Replace the whole text of `line`, returning the previous text.
    pub(crate) fn replace_line(&mut self, line: usize, text: String) -> Option<String> {
        let target = self.lines.get_mut(line)?;
        Some(std::mem::replace(target, text))
    }

    /// Insert a new line so that it ends up at index `at` (`at == line_count()` appends).
    pub(crate) fn insert_line(&mut self, at: usize, text: String) -> bool {
        if at > self.lines.len() {
            return false;
        }
        self.lines.insert(at, text);
        true
    }

    /// Remove `line` and return its text. Refuses to remove the last remaining line.
    pub(crate) fn remove_line(&mut self, line: usize) -> Option<String> {
        if self.lines.len() <= 1 || line >= self.lines.len() {
            return None;
        }
        Some(self.lines.remove(line))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of character `column` in `line`, clamped to the end of the line.
pub(crate) fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(idx, _)| idx)
}

fn split_lines(text: &str) -> Vec<String> {
    // `split('\n')` keeps trailing empty segments, which is what editor line semantics want.
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
