//! Invertible editing commands.
//!
//! # Overview
//!
//! Every change to a [`TextBuffer`] is made by a command. A command is a small two-state
//! object: *pending* until [`execute`](EditCommand::execute) runs, *executed* afterwards, and
//! back to pending after [`undo`](EditCommand::undo). The cycle can repeat indefinitely; redo is
//! simply another `execute`.
//!
//! The cursor a command was built from (`cursor_before`) is fixed at construction. Everything
//! else (the clamped column, the text removed, the halves of a split, which backspace behaviour
//! applied) is captured on the **first** execution and reused verbatim on every replay, so undo
//! never has to re-derive state from the buffer.
//!
//! - [`InsertText`]: insert single-line text at the cursor
//! - [`SplitLine`]: the Enter key
//! - [`Backspace`]: delete the previous character, or merge with the previous line
//! - [`DeleteRange`]: delete a run of characters on one line
//!
//! # Example
//!
//! ```rust
//! use lineedit_core::{Backspace, EditCommand, Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("ab\ncd");
//! let mut backspace = Backspace::new(Position::new(1, 0));
//!
//! backspace.execute(&mut buffer);
//! assert_eq!(buffer.lines(), &["abcd"]);
//! assert_eq!(backspace.cursor_after(), Some(Position::new(0, 2)));
//!
//! backspace.undo(&mut buffer);
//! assert_eq!(buffer.lines(), &["ab", "cd"]);
//! ```

use crate::buffer::byte_index;
use crate::{LineDelta, Position, TextBuffer};

/// Shared behaviour of all editing commands.
pub trait EditCommand {
    /// Apply the command. Returns the lines it changed, or `None` for a no-op.
    ///
    /// Must not be called on a command that is already executed.
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta>;

    /// Revert the command. Returns the lines it changed, or `None` for a no-op.
    ///
    /// Must only be called on an executed command.
    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta>;

    /// The cursor the command was created from.
    fn cursor_before(&self) -> Position;

    /// The cursor after the command, known once it has executed at least once.
    fn cursor_after(&self) -> Option<Position>;

    /// Whether the command is currently applied to the buffer.
    fn is_executed(&self) -> bool;
}

/// Insert text at the cursor.
///
/// The text must not contain line breaks; use [`SplitLine`] for those.
/// [`EditorSession::insert_text`](crate::EditorSession::insert_text) does the splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertText {
    text: String,
    cursor_before: Position,
    outcome: Option<InsertOutcome>,
    executed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertOutcome {
    Inserted { at: Position, len: usize },
    Skipped,
}

impl InsertText {
    /// Create an insert of `text` at `cursor`.
    ///
    /// `text` is not validated. A line break inside it is stored verbatim in the line, in debug
    /// and release builds alike, and is still removed exactly by undo.
    pub fn new(cursor: Position, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor_before: cursor,
            outcome: None,
            executed: false,
        }
    }

    /// The inserted text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn resolve(&self, buffer: &TextBuffer) -> InsertOutcome {
        let line = self.cursor_before.line;
        match buffer.get_line(line) {
            Some(text) => InsertOutcome::Inserted {
                at: Position::new(line, self.cursor_before.column.min(text.chars().count())),
                len: self.text.chars().count(),
            },
            None => {
                tracing::warn!(cursor = %self.cursor_before, "insert addressed a missing line");
                InsertOutcome::Skipped
            }
        }
    }
}

impl EditCommand for InsertText {
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(!self.executed, "command executed twice");
        if self.outcome.is_none() {
            self.outcome = Some(self.resolve(buffer));
        }
        self.executed = true;

        match self.outcome? {
            InsertOutcome::Inserted { at, len } if len > 0 => {
                buffer.insert_at(at.line, at.column, &self.text)?;
                Some(LineDelta::in_place(at.line))
            }
            _ => None,
        }
    }

    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(self.executed, "undo of a command that is not executed");
        if !std::mem::replace(&mut self.executed, false) {
            return None;
        }

        match self.outcome? {
            InsertOutcome::Inserted { at, len } if len > 0 => {
                buffer.delete_range(at.line, at.column, len)?;
                Some(LineDelta::in_place(at.line))
            }
            _ => None,
        }
    }

    fn cursor_before(&self) -> Position {
        self.cursor_before
    }

    fn cursor_after(&self) -> Option<Position> {
        self.outcome.map(|outcome| match outcome {
            InsertOutcome::Inserted { at, len } => at.with_column(at.column + len),
            InsertOutcome::Skipped => self.cursor_before,
        })
    }

    fn is_executed(&self) -> bool {
        self.executed
    }
}

/// Split the cursor line in two (the Enter key).
///
/// The prefix stays on the original line, the suffix becomes a new line right after it, and
/// the cursor lands at the start of the new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    cursor_before: Position,
    outcome: Option<SplitOutcome>,
    executed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SplitOutcome {
    Split {
        line: usize,
        prefix: String,
        suffix: String,
    },
    Skipped,
}

impl SplitLine {
    /// Create a split at `cursor`.
    pub fn new(cursor: Position) -> Self {
        Self {
            cursor_before: cursor,
            outcome: None,
            executed: false,
        }
    }

    fn resolve(&self, buffer: &TextBuffer) -> SplitOutcome {
        let line = self.cursor_before.line;
        let Some(text) = buffer.get_line(line) else {
            tracing::warn!(cursor = %self.cursor_before, "split addressed a missing line");
            return SplitOutcome::Skipped;
        };
        let (prefix, suffix) = text.split_at(byte_index(text, self.cursor_before.column));
        SplitOutcome::Split {
            line,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

impl EditCommand for SplitLine {
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(!self.executed, "command executed twice");
        if self.outcome.is_none() {
            self.outcome = Some(self.resolve(buffer));
        }
        self.executed = true;

        match self.outcome.as_ref()? {
            SplitOutcome::Split {
                line,
                prefix,
                suffix,
            } => {
                buffer.replace_line(*line, prefix.clone())?;
                buffer.insert_line(*line + 1, suffix.clone());
                Some(LineDelta::new(*line, 1, 2))
            }
            SplitOutcome::Skipped => None,
        }
    }

    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(self.executed, "undo of a command that is not executed");
        if !std::mem::replace(&mut self.executed, false) {
            return None;
        }

        match self.outcome.as_ref()? {
            SplitOutcome::Split {
                line,
                prefix,
                suffix,
            } => {
                buffer.replace_line(*line, format!("{prefix}{suffix}"))?;
                buffer.remove_line(*line + 1);
                Some(LineDelta::new(*line, 2, 1))
            }
            SplitOutcome::Skipped => None,
        }
    }

    fn cursor_before(&self) -> Position {
        self.cursor_before
    }

    fn cursor_after(&self) -> Option<Position> {
        self.outcome.as_ref().map(|outcome| match outcome {
            SplitOutcome::Split { line, .. } => Position::new(line + 1, 0),
            SplitOutcome::Skipped => self.cursor_before,
        })
    }

    fn is_executed(&self) -> bool {
        self.executed
    }
}

/// What a [`Backspace`] did on its first execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackspaceEffect {
    /// Deleted the character before the cursor.
    DeletedChar,
    /// Merged the cursor line into the end of the previous line.
    MergedLines,
    /// Nothing to delete (start of document, or a missing line).
    Nothing,
}

/// Delete backwards from the cursor.
///
/// The behaviour is chosen when the command first executes, not when it is built:
/// - column > 0: delete the character before the cursor
/// - column 0 on a later line: merge the line into the previous one
/// - start of the document: no-op
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backspace {
    cursor_before: Position,
    outcome: Option<BackspaceOutcome>,
    executed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BackspaceOutcome {
    DeleteChar {
        at: Position,
        removed: String,
    },
    /// `line` is the surviving (previous) line. Both original texts are kept so undo restores
    /// them from the snapshot rather than re-splitting the merged text.
    MergeLines {
        line: usize,
        previous: String,
        removed: String,
    },
    Nothing,
}

impl Backspace {
    /// Create a backspace at `cursor`.
    pub fn new(cursor: Position) -> Self {
        Self {
            cursor_before: cursor,
            outcome: None,
            executed: false,
        }
    }

    /// Which behaviour applied, once executed.
    pub fn effect(&self) -> Option<BackspaceEffect> {
        self.outcome.as_ref().map(|outcome| match outcome {
            BackspaceOutcome::DeleteChar { .. } => BackspaceEffect::DeletedChar,
            BackspaceOutcome::MergeLines { .. } => BackspaceEffect::MergedLines,
            BackspaceOutcome::Nothing => BackspaceEffect::Nothing,
        })
    }

    fn resolve(&self, buffer: &TextBuffer) -> BackspaceOutcome {
        let line = self.cursor_before.line;
        let Some(text) = buffer.get_line(line) else {
            tracing::warn!(cursor = %self.cursor_before, "backspace addressed a missing line");
            return BackspaceOutcome::Nothing;
        };

        let column = self.cursor_before.column.min(text.chars().count());
        if column > 0 {
            let start = byte_index(text, column - 1);
            let end = byte_index(text, column);
            return BackspaceOutcome::DeleteChar {
                at: Position::new(line, column - 1),
                removed: text[start..end].to_string(),
            };
        }

        if line > 0 {
            return BackspaceOutcome::MergeLines {
                line: line - 1,
                previous: buffer.line(line - 1).to_string(),
                removed: text.to_string(),
            };
        }

        BackspaceOutcome::Nothing
    }
}

impl EditCommand for Backspace {
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(!self.executed, "command executed twice");
        if self.outcome.is_none() {
            self.outcome = Some(self.resolve(buffer));
        }
        self.executed = true;

        match self.outcome.as_ref()? {
            BackspaceOutcome::DeleteChar { at, .. } => {
                buffer.delete_range(at.line, at.column, 1)?;
                Some(LineDelta::in_place(at.line))
            }
            BackspaceOutcome::MergeLines {
                line,
                previous,
                removed,
            } => {
                buffer.replace_line(*line, format!("{previous}{removed}"))?;
                buffer.remove_line(*line + 1);
                Some(LineDelta::new(*line, 2, 1))
            }
            BackspaceOutcome::Nothing => None,
        }
    }

    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(self.executed, "undo of a command that is not executed");
        if !std::mem::replace(&mut self.executed, false) {
            return None;
        }

        match self.outcome.as_ref()? {
            BackspaceOutcome::DeleteChar { at, removed } => {
                buffer.insert_at(at.line, at.column, removed)?;
                Some(LineDelta::in_place(at.line))
            }
            BackspaceOutcome::MergeLines {
                line,
                previous,
                removed,
            } => {
                buffer.replace_line(*line, previous.clone())?;
                buffer.insert_line(*line + 1, removed.clone());
                Some(LineDelta::new(*line, 1, 2))
            }
            BackspaceOutcome::Nothing => None,
        }
    }

    fn cursor_before(&self) -> Position {
        self.cursor_before
    }

    fn cursor_after(&self) -> Option<Position> {
        self.outcome.as_ref().map(|outcome| match outcome {
            BackspaceOutcome::DeleteChar { at, .. } => *at,
            BackspaceOutcome::MergeLines { line, previous, .. } => {
                Position::new(*line, previous.chars().count())
            }
            BackspaceOutcome::Nothing => self.cursor_before,
        })
    }

    fn is_executed(&self) -> bool {
        self.executed
    }
}

/// Delete up to `length` characters on a single line, starting at `start`.
///
/// The start column and the end of the range are clamped to the line length. The cursor ends up
/// at the (clamped) start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRange {
    start: Position,
    length: usize,
    cursor_before: Position,
    outcome: Option<DeleteOutcome>,
    executed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DeleteOutcome {
    Deleted { at: Position, removed: String },
    Skipped,
}

impl DeleteRange {
    /// Create a deletion of `length` characters at `start`, issued while the cursor was at
    /// `cursor`.
    pub fn new(cursor: Position, start: Position, length: usize) -> Self {
        Self {
            start,
            length,
            cursor_before: cursor,
            outcome: None,
            executed: false,
        }
    }

    /// The text removed by the first execution, if any.
    pub fn removed_text(&self) -> Option<&str> {
        match self.outcome.as_ref()? {
            DeleteOutcome::Deleted { removed, .. } => Some(removed),
            DeleteOutcome::Skipped => None,
        }
    }

    fn resolve(&self, buffer: &TextBuffer) -> DeleteOutcome {
        let Some(text) = buffer.get_line(self.start.line) else {
            tracing::warn!(start = %self.start, "delete addressed a missing line");
            return DeleteOutcome::Skipped;
        };
        let column = self.start.column.min(text.chars().count());
        let start = byte_index(text, column);
        let end = byte_index(text, column.saturating_add(self.length));
        DeleteOutcome::Deleted {
            at: self.start.with_column(column),
            removed: text[start..end].to_string(),
        }
    }
}

impl EditCommand for DeleteRange {
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(!self.executed, "command executed twice");
        if self.outcome.is_none() {
            self.outcome = Some(self.resolve(buffer));
        }
        self.executed = true;

        match self.outcome.as_ref()? {
            DeleteOutcome::Deleted { at, removed } if !removed.is_empty() => {
                buffer.delete_range(at.line, at.column, removed.chars().count())?;
                Some(LineDelta::in_place(at.line))
            }
            _ => None,
        }
    }

    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        debug_assert!(self.executed, "undo of a command that is not executed");
        if !std::mem::replace(&mut self.executed, false) {
            return None;
        }

        match self.outcome.as_ref()? {
            DeleteOutcome::Deleted { at, removed } if !removed.is_empty() => {
                buffer.insert_at(at.line, at.column, removed)?;
                Some(LineDelta::in_place(at.line))
            }
            _ => None,
        }
    }

    fn cursor_before(&self) -> Position {
        self.cursor_before
    }

    fn cursor_after(&self) -> Option<Position> {
        self.outcome.as_ref().map(|outcome| match outcome {
            DeleteOutcome::Deleted { at, .. } => *at,
            DeleteOutcome::Skipped => self.cursor_before,
        })
    }

    fn is_executed(&self) -> bool {
        self.executed
    }
}

/// The closed set of editing commands, as stored by the undo/redo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// See [`InsertText`].
    InsertText(InsertText),
    /// See [`SplitLine`].
    SplitLine(SplitLine),
    /// See [`Backspace`].
    Backspace(Backspace),
    /// See [`DeleteRange`].
    DeleteRange(DeleteRange),
}

impl Command {
    /// Short name of the variant, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertText(_) => "insert_text",
            Command::SplitLine(_) => "split_line",
            Command::Backspace(_) => "backspace",
            Command::DeleteRange(_) => "delete_range",
        }
    }

    fn as_dyn(&self) -> &dyn EditCommand {
        match self {
            Command::InsertText(cmd) => cmd,
            Command::SplitLine(cmd) => cmd,
            Command::Backspace(cmd) => cmd,
            Command::DeleteRange(cmd) => cmd,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn EditCommand {
        match self {
            Command::InsertText(cmd) => cmd,
            Command::SplitLine(cmd) => cmd,
            Command::Backspace(cmd) => cmd,
            Command::DeleteRange(cmd) => cmd,
        }
    }
}

impl EditCommand for Command {
    fn execute(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        self.as_dyn_mut().execute(buffer)
    }

    fn undo(&mut self, buffer: &mut TextBuffer) -> Option<LineDelta> {
        self.as_dyn_mut().undo(buffer)
    }

    fn cursor_before(&self) -> Position {
        self.as_dyn().cursor_before()
    }

    fn cursor_after(&self) -> Option<Position> {
        self.as_dyn().cursor_after()
    }

    fn is_executed(&self) -> bool {
        self.as_dyn().is_executed()
    }
}

impl From<InsertText> for Command {
    fn from(cmd: InsertText) -> Self {
        Command::InsertText(cmd)
    }
}

impl From<SplitLine> for Command {
    fn from(cmd: SplitLine) -> Self {
        Command::SplitLine(cmd)
    }
}

impl From<Backspace> for Command {
    fn from(cmd: Backspace) -> Self {
        Command::Backspace(cmd)
    }
}

impl From<DeleteRange> for Command {
    fn from(cmd: DeleteRange) -> Self {
        Command::DeleteRange(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_and_revert(text: &str, mut cmd: Command) -> (TextBuffer, Command) {
        let original = TextBuffer::from_text(text);
        let mut buffer = original.clone();
        cmd.execute(&mut buffer);
        let executed = buffer.clone();
        cmd.undo(&mut buffer);
        assert_eq!(buffer, original, "undo did not restore {:?}", cmd.name());
        (executed, cmd)
    }

    #[test]
    fn test_insert_text() {
        let (after, cmd) =
            run_and_revert("hello", InsertText::new(Position::new(0, 5), ", world").into());
        assert_eq!(after.lines(), &["hello, world"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 12)));
        assert!(!cmd.is_executed());
    }

    #[test]
    fn test_insert_text_clamps_stale_column() {
        let (after, cmd) = run_and_revert("ab", InsertText::new(Position::new(0, 10), "c").into());
        assert_eq!(after.lines(), &["abc"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 3)));
        assert_eq!(cmd.cursor_before(), Position::new(0, 10));
    }

    #[test]
    fn test_insert_text_missing_line_is_noop() {
        let mut buffer = TextBuffer::from_text("ab");
        let mut cmd = InsertText::new(Position::new(4, 0), "x");
        assert_eq!(cmd.execute(&mut buffer), None);
        assert_eq!(buffer.lines(), &["ab"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(4, 0)));
        assert_eq!(cmd.undo(&mut buffer), None);
        assert_eq!(buffer.lines(), &["ab"]);
    }

    #[test]
    fn test_insert_text_with_line_break_is_not_validated() {
        let (after, cmd) = run_and_revert("ab", InsertText::new(Position::new(0, 1), "x\ny").into());
        assert_eq!(after.lines(), &["ax\nyb"]);
        assert_eq!(after.line_count(), 1);
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 4)));
    }

    #[test]
    fn test_split_line_middle() {
        let mut buffer = TextBuffer::from_text("hello world");
        let mut cmd = SplitLine::new(Position::new(0, 5));
        assert_eq!(cmd.execute(&mut buffer), Some(LineDelta::new(0, 1, 2)));
        assert_eq!(buffer.lines(), &["hello", " world"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(1, 0)));
        assert_eq!(cmd.undo(&mut buffer), Some(LineDelta::new(0, 2, 1)));
        assert_eq!(buffer.lines(), &["hello world"]);
    }

    #[test]
    fn test_split_line_at_boundaries() {
        let (after, cmd) = run_and_revert("hello", SplitLine::new(Position::new(0, 5)).into());
        assert_eq!(after.lines(), &["hello", ""]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(1, 0)));

        let (after, _) = run_and_revert("hello", SplitLine::new(Position::new(0, 0)).into());
        assert_eq!(after.lines(), &["", "hello"]);

        let (after, _) = run_and_revert("hi", SplitLine::new(Position::new(0, 42)).into());
        assert_eq!(after.lines(), &["hi", ""]);
    }

    #[test]
    fn test_backspace_deletes_char() {
        let mut buffer = TextBuffer::from_text("añb");
        let mut cmd = Backspace::new(Position::new(0, 2));
        cmd.execute(&mut buffer);
        assert_eq!(buffer.lines(), &["ab"]);
        assert_eq!(cmd.effect(), Some(BackspaceEffect::DeletedChar));
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 1)));
        cmd.undo(&mut buffer);
        assert_eq!(buffer.lines(), &["añb"]);
    }

    #[test]
    fn test_backspace_merges_lines() {
        let mut buffer = TextBuffer::from_text("ab\ncd\nef");
        let mut cmd = Backspace::new(Position::new(1, 0));
        assert_eq!(cmd.execute(&mut buffer), Some(LineDelta::new(0, 2, 1)));
        assert_eq!(buffer.lines(), &["abcd", "ef"]);
        assert_eq!(cmd.effect(), Some(BackspaceEffect::MergedLines));
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 2)));
        assert_eq!(cmd.undo(&mut buffer), Some(LineDelta::new(0, 1, 2)));
        assert_eq!(buffer.lines(), &["ab", "cd", "ef"]);
    }

    #[test]
    fn test_backspace_at_document_start_is_noop() {
        let mut buffer = TextBuffer::from_text("ab");
        let mut cmd = Backspace::new(Position::zero());
        assert_eq!(cmd.execute(&mut buffer), None);
        assert_eq!(cmd.effect(), Some(BackspaceEffect::Nothing));
        assert_eq!(cmd.cursor_after(), Some(Position::zero()));
        assert_eq!(cmd.undo(&mut buffer), None);
        assert_eq!(cmd.execute(&mut buffer), None);
        assert_eq!(buffer.lines(), &["ab"]);
    }

    #[test]
    fn test_backspace_behaviour_chosen_at_execution() {
        // Built at column 1, but the line shrank to empty before execution: merge instead.
        let mut buffer = TextBuffer::from_text("x\n");
        let mut cmd = Backspace::new(Position::new(1, 1));
        cmd.execute(&mut buffer);
        assert_eq!(cmd.effect(), Some(BackspaceEffect::MergedLines));
        assert_eq!(buffer.lines(), &["x"]);
        cmd.undo(&mut buffer);
        assert_eq!(buffer.lines(), &["x", ""]);
    }

    #[test]
    fn test_delete_range() {
        let (after, cmd) = run_and_revert(
            "let value = 1;",
            DeleteRange::new(Position::new(0, 14), Position::new(0, 4), 6).into(),
        );
        assert_eq!(after.lines(), &["let = 1;"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 4)));
        match cmd {
            Command::DeleteRange(cmd) => assert_eq!(cmd.removed_text(), Some("value ")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_delete_range_clamps_to_line_end() {
        let (after, _) = run_and_revert(
            "abc",
            DeleteRange::new(Position::zero(), Position::new(0, 1), 99).into(),
        );
        assert_eq!(after.lines(), &["a"]);
    }

    #[test]
    fn test_replay_uses_recorded_outcome() {
        let mut buffer = TextBuffer::from_text("ab\ncd");
        let mut cmd = Command::from(Backspace::new(Position::new(1, 0)));
        cmd.execute(&mut buffer);
        cmd.undo(&mut buffer);
        cmd.execute(&mut buffer);
        assert_eq!(buffer.lines(), &["abcd"]);
        assert_eq!(cmd.cursor_after(), Some(Position::new(0, 2)));
        assert!(cmd.is_executed());
    }
}
