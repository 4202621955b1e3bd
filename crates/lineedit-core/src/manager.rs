//! Command execution and undo/redo.
//!
//! [`CommandManager`] owns the [`TextBuffer`] and the cursor. Executing a command through it is
//! the only way the document changes; undo and redo replay the very same command objects, so the
//! buffer and cursor return to bit-identical earlier states.
//!
//! # Example
//!
//! ```rust
//! use lineedit_core::{CommandManager, InsertText, Position, SplitLine, TextBuffer};
//!
//! let mut manager = CommandManager::new(TextBuffer::from_text("hello"));
//! manager.execute(SplitLine::new(Position::new(0, 5)));
//! manager.execute(InsertText::new(manager.cursor(), "world"));
//! assert_eq!(manager.buffer().text(), "hello\nworld");
//!
//! manager.undo();
//! manager.undo();
//! assert_eq!(manager.buffer().text(), "hello");
//! assert_eq!(manager.cursor(), Position::new(0, 5));
//! ```

use crate::{Command, EditCommand, LineDelta, Position, TextBuffer};

/// Options for a [`CommandManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptions {
    /// Maximum number of commands kept on the undo stack.
    ///
    /// `None` (the default) keeps every command, so the whole session can be undone. With a cap,
    /// the oldest command is dropped once the limit is reached and undo can no longer reach the
    /// state the session started from.
    pub max_undo_depth: Option<usize>,
}

impl EditorOptions {
    /// Options with the undo stack capped at `depth` commands.
    pub fn with_max_undo_depth(depth: usize) -> Self {
        Self {
            max_undo_depth: Some(depth),
        }
    }
}

/// Outcome of an execute, undo or redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Lines changed, or `None` if the buffer is unchanged.
    pub delta: Option<LineDelta>,
    /// Cursor before the operation.
    pub cursor_before: Position,
    /// Cursor after the operation.
    pub cursor_after: Position,
}

impl CommandResult {
    /// Returns `true` if neither the buffer nor the cursor changed.
    pub fn is_noop(&self) -> bool {
        self.delta.is_none() && self.cursor_before == self.cursor_after
    }
}

#[derive(Debug)]
struct HistoryEntry {
    command: Command,
    /// Whether the first execution changed the buffer. Replays behave identically.
    changed: bool,
}

#[derive(Debug)]
struct UndoRedoManager {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_undo: Option<usize>,
    /// Clean point tracking. Uses `undo_stack.len()` as the saved position in the linear history.
    /// When `redo_stack` is non-empty, `clean_index` may be greater than `undo_stack.len()`.
    clean_index: Option<usize>,
}

impl UndoRedoManager {
    fn new(max_undo: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            clean_index: Some(0),
        }
    }

    /// Entries between the current position and the clean point left the buffer untouched.
    fn is_clean(&self) -> bool {
        let Some(clean_index) = self.clean_index else {
            return false;
        };
        let current = self.undo_stack.len();
        if clean_index <= current {
            self.undo_stack[clean_index..].iter().all(|e| !e.changed)
        } else {
            // The redo stack is stored newest-undone last, so walk it from the top.
            let ahead = clean_index - current;
            ahead <= self.redo_stack.len()
                && self.redo_stack.iter().rev().take(ahead).all(|e| !e.changed)
        }
    }

    fn mark_clean(&mut self) {
        self.clean_index = Some(self.undo_stack.len());
    }

    fn clear_redo_and_adjust_clean(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }

        // A clean point in the redo area survives only if reaching it changed nothing.
        if let Some(clean_index) = self.clean_index
            && clean_index > self.undo_stack.len()
        {
            self.clean_index = if self.is_clean() {
                Some(self.undo_stack.len())
            } else {
                None
            };
        }

        self.redo_stack.clear();
    }

    fn push_executed(&mut self, command: Command, changed: bool) {
        self.clear_redo_and_adjust_clean();

        if let Some(max_undo) = self.max_undo
            && self.undo_stack.len() >= max_undo
        {
            if max_undo == 0 {
                if changed {
                    self.clean_index = None;
                }
                return;
            }
            let evicted = self.undo_stack.remove(0);
            self.clean_index = match self.clean_index {
                Some(0) if !evicted.changed => Some(0),
                Some(0) | None => None,
                Some(clean_index) => Some(clean_index - 1),
            };
        }

        self.undo_stack.push(HistoryEntry { command, changed });
    }
}

/// Executes commands against a buffer and keeps the undo/redo history.
pub struct CommandManager {
    buffer: TextBuffer,
    cursor: Position,
    history: UndoRedoManager,
}

impl CommandManager {
    /// Create a manager over `buffer`, cursor at the document start, unbounded history.
    pub fn new(buffer: TextBuffer) -> Self {
        Self::with_options(buffer, EditorOptions::default())
    }

    /// Create a manager with explicit options.
    pub fn with_options(buffer: TextBuffer, options: EditorOptions) -> Self {
        Self {
            buffer,
            cursor: Position::zero(),
            history: UndoRedoManager::new(options.max_undo_depth),
        }
    }

    /// Create a manager over a document text.
    pub fn from_text(text: &str) -> Self {
        Self::new(TextBuffer::from_text(text))
    }

    /// The document.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The shared cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move the cursor (e.g. after a click or arrow key). The position is clamped into the
    /// buffer; the clamped position is returned.
    pub fn set_cursor(&mut self, position: Position) -> Position {
        self.cursor = self.buffer.clamp_position(position);
        self.cursor
    }

    /// Execute a new command.
    ///
    /// The command is pushed onto the undo stack (even if it turned out to be a no-op), the redo
    /// stack is cleared, and the cursor moves to the command's after-position. A cursor aimed at a
    /// line that no longer exists is pulled back to the last line.
    pub fn execute(&mut self, command: impl Into<Command>) -> CommandResult {
        let mut command = command.into();
        let cursor_before = self.cursor;

        let delta = command.execute(&mut self.buffer);
        self.cursor = self.settle(command.cursor_after().unwrap_or(cursor_before));

        tracing::debug!(
            command = command.name(),
            from = %command.cursor_before(),
            to = %self.cursor,
            changed = delta.is_some(),
            "execute"
        );

        self.history.push_executed(command, delta.is_some());
        CommandResult {
            delta,
            cursor_before,
            cursor_after: self.cursor,
        }
    }

    /// Undo the most recent command. Returns `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<CommandResult> {
        let mut entry = self.history.undo_stack.pop()?;
        let cursor_before = self.cursor;

        let delta = entry.command.undo(&mut self.buffer);
        self.cursor = self.settle(entry.command.cursor_before());

        tracing::debug!(command = entry.command.name(), to = %self.cursor, "undo");

        self.history.redo_stack.push(entry);
        Some(CommandResult {
            delta,
            cursor_before,
            cursor_after: self.cursor,
        })
    }

    /// Redo the most recently undone command. Returns `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<CommandResult> {
        let mut entry = self.history.redo_stack.pop()?;
        let cursor_before = self.cursor;

        let delta = entry.command.execute(&mut self.buffer);
        self.cursor = self.settle(entry.command.cursor_after().unwrap_or(cursor_before));

        tracing::debug!(command = entry.command.name(), to = %self.cursor, "redo");

        self.history.undo_stack.push(entry);
        Some(CommandResult {
            delta,
            cursor_before,
            cursor_after: self.cursor,
        })
    }

    /// Keep a command's cursor on an existing line. The column may stay stale; it is clamped
    /// wherever it is used.
    fn settle(&self, position: Position) -> Position {
        let last = self.buffer.line_count() - 1;
        Position::new(position.line.min(last), position.column)
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.history.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.history.redo_stack.is_empty()
    }

    /// Undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.history.undo_stack.len()
    }

    /// Redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.history.redo_stack.len()
    }

    /// Returns `true` if the document equals the state recorded by [`mark_clean`](Self::mark_clean).
    ///
    /// Commands that changed nothing (a backspace at the document start, an empty insert) do not
    /// move the history away from the clean point.
    pub fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    /// Record the current history position as clean (e.g. after saving).
    pub fn mark_clean(&mut self) {
        self.history.mark_clean();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Backspace, InsertText, SplitLine};

    #[test]
    fn test_execute_moves_cursor() {
        let mut manager = CommandManager::from_text("");
        let result = manager.execute(InsertText::new(Position::zero(), "abc"));
        assert_eq!(result.delta, Some(LineDelta::in_place(0)));
        assert_eq!(manager.cursor(), Position::new(0, 3));
        assert_eq!(manager.buffer().text(), "abc");
    }

    #[test]
    fn test_undo_redo_empty_stacks() {
        let mut manager = CommandManager::from_text("x");
        assert!(manager.undo().is_none());
        assert!(manager.redo().is_none());
        assert_eq!(manager.buffer().text(), "x");
    }

    #[test]
    fn test_noop_command_is_recorded() {
        let mut manager = CommandManager::from_text("x");
        let result = manager.execute(Backspace::new(Position::zero()));
        assert!(result.is_noop());
        assert_eq!(manager.undo_depth(), 1);

        let undone = manager.undo().unwrap();
        assert!(undone.is_noop());
        assert_eq!(manager.buffer().text(), "x");
    }

    #[test]
    fn test_fresh_edit_clears_redo() {
        let mut manager = CommandManager::from_text("");
        manager.execute(InsertText::new(Position::zero(), "a"));
        manager.undo();
        assert!(manager.can_redo());

        manager.execute(InsertText::new(manager.cursor(), "b"));
        assert!(!manager.can_redo());
        assert!(manager.redo().is_none());
        assert_eq!(manager.buffer().text(), "b");
    }

    #[test]
    fn test_clean_point_tracking() {
        let mut manager = CommandManager::from_text("");
        assert!(manager.is_clean());

        manager.execute(InsertText::new(Position::zero(), "a"));
        assert!(!manager.is_clean());
        manager.mark_clean();
        assert!(manager.is_clean());

        manager.undo();
        assert!(!manager.is_clean());
        manager.redo();
        assert!(manager.is_clean());

        // Diverging from the saved state makes the clean point unreachable.
        manager.undo();
        manager.execute(SplitLine::new(manager.cursor()));
        assert!(!manager.is_clean());
        manager.undo();
        assert!(!manager.is_clean());
    }

    #[test]
    fn test_noop_commands_keep_clean_point() {
        let mut manager = CommandManager::from_text("abc");
        manager.execute(Backspace::new(Position::zero()));
        manager.execute(InsertText::new(Position::new(0, 1), ""));
        assert_eq!(manager.undo_depth(), 2);
        assert!(manager.is_clean());

        manager.execute(InsertText::new(Position::new(0, 1), "x"));
        assert!(!manager.is_clean());
        manager.undo();
        assert!(manager.is_clean());
        manager.undo();
        manager.undo();
        assert!(manager.is_clean());
    }

    #[test]
    fn test_clean_point_behind_noop_redo_survives_new_edit() {
        let mut manager = CommandManager::from_text("abc");
        manager.execute(Backspace::new(Position::zero()));
        manager.mark_clean();
        manager.undo();
        assert!(manager.is_clean());

        // Dropping the no-op redo entry leaves the saved text reachable.
        manager.execute(Backspace::new(Position::zero()));
        assert!(manager.is_clean());
        manager.execute(InsertText::new(Position::zero(), "x"));
        manager.undo();
        assert!(manager.is_clean());
    }

    #[test]
    fn test_evicting_noop_keeps_clean_point() {
        let mut manager = CommandManager::with_options(
            TextBuffer::from_text("ab"),
            EditorOptions::with_max_undo_depth(1),
        );
        manager.execute(Backspace::new(Position::zero()));
        manager.execute(InsertText::new(Position::zero(), "x"));
        assert_eq!(manager.undo_depth(), 1);
        manager.undo();
        assert!(manager.is_clean());
        assert_eq!(manager.buffer().text(), "ab");
    }

    #[test]
    fn test_cursor_stays_on_existing_line() {
        let mut manager = CommandManager::from_text("abc");
        let result = manager.execute(SplitLine::new(Position::new(3, 0)));
        assert_eq!(result.delta, None);
        assert_eq!(manager.cursor(), Position::new(0, 0));

        manager.undo();
        assert_eq!(manager.cursor(), Position::new(0, 0));
        manager.redo();
        assert!(manager.cursor().line < manager.buffer().line_count());
    }

    #[test]
    fn test_max_undo_depth_evicts_oldest() {
        let mut manager =
            CommandManager::with_options(TextBuffer::new(), EditorOptions::with_max_undo_depth(2));
        for ch in ["a", "b", "c"] {
            manager.execute(InsertText::new(manager.cursor(), ch));
        }
        assert_eq!(manager.undo_depth(), 2);
        while manager.undo().is_some() {}
        assert_eq!(manager.buffer().text(), "a");
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut manager = CommandManager::from_text("ab\ncde");
        assert_eq!(manager.set_cursor(Position::new(7, 7)), Position::new(1, 3));
        assert_eq!(manager.set_cursor(Position::new(0, 9)), Position::new(0, 2));
    }
}
