//! Observable editing session.
//!
//! [`EditorSession`] wraps a [`CommandManager`] and publishes the document to the presentation
//! layer. After every operation that changes the buffer or the cursor it:
//!
//! 1. recomputes the joined document text,
//! 2. increments the version number and records the [`LineDelta`],
//! 3. notifies subscribers with a [`DocumentChange`].
//!
//! All of this happens synchronously before the call returns, so a subscriber only ever observes
//! the fully post-edit document. Operations that change nothing (undo on an empty stack, a
//! backspace at the document start) neither bump the version nor notify.
//!
//! # Example
//!
//! ```rust
//! use lineedit_core::{ChangeKind, EditorSession};
//!
//! let mut session = EditorSession::new("say ");
//! session.subscribe(|change| {
//!     if change.kind == ChangeKind::Edit {
//!         println!("v{}: {:?}", change.new_version, change.text);
//!     }
//! });
//!
//! session.set_cursor_to_end();
//! session.insert_text("\"hello\"");
//! assert_eq!(&*session.text(), "say \"hello\"");
//! assert!(session.is_modified());
//!
//! session.undo();
//! assert_eq!(&*session.text(), "say ");
//! ```

use crate::{
    Backspace, Command, CommandManager, CommandResult, DeleteRange, DocumentProcessor,
    DocumentSink, DocumentSnapshot, EditorOptions, InsertText, LineDelta, LineEnding, Position,
    SplitLine, TextBuffer,
};
use std::sync::Arc;

/// What caused a [`DocumentChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A new command was executed.
    Edit,
    /// A command was undone.
    Undo,
    /// A command was redone.
    Redo,
    /// Only the cursor moved.
    CursorMoved,
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone)]
pub struct DocumentChange {
    /// Change type
    pub kind: ChangeKind,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
    /// The complete document text after the change.
    pub text: Arc<str>,
    /// Lines changed, if the buffer changed.
    pub delta: Option<LineDelta>,
    /// Cursor after the change.
    pub cursor: Position,
}

/// Change callback function type
pub type DocumentChangeCallback = Box<dyn FnMut(&DocumentChange) + Send>;

/// An editing session: the command layer plus observable document state.
pub struct EditorSession {
    manager: CommandManager,
    version: u64,
    document_version: u64,
    text: Arc<str>,
    line_ending: LineEnding,
    last_line_delta: Option<LineDelta>,
    callbacks: Vec<DocumentChangeCallback>,
}

impl EditorSession {
    /// Start a session on a document text. The preferred line ending is detected from it.
    pub fn new(text: &str) -> Self {
        let mut session = Self::with_buffer(TextBuffer::from_text(text), EditorOptions::default());
        session.line_ending = LineEnding::detect_in_text(text);
        session
    }

    /// Start a session on an empty document (`[""]`).
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Start a session on lines supplied by the host (e.g. read from an existing file).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_buffer(TextBuffer::from_lines(lines), EditorOptions::default())
    }

    /// Start a session on a buffer with explicit options.
    pub fn with_buffer(buffer: TextBuffer, options: EditorOptions) -> Self {
        let text = Arc::from(buffer.text());
        Self {
            manager: CommandManager::with_options(buffer, options),
            version: 0,
            document_version: 0,
            text,
            line_ending: LineEnding::default(),
            last_line_delta: None,
            callbacks: Vec::new(),
        }
    }

    /// The underlying command manager (read-only; edits go through the session).
    pub fn manager(&self) -> &CommandManager {
        &self.manager
    }

    /// The document.
    pub fn buffer(&self) -> &TextBuffer {
        self.manager.buffer()
    }

    /// The cursor.
    pub fn cursor(&self) -> Position {
        self.manager.cursor()
    }

    /// The published document text (lines joined with `'\n'`).
    pub fn text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// Current version number. Starts at 0 and increments on every observable change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if state has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Document version number. Starts at 0 and increments only when the buffer changes, so
    /// cursor moves do not invalidate derived state.
    pub fn document_version(&self) -> u64 {
        self.document_version
    }

    /// The lines changed by the buffer mutation that produced the current
    /// [`document_version`](Self::document_version).
    pub fn last_line_delta(&self) -> Option<LineDelta> {
        self.last_line_delta
    }

    /// Preferred line ending for saving.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Override the preferred line ending for saving.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Execute a command built by the input layer.
    pub fn execute(&mut self, command: impl Into<Command>) -> CommandResult {
        let result = self.manager.execute(command);
        self.publish(ChangeKind::Edit, &result);
        result
    }

    /// Undo the last command. Returns `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<CommandResult> {
        let result = self.manager.undo()?;
        self.publish(ChangeKind::Undo, &result);
        Some(result)
    }

    /// Redo the last undone command. Returns `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<CommandResult> {
        let result = self.manager.redo()?;
        self.publish(ChangeKind::Redo, &result);
        Some(result)
    }

    /// Move the cursor. The position is clamped into the document.
    pub fn set_cursor(&mut self, position: Position) -> Position {
        let cursor_before = self.manager.cursor();
        let cursor_after = self.manager.set_cursor(position);
        self.publish(
            ChangeKind::CursorMoved,
            &CommandResult {
                delta: None,
                cursor_before,
                cursor_after,
            },
        );
        cursor_after
    }

    /// Move the cursor to the end of the last line.
    pub fn set_cursor_to_end(&mut self) -> Position {
        let last = self.buffer().line_count() - 1;
        let column = self.buffer().line_len(last);
        self.set_cursor(Position::new(last, column))
    }

    /// Type `text` at the cursor.
    ///
    /// Line breaks (`"\n"` or `"\r\n"`) become [`SplitLine`] commands and the pieces between them
    /// [`InsertText`] commands, each recorded as its own undo step.
    pub fn insert_text(&mut self, text: &str) {
        for (idx, segment) in text.split('\n').enumerate() {
            if idx > 0 {
                self.split_line();
            }
            let segment = segment.strip_suffix('\r').unwrap_or(segment);
            if !segment.is_empty() {
                self.execute(InsertText::new(self.cursor(), segment));
            }
        }
    }

    /// Press Enter at the cursor.
    pub fn split_line(&mut self) -> CommandResult {
        self.execute(SplitLine::new(self.cursor()))
    }

    /// Press Backspace at the cursor.
    pub fn backspace(&mut self) -> CommandResult {
        self.execute(Backspace::new(self.cursor()))
    }

    /// Delete `length` characters on one line starting at `start`.
    pub fn delete_range(&mut self, start: Position, length: usize) -> CommandResult {
        self.execute(DeleteRange::new(self.cursor(), start, length))
    }

    /// Returns `true` if the document differs from the last saved state.
    pub fn is_modified(&self) -> bool {
        !self.manager.is_clean()
    }

    /// Mark the current document as saved.
    pub fn mark_saved(&mut self) {
        self.manager.mark_clean();
    }

    /// Take an immutable copy of the document.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            version: self.version,
            lines: self.buffer().lines().to_vec(),
            text: self.text(),
            line_ending: self.line_ending,
        }
    }

    /// The document text with the preferred line ending applied.
    pub fn text_for_saving(&self) -> String {
        self.line_ending.join(self.buffer().lines())
    }

    /// Hand the document to a storage or export collaborator. On success the session is marked
    /// saved.
    pub fn save_with<S>(&mut self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DocumentSink + ?Sized,
    {
        let snapshot = self.snapshot();
        sink.write(&snapshot)?;
        self.mark_saved();
        tracing::debug!(version = snapshot.version, "document saved");
        Ok(())
    }

    /// Bring a processor's derived state up to date.
    pub fn apply_processor<P>(&self, processor: &mut P) -> Result<(), P::Error>
    where
        P: DocumentProcessor + ?Sized,
    {
        processor.process(self)
    }

    /// Subscribe to change notifications
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&DocumentChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn publish(&mut self, kind: ChangeKind, result: &CommandResult) {
        if result.is_noop() {
            return;
        }

        if let Some(delta) = result.delta {
            self.text = Arc::from(self.manager.buffer().text());
            self.document_version += 1;
            self.last_line_delta = Some(delta);
        }
        let old_version = self.version;
        self.version += 1;

        let change = DocumentChange {
            kind,
            old_version,
            new_version: self.version,
            text: self.text(),
            delta: result.delta,
            cursor: result.cursor_after,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_published_text_follows_edits() {
        let mut session = EditorSession::from_lines(["ab", "cd"]);
        session.set_cursor(Position::new(1, 0));
        session.backspace();
        assert_eq!(&*session.text(), "abcd");
        assert_eq!(session.last_line_delta(), Some(LineDelta::new(0, 2, 1)));

        session.undo();
        assert_eq!(&*session.text(), "ab\ncd");
        assert_eq!(session.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_noop_does_not_bump_version() {
        let mut session = EditorSession::new("x");
        session.backspace();
        assert_eq!(session.version(), 0);
        assert!(session.undo().is_some());
        assert_eq!(session.version(), 0);
        assert!(session.undo().is_none());
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_noop_edits_leave_document_unmodified() {
        let mut session = EditorSession::new("abc");
        session.backspace();
        session.insert_text("");
        assert_eq!(&*session.text(), "abc");
        assert!(!session.is_modified());

        session.set_cursor_to_end();
        session.backspace();
        assert!(session.is_modified());
        session.undo();
        assert!(!session.is_modified());
    }

    #[test]
    fn test_subscribers_see_post_edit_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut session = EditorSession::empty();
        session.subscribe(move |change| {
            sink.lock()
                .unwrap()
                .push((change.kind, change.new_version, change.text.to_string()));
        });
        session.insert_text("a\nb");
        session.undo();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (ChangeKind::Edit, 1, "a".to_string()),
                (ChangeKind::Edit, 2, "a\n".to_string()),
                (ChangeKind::Edit, 3, "a\nb".to_string()),
                (ChangeKind::Undo, 4, "a\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_cursor_move_does_not_touch_document_version() {
        let mut session = EditorSession::new("abc");
        assert_eq!(session.last_line_delta(), None);

        session.set_cursor(Position::new(0, 2));
        assert_eq!(session.version(), 1);
        assert_eq!(session.document_version(), 0);
        session.set_cursor(Position::new(0, 2));
        assert_eq!(session.version(), 1);

        session.split_line();
        session.set_cursor(Position::zero());
        assert_eq!(session.version(), 3);
        assert_eq!(session.document_version(), 1);
        assert_eq!(session.last_line_delta(), Some(LineDelta::new(0, 1, 2)));
    }

    #[test]
    fn test_crlf_round_trip_for_saving() {
        let mut session = EditorSession::new("one\r\ntwo");
        assert_eq!(session.buffer().lines(), &["one", "two"]);
        session.set_cursor_to_end();
        session.insert_text("!");
        assert_eq!(session.text_for_saving(), "one\r\ntwo!");
    }
}
