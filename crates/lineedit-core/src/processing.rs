//! Generic document processing interface.
//!
//! Derived editor state (syntax highlighting, indexing, ...) is maintained outside the kernel by
//! processors. A processor reads the session after each mutation, typically using
//! [`EditorSession::last_line_delta`](crate::EditorSession::last_line_delta) and
//! [`EditorSession::version`](crate::EditorSession::version) to update only what changed, and
//! is driven via [`EditorSession::apply_processor`](crate::EditorSession::apply_processor).

use crate::EditorSession;

/// A processor that derives state from an editor document.
pub trait DocumentProcessor {
    /// The error type returned by [`DocumentProcessor::process`].
    type Error;

    /// Bring the derived state up to date with `session`.
    ///
    /// Implementations must not mutate the document; they only read it.
    fn process(&mut self, session: &EditorSession) -> Result<(), Self::Error>;
}
