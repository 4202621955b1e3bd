//! Immutable document snapshots and the storage/export seam.
//!
//! The kernel never touches the filesystem. Persistence (including any backup policy) and export
//! are collaborators that receive a [`DocumentSnapshot`]: a copy of the document taken at one
//! version, safe to move to another thread while editing continues.

use crate::LineEnding;
use std::sync::Arc;

/// The document as it was at a specific version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    /// Session version the snapshot was taken at.
    pub version: u64,
    /// Lines, without terminators.
    pub lines: Vec<String>,
    /// Lines joined with `'\n'`.
    pub text: Arc<str>,
    /// Preferred line ending for writing the document out.
    pub line_ending: LineEnding,
}

impl DocumentSnapshot {
    /// The text with the preferred line ending applied.
    pub fn text_for_saving(&self) -> String {
        self.line_ending.join(&self.lines)
    }
}

/// A consumer of finished document text: the storage layer, or an exporter.
pub trait DocumentSink {
    /// The error type returned by [`DocumentSink::write`].
    type Error;

    /// Receive a snapshot. Returning `Ok` means the snapshot was durably handled.
    fn write(&mut self, snapshot: &DocumentSnapshot) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_for_saving_applies_line_ending() {
        let snapshot = DocumentSnapshot {
            version: 3,
            lines: vec!["a".to_string(), "b".to_string()],
            text: Arc::from("a\nb"),
            line_ending: LineEnding::Crlf,
        };
        assert_eq!(snapshot.text_for_saving(), "a\r\nb");
    }
}
