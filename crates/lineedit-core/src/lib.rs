#![warn(missing_docs)]
//! Line Edit Core - Headless Line-Oriented Text Editing Kernel
//!
//! # Overview
//!
//! `lineedit-core` is the in-memory editing kernel of a text editor. It owns the document as a
//! sequence of lines, keeps a cursor consistent with it, and mutates it exclusively through
//! exactly invertible commands collected in an undo/redo history.
//! Rendering, hit testing, file I/O and plugin export are left to the host.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  EditorSession (observable state)           │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  CommandManager (undo / redo)               │  ← History
//! ├─────────────────────────────────────────────┤
//! │  Commands (InsertText, SplitLine, ...)      │  ← Invertible mutations
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer + Position                      │  ← Line storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lineedit_core::{EditorSession, Position};
//!
//! let mut session = EditorSession::from_lines(["ab", "cd"]);
//! session.set_cursor(Position::new(1, 0));
//!
//! // Backspace at the start of a line merges it into the previous one.
//! session.backspace();
//! assert_eq!(session.buffer().lines(), &["abcd"]);
//! assert_eq!(session.cursor(), Position::new(0, 2));
//!
//! session.undo();
//! assert_eq!(session.buffer().lines(), &["ab", "cd"]);
//! assert_eq!(session.cursor(), Position::new(1, 0));
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - line storage
//! - [`commands`] - invertible editing commands
//! - [`manager`] - command execution and undo/redo history
//! - [`session`] - observable state, change notifications, save hand-off
//! - [`delta`] - line-level change descriptions for incremental consumers
//! - [`processing`] - derived-state processor interface
//! - [`snapshot`] - immutable snapshots and the storage/export seam
//!
//! # Logging
//!
//! The kernel emits [`tracing`] events (`debug` for executed/undone/redone commands, `warn` for
//! commands addressed at lines that no longer exist). It never installs a subscriber.

pub mod buffer;
pub mod commands;
pub mod delta;
pub mod line_ending;
pub mod manager;
mod position;
pub mod processing;
pub mod session;
pub mod snapshot;

pub use buffer::TextBuffer;
pub use commands::{
    Backspace, BackspaceEffect, Command, DeleteRange, EditCommand, InsertText, SplitLine,
};
pub use delta::LineDelta;
pub use line_ending::LineEnding;
pub use manager::{CommandManager, CommandResult, EditorOptions};
pub use position::Position;
pub use processing::DocumentProcessor;
pub use session::{ChangeKind, DocumentChange, DocumentChangeCallback, EditorSession};
pub use snapshot::{DocumentSink, DocumentSnapshot};
