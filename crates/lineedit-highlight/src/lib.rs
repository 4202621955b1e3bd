#![warn(missing_docs)]
//! `lineedit-highlight` - streaming line tokenizer and incremental highlighting for
//! `lineedit-core`.
//!
//! [`LineTokenizer`] is a pure function from (line text, carried-in state) to (tokens,
//! carried-out state). The only carried state is whether the line starts inside an unterminated
//! string literal, which models multi-line strings.
//!
//! [`HighlightSession`] drives the tokenizer across a document and re-tokenizes only what an
//! edit affected. It implements [`DocumentProcessor`](lineedit_core::DocumentProcessor), so it
//! can be kept in sync with an [`EditorSession`](lineedit_core::EditorSession):
//!
//! ```rust
//! use lineedit_core::EditorSession;
//! use lineedit_highlight::{HighlightSession, TokenKind};
//!
//! let mut editor = EditorSession::from_lines(["say \"hello", "world\" now"]);
//! let mut highlight = HighlightSession::default();
//! editor.apply_processor(&mut highlight).unwrap();
//!
//! let kinds: Vec<_> = highlight.tokens(1).unwrap().iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![TokenKind::String, TokenKind::Plain]);
//! ```

mod session;
mod tokenizer;

pub use lineedit_lang::LanguageConfig;
pub use session::HighlightSession;
pub use tokenizer::{LineTokenizer, Token, TokenKind, TokenizerState};
