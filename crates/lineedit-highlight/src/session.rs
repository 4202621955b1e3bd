//! Incremental, document-wide highlighting.

use crate::tokenizer::{LineTokenizer, Token, TokenizerState};
use lineedit_core::{DocumentProcessor, EditorSession, LineDelta, TextBuffer};
use lineedit_lang::LanguageConfig;
use std::convert::Infallible;
use std::ops::Range;

#[derive(Debug, Clone, Default)]
struct LineHighlight {
    entry: TokenizerState,
    tokens: Vec<Token>,
    exit: TokenizerState,
}

/// Per-line tokens for a whole document, kept up to date incrementally.
///
/// Each cached line remembers the state it was entered with. After an edit only the changed lines
/// are re-tokenized, followed by as many later lines as needed until one is entered with the same
/// state as before; from there on the cached tokens are already correct. The result is always
/// identical to [`rehighlight`](Self::rehighlight) on the same buffer.
#[derive(Debug, Clone, Default)]
pub struct HighlightSession {
    tokenizer: LineTokenizer,
    lines: Vec<LineHighlight>,
    synced_version: Option<u64>,
}

impl HighlightSession {
    /// Create an empty session for a language.
    pub fn new(config: LanguageConfig) -> Self {
        Self {
            tokenizer: LineTokenizer::new(config),
            lines: Vec::new(),
            synced_version: None,
        }
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &LineTokenizer {
        &self.tokenizer
    }

    /// Number of highlighted lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Tokens of a line, or `None` if the line is not highlighted.
    pub fn tokens(&self, line: usize) -> Option<&[Token]> {
        self.lines.get(line).map(|l| l.tokens.as_slice())
    }

    /// Tokens of every line, in document order.
    pub fn all_tokens(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.lines.iter().map(|l| l.tokens.as_slice())
    }

    /// States a line was entered and left with.
    pub fn line_state(&self, line: usize) -> Option<(TokenizerState, TokenizerState)> {
        self.lines.get(line).map(|l| (l.entry, l.exit))
    }

    /// Re-tokenize the whole document, starting outside any string.
    pub fn rehighlight(&mut self, buffer: &TextBuffer) -> Range<usize> {
        self.synced_version = None;
        self.rehighlight_all(buffer)
    }

    /// Update the cache after `delta` was applied to `buffer`. Returns the re-tokenized lines.
    ///
    /// Falls back to a full rescan if the cache does not match the pre-edit document.
    pub fn apply_delta(&mut self, buffer: &TextBuffer, delta: &LineDelta) -> Range<usize> {
        self.synced_version = None;
        self.apply_delta_inner(buffer, delta)
    }

    fn rehighlight_all(&mut self, buffer: &TextBuffer) -> Range<usize> {
        self.lines.clear();
        let mut state = TokenizerState::initial();
        for line in buffer.lines() {
            let (tokens, exit) = self.tokenizer.tokenize_line(line, state);
            self.lines.push(LineHighlight {
                entry: state,
                tokens,
                exit,
            });
            state = exit;
        }
        tracing::trace!(lines = self.lines.len(), "full rehighlight");
        0..self.lines.len()
    }

    fn apply_delta_inner(&mut self, buffer: &TextBuffer, delta: &LineDelta) -> Range<usize> {
        let expected_len = self.lines.len() as isize + delta.line_count_change();
        if delta.old_range().end > self.lines.len() || expected_len != buffer.line_count() as isize
        {
            tracing::debug!(?delta, "highlight cache out of sync, rescanning");
            return self.rehighlight_all(buffer);
        }

        let start = delta.start_line;
        let edited_end = delta.new_range().end;
        self.lines.splice(
            delta.old_range(),
            std::iter::repeat_with(LineHighlight::default).take(delta.new_line_count),
        );

        let mut state = match start {
            0 => TokenizerState::initial(),
            _ => self.lines[start - 1].exit,
        };
        let mut line = start;
        while line < self.lines.len() {
            if line >= edited_end && self.lines[line].entry == state {
                break;
            }
            let (tokens, exit) = self.tokenizer.tokenize_line(buffer.line(line), state);
            self.lines[line] = LineHighlight {
                entry: state,
                tokens,
                exit,
            };
            state = exit;
            line += 1;
        }

        tracing::trace!(start, end = line, "retokenized lines");
        start..line
    }
}

impl DocumentProcessor for HighlightSession {
    type Error = Infallible;

    /// Applies the session's last delta when exactly one document version has passed since the
    /// previous call, and rescans otherwise.
    fn process(&mut self, session: &EditorSession) -> Result<(), Self::Error> {
        let version = session.document_version();
        match self.synced_version {
            Some(synced) if synced == version => {}
            Some(synced) if synced + 1 == version => {
                if let Some(delta) = session.last_line_delta() {
                    self.apply_delta_inner(session.buffer(), &delta);
                }
            }
            _ => {
                self.rehighlight_all(session.buffer());
            }
        }
        self.synced_version = Some(version);
        Ok(())
    }
}
