//! Single-pass line tokenizer.

use lineedit_lang::LanguageConfig;

/// Syntax category of a token. The presentation layer maps these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Ordinary text.
    Plain,
    /// A string literal, quotes included.
    String,
    /// A line comment, marker included.
    Comment,
}

/// A non-empty run of a line's text with its syntax category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact source text.
    pub text: String,
    /// Syntax category.
    pub kind: TokenKind,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// State carried from the end of one line into the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerState {
    /// The line ended inside an unterminated string literal.
    pub inside_string: bool,
}

impl TokenizerState {
    /// State at the start of a document.
    pub fn initial() -> Self {
        Self::default()
    }
}

/// Splits one line at a time into [`Token`]s.
///
/// Scanning is left to right in a single pass:
/// - an unescaped quote outside a string flushes pending text as [`TokenKind::Plain`] and opens
///   a string token starting with the quote
/// - an unescaped quote inside a string closes it; the string token ends with the quote
/// - the comment marker outside a string flushes pending text and turns the rest of the line into
///   one [`TokenKind::Comment`] token
/// - at the end of the line, pending text is flushed as a string or plain token depending on
///   whether a string is still open
///
/// A quote counts as escaped when the character right before it is the escape character.
/// Escapes do not carry across lines. Concatenating the token texts always gives back the line.
#[derive(Debug, Clone, Default)]
pub struct LineTokenizer {
    config: LanguageConfig,
}

impl LineTokenizer {
    /// Create a tokenizer for a language.
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// The language configuration.
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Tokenize `line`, starting from `state`. Returns the tokens and the state to carry into the
    /// next line.
    pub fn tokenize_line(&self, line: &str, state: TokenizerState) -> (Vec<Token>, TokenizerState) {
        let quote = self.config.string_quote;
        let escape = self.config.escape;
        let marker = self.config.line_comment.as_str();

        let mut tokens = Vec::new();
        let mut inside_string = state.inside_string;
        let mut pending = 0;
        let mut previous = None;

        for (idx, ch) in line.char_indices() {
            if ch == quote && previous != Some(escape) {
                if inside_string {
                    let end = idx + ch.len_utf8();
                    push_token(&mut tokens, &line[pending..end], TokenKind::String);
                    pending = end;
                } else {
                    push_token(&mut tokens, &line[pending..idx], TokenKind::Plain);
                    pending = idx;
                }
                inside_string = !inside_string;
            } else if !inside_string && !marker.is_empty() && line[idx..].starts_with(marker) {
                push_token(&mut tokens, &line[pending..idx], TokenKind::Plain);
                push_token(&mut tokens, &line[idx..], TokenKind::Comment);
                return (tokens, TokenizerState::default());
            }
            previous = Some(ch);
        }

        let kind = if inside_string {
            TokenKind::String
        } else {
            TokenKind::Plain
        };
        push_token(&mut tokens, &line[pending..], kind);
        (tokens, TokenizerState { inside_string })
    }
}

fn push_token(tokens: &mut Vec<Token>, text: &str, kind: TokenKind) {
    if !text.is_empty() {
        tokens.push(Token::new(text, kind));
    }
}
