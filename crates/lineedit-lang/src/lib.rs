#![warn(missing_docs)]
//! `lineedit-lang` - data-driven language syntax configuration for `lineedit`.
//!
//! This crate stays lightweight and does not depend on the editing kernel. It describes the few
//! lexical facts the line tokenizer needs: the line-comment marker, the string quote and the
//! escape character. Configurations can be built in code or loaded from YAML:
//!
//! ```rust
//! use lineedit_lang::LanguageConfig;
//!
//! let config = LanguageConfig::from_yaml_str("line_comment: \"#\"\nstring_quote: \"'\"\n").unwrap();
//! assert_eq!(config.line_comment, "#");
//! assert_eq!(config.string_quote, '\'');
//! assert_eq!(config.escape, '\\');
//! ```

mod error;

pub use error::LanguageConfigError;

use serde::Deserialize;
use std::path::Path;

/// Lexical configuration for line tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Line comment marker (e.g. `//`, `#`). Everything from the marker to the end of the line is
    /// a comment, unless the marker appears inside a string.
    pub line_comment: String,
    /// Character that opens and closes string literals.
    pub string_quote: char,
    /// Character that, immediately preceding a quote, keeps it from opening or closing a string.
    pub escape: char,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            line_comment: "//".to_string(),
            string_quote: '"',
            escape: '\\',
        }
    }
}

impl LanguageConfig {
    /// Create a config with the given comment marker and the default string syntax.
    pub fn with_line_comment(marker: impl Into<String>) -> Self {
        Self {
            line_comment: marker.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a config from YAML. Missing keys take their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LanguageConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LanguageConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the invariants the tokenizer relies on.
    pub fn validate(&self) -> Result<(), LanguageConfigError> {
        if self.line_comment.is_empty() {
            return Err(LanguageConfigError::EmptyCommentMarker);
        }
        if self.string_quote == self.escape {
            return Err(LanguageConfigError::QuoteIsEscape(self.string_quote));
        }
        if self.line_comment.starts_with(self.string_quote) {
            return Err(LanguageConfigError::CommentStartsWithQuote(
                self.line_comment.clone(),
            ));
        }
        Ok(())
    }
}
