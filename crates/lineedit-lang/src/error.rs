use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading a [`LanguageConfig`](crate::LanguageConfig).
pub enum LanguageConfigError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("line comment marker must not be empty")]
    /// The line comment marker was empty.
    EmptyCommentMarker,

    #[error("string quote '{0}' cannot also be the escape character")]
    /// The quote and escape characters were the same.
    QuoteIsEscape(char),

    #[error("line comment marker '{0}' starts with the string quote")]
    /// The comment marker would be ambiguous with an opening quote.
    CommentStartsWithQuote(String),
}
