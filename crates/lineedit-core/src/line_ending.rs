//! Line ending helpers.
//!
//! [`TextBuffer`](crate::TextBuffer) stores lines without terminators. When a document that uses
//! CRLF (`"\r\n"`) is loaded, the terminators are dropped, but the preferred line ending is kept
//! so the storage collaborator can write the file back the way it was.

/// The preferred newline sequence used when saving a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: any CRLF (`"\r\n"`) in the input selects [`LineEnding::Crlf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The terminator itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Join terminator-free lines with this line ending.
    pub fn join<S: AsRef<str>>(self, lines: &[S]) -> String {
        let mut out = String::new();
        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(line.as_ref());
        }
        out
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}
