//! Structured line-level change deltas.
//!
//! Every buffer mutation performed by a command is summarized as a [`LineDelta`]: a contiguous
//! run of pre-edit lines replaced by a (possibly different) number of post-edit lines.
//! Incremental consumers such as the highlighter use it to revisit only the affected lines
//! instead of rescanning the document.

use std::ops::Range;

/// A contiguous line replacement.
///
/// Semantics: lines `start_line..start_line + old_line_count` of the document **before** the
/// edit were replaced by `new_line_count` lines starting at `start_line` **after** the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDelta {
    /// First affected line.
    pub start_line: usize,
    /// Number of lines replaced in the pre-edit document.
    pub old_line_count: usize,
    /// Number of lines occupying their place in the post-edit document.
    pub new_line_count: usize,
}

impl LineDelta {
    /// Create a new delta.
    pub fn new(start_line: usize, old_line_count: usize, new_line_count: usize) -> Self {
        Self {
            start_line,
            old_line_count,
            new_line_count,
        }
    }

    /// A single line changed in place.
    pub fn in_place(line: usize) -> Self {
        Self::new(line, 1, 1)
    }

    /// Affected range in the pre-edit document.
    pub fn old_range(&self) -> Range<usize> {
        self.start_line..self.start_line + self.old_line_count
    }

    /// Affected range in the post-edit document.
    pub fn new_range(&self) -> Range<usize> {
        self.start_line..self.start_line + self.new_line_count
    }

    /// Net change in line count.
    pub fn line_count_change(&self) -> isize {
        self.new_line_count as isize - self.old_line_count as isize
    }

    /// The delta that reverts this one.
    pub fn inverted(&self) -> Self {
        Self::new(self.start_line, self.new_line_count, self.old_line_count)
    }
}
