// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Caret or selection inside the field's value, as character offsets (not byte offsets).
///
/// The range is always normalized so `start <= end`. When `start == end` it is a plain
/// caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionRange {
    /// Start character offset of the selection (inclusive).
    pub start: usize,
    /// End character offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range. The range is normalized so `start <= end`.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero width selection, ie: a caret.
    #[must_use]
    pub fn caret(at: usize) -> Self { Self { start: at, end: at } }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    /// Pulls both ends inside `0..=char_len`. A field can report a stale range right
    /// after its value is replaced.
    #[must_use]
    pub fn clamp_to(self, char_len: usize) -> Self {
        Self::new(self.start.min(char_len), self.end.min(char_len))
    }
}

/// Byte offset of the `char_index`-th character of `text`, or `text.len()` when
/// `char_index` is at or past the end.
#[must_use]
pub fn byte_offset_of_char(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte_index, _)| byte_index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_selection_range_is_empty() {
        assert!(SelectionRange::caret(3).is_empty());
        assert!(!SelectionRange::new(3, 5).is_empty());
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(SelectionRange::new(2, 9).clamp_to(4), SelectionRange::new(2, 4));
        assert_eq!(SelectionRange::new(7, 9).clamp_to(4), SelectionRange::caret(4));
    }

    #[test]
    fn test_byte_offset_of_char() {
        assert_eq!(byte_offset_of_char("12", 0), 0);
        assert_eq!(byte_offset_of_char("12", 2), 2);
        assert_eq!(byte_offset_of_char("12", 5), 2);
        assert_eq!(byte_offset_of_char("é1", 1), 2);
    }
}
