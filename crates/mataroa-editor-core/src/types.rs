//! Selection bounds for text fields.

use std::ops::Range;

/// Ordered selection bounds inside a text field, in chars.
///
/// Unlike a caret-and-anchor selection, a form field only exposes its
/// `selectionStart`/`selectionEnd` pair, so this always stores `start <= end`.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct FieldSelection {
    pub start: usize,
    pub end: usize,
}

impl FieldSelection {
    /// Create a selection, swapping the bounds if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Create a collapsed selection (caret only).
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the selection is collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Selection length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Same as `is_collapsed`.
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Clamp both bounds to a field of `len_chars` characters.
    ///
    /// Hosts can report stale offsets after a programmatic edit; clamping keeps
    /// `0 <= start <= end <= len` without rejecting the event.
    pub fn clamp(self, len_chars: usize) -> Self {
        Self::new(self.start.min(len_chars), self.end.min(len_chars))
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for FieldSelection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
