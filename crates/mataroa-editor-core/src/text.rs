//! Text field abstraction for the body editor.
//!
//! The `TextField` trait is the capability the link-paste formatter is given
//! instead of looking fields up globally. Hosts implement it over whatever
//! holds the text (a DOM textarea, a test double, a native widget).

use std::ops::Range;

use smol_str::SmolStr;

use crate::error::EditorError;
use crate::types::FieldSelection;

/// Result of applying an edit to a field.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct EditApplied {
    /// Collapsed caret position after the edit, in chars.
    pub caret: usize,
    /// Whether the host already notified its own listeners about the edit
    /// (for example a browser `insertText` command firing its own `input`).
    pub host_notified: bool,
}

/// A plain-text edit field with a selection.
///
/// All offsets are in Unicode scalar values (chars), not bytes or UTF-16.
pub trait TextField {
    /// Name used to identify the field in mutation events.
    fn name(&self) -> SmolStr;

    /// Current field contents.
    fn value(&self) -> String;

    /// Current selection bounds.
    fn selection(&self) -> FieldSelection;

    /// Replace the whole field contents.
    fn set_value(&mut self, value: &str);

    /// Move the selection.
    fn set_selection(&mut self, selection: FieldSelection);

    /// Length in chars.
    fn len_chars(&self) -> usize {
        self.value().chars().count()
    }

    /// Get a char range of the contents. Returns None if the range is invalid.
    fn slice(&self, char_range: Range<usize>) -> Option<String> {
        let value = self.value();
        if char_range.start > char_range.end || char_range.end > value.chars().count() {
            return None;
        }
        let start = char_to_byte(&value, char_range.start);
        let end = char_to_byte(&value, char_range.end);
        Some(value[start..end].to_string())
    }

    /// Replace a char range with text and collapse the caret after it.
    ///
    /// The default implementation reassigns the full value as
    /// `prefix + text + suffix`. Hosts with an in-place range primitive
    /// should override it.
    fn replace_range(
        &mut self,
        char_range: Range<usize>,
        text: &str,
    ) -> Result<EditApplied, EditorError> {
        let value = self.value();
        let selection = FieldSelection::from(char_range).clamp(value.chars().count());
        let start = char_to_byte(&value, selection.start);
        let end = char_to_byte(&value, selection.end);

        let mut updated = String::with_capacity(value.len() - (end - start) + text.len());
        updated.push_str(&value[..start]);
        updated.push_str(text);
        updated.push_str(&value[end..]);
        self.set_value(&updated);

        let caret = selection.start + text.chars().count();
        self.set_selection(FieldSelection::caret(caret));
        Ok(EditApplied {
            caret,
            host_notified: false,
        })
    }
}

/// In-memory text field for tests and non-DOM hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainField {
    name: SmolStr,
    value: String,
    selection: FieldSelection,
}

impl PlainField {
    /// Create a field with the caret at the end of `value`.
    pub fn new(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        let value = value.into();
        let len = value.chars().count();
        Self {
            name: name.into(),
            value,
            selection: FieldSelection::caret(len),
        }
    }

    /// Builder-style selection setter.
    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.set_selection(FieldSelection::new(start, end));
        self
    }
}

impl TextField for PlainField {
    fn name(&self) -> SmolStr {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn selection(&self) -> FieldSelection {
        self.selection
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.selection = self.selection.clamp(self.value.chars().count());
    }

    fn set_selection(&mut self, selection: FieldSelection) {
        self.selection = selection.clamp(self.value.chars().count());
    }
}

/// Convert a char offset into a byte offset, saturating at the end.
fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Convert a UTF-16 code unit offset (as reported by the DOM) to a char offset.
///
/// Offsets that land inside a surrogate pair round up to the next char.
pub fn utf16_to_char_offset(s: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in s.chars().enumerate() {
        if units >= utf16_offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    s.chars().count()
}

/// Convert a char offset to a UTF-16 code unit offset.
pub fn char_to_utf16_offset(s: &str, char_offset: usize) -> usize {
    s.chars().take(char_offset).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_defaults_to_caret_at_end() {
        let field = PlainField::new("body", "hello");
        assert_eq!(field.selection(), FieldSelection::caret(5));
        assert_eq!(field.name(), "body");
    }

    #[test]
    fn test_slice() {
        let field = PlainField::new("body", "see docs here");
        assert_eq!(field.slice(4..8).as_deref(), Some("docs"));
        assert_eq!(field.slice(0..100), None);
    }

    #[test]
    fn test_replace_range_moves_caret() {
        let mut field = PlainField::new("body", "hello world");
        let applied = field.replace_range(6..11, "rust").unwrap();
        assert_eq!(field.value(), "hello rust");
        assert_eq!(applied.caret, 10);
        assert!(!applied.host_notified);
        assert_eq!(field.selection(), FieldSelection::caret(10));
    }

    #[test]
    fn test_replace_range_multibyte() {
        // "héllo 🌍 x" - é is 2 bytes, 🌍 is 4 bytes, both 1 char
        let mut field = PlainField::new("body", "héllo 🌍 x");
        let applied = field.replace_range(6..7, "earth").unwrap();
        assert_eq!(field.value(), "héllo earth x");
        assert_eq!(applied.caret, 11);
    }

    #[test]
    fn test_utf16_offsets() {
        // 🌍 is one char but two UTF-16 code units
        let s = "a🌍b";
        assert_eq!(utf16_to_char_offset(s, 0), 0);
        assert_eq!(utf16_to_char_offset(s, 1), 1);
        assert_eq!(utf16_to_char_offset(s, 3), 2);
        assert_eq!(utf16_to_char_offset(s, 4), 3);
        // Past the end saturates.
        assert_eq!(utf16_to_char_offset(s, 40), 3);

        assert_eq!(char_to_utf16_offset(s, 2), 3);
        assert_eq!(char_to_utf16_offset(s, 3), 4);
    }

    #[test]
    fn test_utf16_offset_inside_surrogate_rounds_up() {
        assert_eq!(utf16_to_char_offset("a🌍b", 2), 2);
    }
}
