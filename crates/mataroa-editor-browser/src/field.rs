//! `TextField` over a `<textarea>`.
//!
//! The DOM reports selection offsets in UTF-16 code units while the core works
//! in chars, so every offset crossing this boundary is converted.

use std::ops::Range;

use mataroa_editor_core::{
    EditApplied, EditorError, FieldSelection, SmolStr, TextField, char_to_utf16_offset,
    utf16_to_char_offset,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Ways of writing text into the textarea, tried in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertStrategy {
    /// `document.execCommand("insertText")`. Keeps the browser's undo stack
    /// and fires the browser's own `input` event.
    NativeInsertText,
    /// `setRangeText(text, start, end, "end")`.
    RangeText,
    /// Assign `prefix + text + suffix` and move the caret.
    Reassign,
}

impl InsertStrategy {
    pub const DEFAULT_ORDER: [InsertStrategy; 3] = [
        InsertStrategy::NativeInsertText,
        InsertStrategy::RangeText,
        InsertStrategy::Reassign,
    ];
}

/// Browser textarea implementing `TextField`.
#[derive(Clone, Debug)]
pub struct TextareaField {
    element: HtmlTextAreaElement,
    name: SmolStr,
    strategies: Vec<InsertStrategy>,
}

impl TextareaField {
    /// Wrap a textarea. The field name is its `name` attribute, or its id.
    pub fn new(element: HtmlTextAreaElement) -> Self {
        let name = match element.name() {
            name if !name.is_empty() => SmolStr::new(name),
            _ => SmolStr::new(element.id()),
        };
        Self {
            element,
            name,
            strategies: InsertStrategy::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Restrict or reorder the insertion strategies.
    pub fn with_strategies(mut self, strategies: &[InsertStrategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }

    /// Try one strategy on a UTF-16 range. Ok(false) means it is unavailable.
    fn try_insert(
        &self,
        strategy: InsertStrategy,
        utf16_range: Range<u32>,
        text: &str,
        value: &str,
        selection: FieldSelection,
    ) -> Result<bool, JsValue> {
        match strategy {
            InsertStrategy::NativeInsertText => {
                let Some(document) = self.element.owner_document() else {
                    return Ok(false);
                };
                let Ok(document) = document.dyn_into::<HtmlDocument>() else {
                    return Ok(false);
                };
                if !document.query_command_supported("insertText") {
                    return Ok(false);
                }
                self.element.focus()?;
                self.element
                    .set_selection_range(utf16_range.start, utf16_range.end)?;
                document.exec_command_with_show_ui_and_value("insertText", false, text)
            }
            InsertStrategy::RangeText => {
                self.element.set_range_text_with_start_and_end_and_mode(
                    text,
                    utf16_range.start,
                    utf16_range.end,
                    "end",
                )?;
                Ok(true)
            }
            InsertStrategy::Reassign => {
                let mut updated: String = value.chars().take(selection.start).collect();
                updated.push_str(text);
                updated.extend(value.chars().skip(selection.end));
                self.element.set_value(&updated);

                let caret = utf16_range.start + text.encode_utf16().count() as u32;
                self.element.set_selection_range(caret, caret)?;
                Ok(true)
            }
        }
    }
}

impl TextField for TextareaField {
    fn name(&self) -> SmolStr {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn selection(&self) -> FieldSelection {
        let value = self.element.value();
        let start = self.element.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = self.element.selection_end().ok().flatten().unwrap_or(0) as usize;
        FieldSelection::new(
            utf16_to_char_offset(&value, start),
            utf16_to_char_offset(&value, end),
        )
    }

    fn set_value(&mut self, value: &str) {
        self.element.set_value(value);
    }

    fn set_selection(&mut self, selection: FieldSelection) {
        let value = self.element.value();
        let start = char_to_utf16_offset(&value, selection.start) as u32;
        let end = char_to_utf16_offset(&value, selection.end) as u32;
        if let Err(e) = self.element.set_selection_range(start, end) {
            tracing::warn!(error = ?e, "failed to set selection range");
        }
    }

    fn replace_range(
        &mut self,
        char_range: Range<usize>,
        text: &str,
    ) -> Result<EditApplied, EditorError> {
        let value = self.element.value();
        let selection = FieldSelection::from(char_range).clamp(value.chars().count());
        let utf16_range = char_to_utf16_offset(&value, selection.start) as u32
            ..char_to_utf16_offset(&value, selection.end) as u32;

        for strategy in &self.strategies {
            match self.try_insert(*strategy, utf16_range.clone(), text, &value, selection) {
                Ok(true) => {
                    tracing::trace!(?strategy, "inserted text");
                    return Ok(EditApplied {
                        caret: selection.start + text.chars().count(),
                        host_notified: *strategy == InsertStrategy::NativeInsertText,
                    });
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(?strategy, error = ?e, "insert strategy failed");
                }
            }
        }

        Err(EditorError::Dom(format!(
            "no insertion strategy succeeded for {}",
            self.name
        )))
    }
}
