//! Browser DOM layer for the mataroa editor behaviors.
//!
//! This crate wires the platform-agnostic logic in `mataroa-editor-core` to
//! the post edit page. It assumes a `wasm32-unknown-unknown` target.
//!
//! # Architecture
//!
//! - `field`: `TextField` over a `<textarea>`, with the insertion strategy chain
//! - `clipboard`: plain-text extraction from paste events
//! - `events`: synthetic `input` events for programmatic edits
//! - `paste`: the paste listener on the body editor
//! - `draft`: `DraftFields` over the post form and autosave startup
//!
//! # Re-exports
//!
//! This crate re-exports `mataroa-editor-core` for convenience, so consumers
//! only need to depend on `mataroa-editor-browser`.

// Re-export core crate
pub use mataroa_editor_core;
pub use mataroa_editor_core::*;

pub mod clipboard;
pub mod draft;
pub mod events;
pub mod field;
pub mod paste;

pub use clipboard::clipboard_text;
pub use draft::{DomDraftFields, current_page_url, page_document, start_autosave};
pub use events::{InputEventNotifier, dispatch_input_event};
pub use field::{InsertStrategy, TextareaField};
pub use paste::{BODY_EDITOR_SELECTOR, LinkPasteListener};

/// Stringify a JS exception into an `EditorError`.
pub(crate) fn dom_error(e: wasm_bindgen::JsValue) -> EditorError {
    EditorError::Dom(format!("{e:?}"))
}
