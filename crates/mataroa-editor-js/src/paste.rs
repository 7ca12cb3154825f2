//! `LinkPaste` class.

use mataroa_editor_browser::{BODY_EDITOR_SELECTOR, LinkPasteListener, page_document};
use wasm_bindgen::prelude::*;

use crate::types::{LinkPasteOptions, options_from_js};

/// Formats URL pastes over a selection as markdown links.
///
/// ```js
/// const paste = new LinkPaste({ emptyTarget: "selfLink" });
/// // later
/// paste.detach();
/// ```
#[wasm_bindgen]
pub struct LinkPaste {
    listener: Option<LinkPasteListener>,
}

#[wasm_bindgen]
impl LinkPaste {
    /// Attach to the editor textarea. Throws if it is not on the page.
    ///
    /// `options` is a `LinkPasteOptions` object or undefined.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<LinkPaste, JsError> {
        let options: LinkPasteOptions = options_from_js(options, "link paste options")?
            .unwrap_or_default();
        let selector = options.selector.as_deref().unwrap_or(BODY_EDITOR_SELECTOR);

        let document = page_document().map_err(|e| JsError::new(&e.to_string()))?;
        let listener = LinkPasteListener::install(&document, selector, options.config())
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(Self {
            listener: Some(listener),
        })
    }

    /// Whether the paste listener is still installed.
    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the paste listener. Safe to call more than once.
    pub fn detach(&mut self) {
        if self.listener.take().is_some() {
            tracing::debug!("link paste formatter detached");
        }
    }
}
