//! `DraftAutosave` class.

use mataroa_editor_browser::{AutosaveHandle, current_page_url, page_document, start_autosave};
use wasm_bindgen::prelude::*;

use crate::types::{AutosaveOptions, options_from_js};

/// Saves the post form as a draft on a timer until the post is published.
///
/// ```js
/// const autosave = new DraftAutosave({ csrfToken: token });
/// window.addEventListener("beforeunload", () => autosave.stop());
/// ```
#[wasm_bindgen]
pub struct DraftAutosave {
    handle: Option<AutosaveHandle>,
}

#[wasm_bindgen]
impl DraftAutosave {
    /// Start autosaving. Throws if a form field is missing or the endpoint is
    /// not a valid URL.
    ///
    /// `options` is an `AutosaveOptions` object; `csrfToken` is required.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<DraftAutosave, JsError> {
        let options: AutosaveOptions = options_from_js(options, "autosave options")?
            .ok_or_else(|| JsError::new("DraftAutosave requires a csrfToken option"))?;

        let page_url = current_page_url().map_err(|e| JsError::new(&e.to_string()))?;
        let config = options.config(&page_url)?;

        let document = page_document().map_err(|e| JsError::new(&e.to_string()))?;
        let handle =
            start_autosave(document, &config).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Whether the autosave loop is still running.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop saving. Requests already in flight are abandoned.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
            tracing::info!("stopped auto save for drafts");
        }
    }
}
