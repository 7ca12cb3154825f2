//! Post form access and autosave startup.

use mataroa_editor_core::{
    AutosaveConfig, AutosaveHandle, Autosaver, DraftField, DraftFields, EditorError,
    HttpDraftSink,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom_error;

/// The page's document.
pub fn page_document() -> Result<Document, EditorError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| EditorError::Dom("no document".into()))
}

/// The page's own URL, where the edit form posts to.
pub fn current_page_url() -> Result<String, EditorError> {
    let window = web_sys::window().ok_or_else(|| EditorError::Dom("no window".into()))?;
    window.location().href().map_err(dom_error)
}

/// `DraftFields` over the post form, looked up by element id on each read.
pub struct DomDraftFields {
    document: Document,
}

impl DomDraftFields {
    /// Check that all four form fields exist and wrap the document.
    pub fn locate(document: Document) -> Result<Self, EditorError> {
        for field in DraftField::ALL {
            let element = document
                .get_element_by_id(field.element_id())
                .ok_or_else(|| EditorError::MissingField(field.element_id().to_string()))?;
            if form_value(&element).is_none() {
                return Err(EditorError::MissingField(format!(
                    "{} is not an input or textarea",
                    field.element_id()
                )));
            }
        }
        Ok(Self { document })
    }
}

impl DraftFields for DomDraftFields {
    fn read(&self, field: DraftField) -> Result<String, EditorError> {
        self.document
            .get_element_by_id(field.element_id())
            .as_ref()
            .and_then(form_value)
            .ok_or_else(|| EditorError::MissingField(field.element_id().to_string()))
    }
}

fn form_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

/// Start autosaving the post form in `document`.
///
/// The loop runs until the page unloads or the returned handle is stopped.
pub fn start_autosave(
    document: Document,
    config: &AutosaveConfig,
) -> Result<AutosaveHandle, EditorError> {
    let fields = DomDraftFields::locate(document)?;
    let sink = HttpDraftSink::new(config);
    Ok(Autosaver::new(fields, sink, config.interval).start())
}
