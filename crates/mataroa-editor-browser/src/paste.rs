//! Paste-to-link listener for the body editor.

use gloo_events::{EventListener, EventListenerOptions};
use mataroa_editor_core::{
    EditorError, LinkPasteConfig, PasteOutcome, apply_link_insertion, plan_paste,
};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Document, EventTarget, HtmlTextAreaElement};

use crate::clipboard::clipboard_text;
use crate::dom_error;
use crate::events::InputEventNotifier;
use crate::field::TextareaField;

/// How the post form's body editor is found.
pub const BODY_EDITOR_SELECTOR: &str = r#"textarea[name="body"]"#;

/// A paste listener installed on a textarea.
///
/// The listener is removed when this value is dropped.
pub struct LinkPasteListener {
    element: HtmlTextAreaElement,
    _listener: EventListener,
}

impl LinkPasteListener {
    /// Find the textarea matching `selector` and attach to it.
    ///
    /// Fails without installing anything if the editor is not on the page.
    pub fn install(
        document: &Document,
        selector: &str,
        config: LinkPasteConfig,
    ) -> Result<Self, EditorError> {
        let element = document
            .query_selector(selector)
            .map_err(dom_error)?
            .ok_or_else(|| EditorError::MissingField(selector.to_string()))?;

        let textarea = element
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| EditorError::MissingField(format!("{selector} is not a textarea")))?;

        Ok(Self::attach(textarea, config))
    }

    /// Attach to a textarea directly.
    pub fn attach(textarea: HtmlTextAreaElement, config: LinkPasteConfig) -> Self {
        let target = textarea.clone();
        let listener = EventListener::new_with_options(
            &textarea,
            "paste",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<ClipboardEvent>() else {
                    tracing::warn!("paste listener got a non-clipboard event");
                    return;
                };
                on_paste(&target, event, &config);
            },
        );

        tracing::debug!(name = %textarea.name(), "link paste formatter attached");
        Self {
            element: textarea,
            _listener: listener,
        }
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }
}

fn on_paste(textarea: &HtmlTextAreaElement, event: &ClipboardEvent, config: &LinkPasteConfig) {
    let mut field = TextareaField::new(textarea.clone());

    let PasteOutcome::Formatted(insertion) = plan_paste(&field, || clipboard_text(event), config)
    else {
        // Nothing selected (or nothing to link): the browser pastes as usual.
        return;
    };

    event.prevent_default();

    let target: EventTarget = textarea.clone().into();
    let mut notifier = InputEventNotifier::new(target);
    if let Err(e) = apply_link_insertion(&mut field, &insertion, &mut notifier) {
        tracing::warn!(error = %e, "failed to insert link");
    }
}
