//! DOM change notifications for programmatic edits.

use mataroa_editor_core::{FieldMutated, MutationListener};
use wasm_bindgen::JsValue;
use web_sys::{EventTarget, InputEvent, InputEventInit};

/// Dispatch a bubbling `input` event describing `mutation` on `target`.
///
/// Returns false if a listener cancelled the event.
pub fn dispatch_input_event(target: &EventTarget, mutation: &FieldMutated) -> Result<bool, JsValue> {
    let init = InputEventInit::new();
    init.set_bubbles(true);
    init.set_input_type(mutation.cause.input_type());
    init.set_data(mutation.cause.data());

    let event = InputEvent::new_with_event_init_dict("input", &init)?;
    target.dispatch_event(&event)
}

/// `MutationListener` that re-announces edits as DOM `input` events, so
/// listeners such as live preview see the change.
///
/// Edits the browser already announced (native `insertText`) are skipped.
pub struct InputEventNotifier {
    target: EventTarget,
}

impl InputEventNotifier {
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }
}

impl MutationListener for InputEventNotifier {
    fn field_mutated(&mut self, event: &FieldMutated) {
        if event.host_notified {
            return;
        }
        if let Err(e) = dispatch_input_event(&self.target, event) {
            tracing::warn!(field = %event.field, error = ?e, "failed to dispatch input event");
        }
    }
}
