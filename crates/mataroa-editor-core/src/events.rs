//! Change notifications for programmatic edits.
//!
//! When the formatter rewrites the body field, other observers (live preview,
//! dirty-state tracking) still need to hear about it. The core emits a
//! `FieldMutated` to a `MutationListener`; the browser layer turns it into a
//! bubbling DOM `input` event.

use smol_str::SmolStr;

/// Why a field was changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationCause {
    /// Text inserted in place of a paste.
    InsertFromPaste {
        /// The text that was inserted.
        data: String,
    },
}

impl MutationCause {
    /// The W3C `inputType` name for this cause.
    pub fn input_type(&self) -> &'static str {
        match self {
            MutationCause::InsertFromPaste { .. } => "insertFromPaste",
        }
    }

    /// The inserted data, if any.
    pub fn data(&self) -> Option<&str> {
        match self {
            MutationCause::InsertFromPaste { data } => Some(data),
        }
    }
}

/// A field was changed programmatically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMutated {
    /// Name of the mutated field.
    pub field: SmolStr,
    /// Field contents after the mutation.
    pub new_value: String,
    pub cause: MutationCause,
    /// The host already fired its own change notification for this edit.
    pub host_notified: bool,
}

/// Receives `FieldMutated` events.
///
/// Implemented for any `FnMut(&FieldMutated)`, so a closure is enough for
/// most hosts.
pub trait MutationListener {
    fn field_mutated(&mut self, event: &FieldMutated);
}

impl<F> MutationListener for F
where
    F: FnMut(&FieldMutated),
{
    fn field_mutated(&mut self, event: &FieldMutated) {
        self(event)
    }
}
