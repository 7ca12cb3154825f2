//! mataroa-editor-core: Pure Rust editor behaviors without DOM dependencies.
//!
//! This crate provides:
//! - `TextField` trait for the body editor, with an in-memory `PlainField`
//! - `paste_link`: turning "select text, paste a URL" into a Markdown link
//! - `DraftFields` / `DraftDocument`: snapshots of the post form
//! - `Autosaver`: the recurring draft save loop, generic over a `DraftSink`
//! - `HttpDraftSink`: reqwest-backed form submission with a CSRF header
//!
//! Everything that touches the page goes through the capability traits, so the
//! browser layer and tests plug in their own field implementations.

pub mod autosave;
pub mod config;
pub mod draft;
pub mod error;
pub mod events;
pub mod paste_link;
pub mod sink;
pub mod text;
pub mod types;

#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use autosave::{AutosaveHandle, Autosaver, StopSignal, TickOutcome};
pub use config::{AutosaveConfig, EmptyTargetPolicy, LinkPasteConfig};
pub use draft::{DocumentState, DraftDocument, DraftField, DraftFields, PlainDraftFields};
pub use error::EditorError;
pub use events::{FieldMutated, MutationCause, MutationListener};
pub use paste_link::{
    LinkInsertion, PasteOutcome, apply_link_insertion, format_markdown_link, handle_paste,
    plan_paste,
};
pub use sink::{DraftSink, HttpDraftSink, SaveStatus};
pub use smol_str::SmolStr;
pub use text::{EditApplied, PlainField, TextField, char_to_utf16_offset, utf16_to_char_offset};
pub use types::FieldSelection;
