//! Error types for editor behaviors.

use thiserror::Error;

/// Errors that can occur while setting up or running the editor behaviors.
///
/// Per-paste and per-tick failures are absorbed by the components and only
/// logged; these errors surface at setup time or from sink implementations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EditorError {
    /// A field the component depends on is not present on the page.
    #[error("missing field: {0}")]
    MissingField(String),

    /// The draft endpoint could not be parsed.
    #[error("invalid endpoint {url:?}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// The draft request could not be built or sent.
    #[error("transport error: {0}")]
    Transport(String),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<reqwest::Error> for EditorError {
    fn from(e: reqwest::Error) -> Self {
        EditorError::Transport(e.to_string())
    }
}
