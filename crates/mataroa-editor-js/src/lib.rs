//! WASM bindings for the mataroa post editor.
//!
//! Exposes two page behaviors as JavaScript classes:
//!
//! - `LinkPaste`: pasting a URL over selected text in the body editor wraps the
//!   selection in a markdown link
//! - `DraftAutosave`: periodically posts unpublished drafts back to the server

mod autosave;
mod paste;
mod types;

pub use autosave::*;
pub use paste::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `tracing` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    console_error_panic_hook::set_once();

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // The host page may have installed its own subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
