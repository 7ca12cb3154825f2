//! Console tracing for native hosts.
//!
//! The browser build logs through `tracing-wasm` (see `mataroa-editor-js`);
//! this is the equivalent for native embedders and local debugging.
//!
//! ```ignore
//! mataroa_editor_core::telemetry::init_tracing();
//! tracing::info!("editor host started");
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Default level when `RUST_LOG` is unset: DEBUG in debug builds, INFO otherwise.
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install a compact console subscriber.
///
/// `RUST_LOG` overrides the default level. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level().as_str().to_lowercase()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish()
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
