//! Options objects accepted from JavaScript.

use std::time::Duration;

use mataroa_editor_core::{AutosaveConfig, EmptyTargetPolicy, LinkPasteConfig};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Options for `new LinkPaste(options)`.
#[derive(Debug, Clone, Default, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct LinkPasteOptions {
    /// CSS selector of the editor textarea. Defaults to the post body editor.
    #[tsify(optional)]
    pub selector: Option<String>,
    /// What to do when the clipboard is empty.
    #[tsify(optional, type = "\"selfLink\" | \"passThrough\"")]
    pub empty_target: Option<EmptyTargetPolicy>,
}

impl LinkPasteOptions {
    pub fn config(&self) -> LinkPasteConfig {
        LinkPasteConfig {
            empty_target: self.empty_target.unwrap_or_default(),
        }
    }
}

/// Options for `new DraftAutosave(options)`.
#[derive(Debug, Clone, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct AutosaveOptions {
    /// CSRF token sent with every save.
    pub csrf_token: String,
    /// Where drafts are posted. Defaults to the current page URL.
    #[tsify(optional)]
    pub endpoint: Option<String>,
    /// Milliseconds between saves. Defaults to 10000.
    #[tsify(optional)]
    pub interval_ms: Option<u32>,
    /// Header carrying the CSRF token. Defaults to `X-CSRFToken`.
    #[tsify(optional)]
    pub csrf_header: Option<String>,
}

impl AutosaveOptions {
    /// Build the autosave config, posting to `page_url` unless an endpoint was given.
    pub fn config(&self, page_url: &str) -> Result<AutosaveConfig, JsError> {
        let endpoint = self.endpoint.as_deref().unwrap_or(page_url);
        let mut config = AutosaveConfig::new(endpoint, self.csrf_token.clone())
            .map_err(|e| JsError::new(&e.to_string()))?;

        if let Some(ms) = self.interval_ms {
            if ms == 0 {
                return Err(JsError::new("intervalMs must be greater than zero"));
            }
            config = config.with_interval(Duration::from_millis(u64::from(ms)));
        }
        if let Some(header) = &self.csrf_header {
            config = config.with_csrf_header(header.clone());
        }
        Ok(config)
    }
}

/// Deserialize an options object, treating `undefined`/`null` as defaults.
pub(crate) fn options_from_js<T>(value: JsValue, what: &str) -> Result<Option<T>, JsError>
where
    T: DeserializeOwned,
{
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| JsError::new(&format!("Invalid {what}: {e}")))
}
