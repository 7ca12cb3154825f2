//! Configuration for the editor behaviors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::EditorError;

/// What the formatter does when the clipboard holds no usable link target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyTargetPolicy {
    /// Link the selection to itself: `[text](text)`.
    #[default]
    SelfLink,
    /// Leave the field alone and let the default paste happen.
    PassThrough,
}

/// Link-paste formatter configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkPasteConfig {
    pub empty_target: EmptyTargetPolicy,
}

/// Draft autosave configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Time between save attempts.
    pub interval: Duration,
    /// Where drafts are submitted (the edit page itself).
    pub endpoint: Url,
    /// CSRF token rendered into the page.
    pub csrf_token: String,
    /// Header carrying the CSRF token.
    pub csrf_header: String,
}

impl AutosaveConfig {
    /// Default save cadence.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

    /// Default CSRF header name (Django's `CSRF_HEADER_NAME`).
    pub const DEFAULT_CSRF_HEADER: &'static str = "X-CSRFToken";

    /// Build a config with default interval and header name.
    pub fn new(endpoint: &str, csrf_token: impl Into<String>) -> Result<Self, EditorError> {
        let endpoint = Url::parse(endpoint).map_err(|e| EditorError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            interval: Self::DEFAULT_INTERVAL,
            endpoint,
            csrf_token: csrf_token.into(),
            csrf_header: Self::DEFAULT_CSRF_HEADER.to_string(),
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_csrf_header(mut self, header: impl Into<String>) -> Self {
        self.csrf_header = header.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autosave_defaults() {
        let config = AutosaveConfig::new("https://example.mataroa.blog/blog/hello/edit/", "tok")
            .unwrap();
        assert_eq!(config.interval, Duration::from_secs(10));
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.csrf_token, "tok");
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = AutosaveConfig::new("not a url", "tok").unwrap_err();
        assert!(matches!(err, EditorError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_link_paste_config_from_json_shape() {
        let config: LinkPasteConfig =
            serde_json::from_str(r#"{"emptyTarget":"passThrough"}"#).unwrap();
        assert_eq!(config.empty_target, EmptyTargetPolicy::PassThrough);

        let config: LinkPasteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.empty_target, EmptyTargetPolicy::SelfLink);
    }
}
