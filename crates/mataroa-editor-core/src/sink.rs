//! Draft persistence targets.

use std::future::Future;

use url::Url;

use crate::config::AutosaveConfig;
use crate::draft::DraftDocument;
use crate::error::EditorError;

/// HTTP status returned for a save attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveStatus(pub u16);

impl SaveStatus {
    /// Whether the server accepted the draft.
    ///
    /// The edit view answers a valid form with a redirect, so 302 counts
    /// alongside any 2xx.
    pub fn is_saved(self) -> bool {
        (200..300).contains(&self.0) || self.0 == 302
    }
}

impl std::fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Somewhere drafts can be sent.
pub trait DraftSink {
    /// Submit one draft. Transport failures are errors; any HTTP response,
    /// including error statuses, is a `SaveStatus`.
    fn save(&self, draft: &DraftDocument) -> impl Future<Output = Result<SaveStatus, EditorError>>;
}

impl<S: DraftSink + ?Sized> DraftSink for std::rc::Rc<S> {
    fn save(&self, draft: &DraftDocument) -> impl Future<Output = Result<SaveStatus, EditorError>> {
        (**self).save(draft)
    }
}

impl<S: DraftSink + ?Sized> DraftSink for std::sync::Arc<S> {
    fn save(&self, draft: &DraftDocument) -> impl Future<Output = Result<SaveStatus, EditorError>> {
        (**self).save(draft)
    }
}

/// Submits drafts as a form POST to the edit page, with a CSRF header.
#[derive(Clone, Debug)]
pub struct HttpDraftSink {
    client: reqwest::Client,
    endpoint: Url,
    csrf_header: String,
    csrf_token: String,
}

impl HttpDraftSink {
    pub fn new(config: &AutosaveConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use an existing client (shared connection pool, custom redirect policy).
    pub fn with_client(client: reqwest::Client, config: &AutosaveConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            csrf_header: config.csrf_header.clone(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the form request for a draft without sending it.
    pub fn build_request(&self, draft: &DraftDocument) -> Result<reqwest::Request, EditorError> {
        Ok(self
            .client
            .post(self.endpoint.clone())
            .header(self.csrf_header.as_str(), self.csrf_token.as_str())
            .form(draft)
            .build()?)
    }
}

impl DraftSink for HttpDraftSink {
    fn save(&self, draft: &DraftDocument) -> impl Future<Output = Result<SaveStatus, EditorError>> {
        let request = self.build_request(draft);
        async move {
            let response = self.client.execute(request?).await?;
            Ok(SaveStatus(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_status() {
        assert!(SaveStatus(200).is_saved());
        assert!(SaveStatus(204).is_saved());
        assert!(SaveStatus(302).is_saved());
        assert!(!SaveStatus(301).is_saved());
        assert!(!SaveStatus(403).is_saved());
        assert!(!SaveStatus(500).is_saved());
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    #[test]
    fn test_build_request() {
        let config =
            AutosaveConfig::new("https://example.mataroa.blog/blog/hello/edit/", "secret-token")
                .unwrap();
        let sink = HttpDraftSink::new(&config);
        let draft = DraftDocument {
            title: "Hello".into(),
            body: "draft body".into(),
            slug: "hello".into(),
            published_at: String::new(),
        };

        let request = sink.build_request(&draft).unwrap();
        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://example.mataroa.blog/blog/hello/edit/"
        );
        assert_eq!(
            request.headers().get("x-csrftoken").unwrap(),
            "secret-token"
        );
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        insta::assert_snapshot!(
            std::str::from_utf8(body).unwrap(),
            @"title=Hello&body=draft+body&slug=hello&published_at="
        );
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    #[test]
    fn test_custom_csrf_header() {
        let config = AutosaveConfig::new("http://localhost:8000/edit/", "tok")
            .unwrap()
            .with_csrf_header("X-CSRF-Token");
        let sink = HttpDraftSink::new(&config);
        let request = sink.build_request(&DraftDocument::default()).unwrap();
        assert_eq!(request.headers().get("x-csrf-token").unwrap(), "tok");
    }

    #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
    #[test]
    fn test_invalid_header_is_transport_error() {
        let config = AutosaveConfig::new("http://localhost:8000/edit/", "tok")
            .unwrap()
            .with_csrf_header("bad header");
        let sink = HttpDraftSink::new(&config);
        let err = sink.build_request(&DraftDocument::default()).unwrap_err();
        assert!(matches!(err, EditorError::Transport(_)));
    }
}
