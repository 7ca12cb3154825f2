//! Draft snapshots of the post edit form.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::EditorError;

/// The post form fields the autosaver reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Body,
    Slug,
    PublishedAt,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Body,
        DraftField::Slug,
        DraftField::PublishedAt,
    ];

    /// Form field name, as submitted.
    pub fn form_name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Body => "body",
            DraftField::Slug => "slug",
            DraftField::PublishedAt => "published_at",
        }
    }

    /// DOM id of the rendered input (`id_<name>`).
    pub fn element_id(self) -> &'static str {
        match self {
            DraftField::Title => "id_title",
            DraftField::Body => "id_body",
            DraftField::Slug => "id_slug",
            DraftField::PublishedAt => "id_published_at",
        }
    }
}

/// Read access to the post form.
pub trait DraftFields {
    /// Current value of `field`.
    fn read(&self, field: DraftField) -> Result<String, EditorError>;
}

/// In-memory form values for tests and non-DOM hosts.
#[derive(Clone, Debug, Default)]
pub struct PlainDraftFields {
    values: HashMap<DraftField, String>,
}

impl PlainDraftFields {
    pub fn new(title: &str, body: &str, slug: &str, published_at: &str) -> Self {
        let mut fields = Self::default();
        fields.set(DraftField::Title, title);
        fields.set(DraftField::Body, body);
        fields.set(DraftField::Slug, slug);
        fields.set(DraftField::PublishedAt, published_at);
        fields
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Remove a field, as if it were missing from the page.
    pub fn remove(&mut self, field: DraftField) {
        self.values.remove(&field);
    }
}

impl DraftFields for PlainDraftFields {
    fn read(&self, field: DraftField) -> Result<String, EditorError> {
        self.values
            .get(&field)
            .cloned()
            .ok_or_else(|| EditorError::MissingField(field.element_id().to_string()))
    }
}

/// Whether a post has been published yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentState {
    /// No publish date; autosave applies.
    Draft,
    /// Publish date set; autosave must not touch it.
    Published,
}

impl DocumentState {
    /// Derive the state from the publish-timestamp field value.
    ///
    /// Any non-empty value counts as published, whitespace included.
    pub fn from_published_at(published_at: &str) -> Self {
        if published_at.is_empty() {
            DocumentState::Draft
        } else {
            DocumentState::Published
        }
    }

    /// Read the state from the form.
    pub fn read<F: DraftFields + ?Sized>(fields: &F) -> Result<Self, EditorError> {
        Ok(Self::from_published_at(
            &fields.read(DraftField::PublishedAt)?,
        ))
    }
}

/// A draft as submitted to the edit endpoint.
///
/// Serializes to the form fields `title`, `body`, `slug`, `published_at`, in
/// that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DraftDocument {
    pub title: String,
    pub body: String,
    pub slug: String,
    pub published_at: String,
}

impl DraftDocument {
    /// Snapshot the form as a draft.
    ///
    /// `published_at` is always empty, whatever the form holds.
    pub fn capture<F: DraftFields + ?Sized>(fields: &F) -> Result<Self, EditorError> {
        Ok(Self {
            title: fields.read(DraftField::Title)?,
            body: fields.read(DraftField::Body)?,
            slug: fields.read(DraftField::Slug)?,
            published_at: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_state() {
        assert_eq!(DocumentState::from_published_at(""), DocumentState::Draft);
        assert_eq!(
            DocumentState::from_published_at("  "),
            DocumentState::Published
        );
        assert_eq!(
            DocumentState::from_published_at("2024-01-01T00:00:00Z"),
            DocumentState::Published
        );
    }

    #[test]
    fn test_capture_forces_published_at_empty() {
        let fields = PlainDraftFields::new("Hello", "body text", "hello", "2024-01-01");
        let draft = DraftDocument::capture(&fields).unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.body, "body text");
        assert_eq!(draft.slug, "hello");
        assert_eq!(draft.published_at, "");
    }

    #[test]
    fn test_capture_missing_field() {
        let mut fields = PlainDraftFields::new("Hello", "body", "hello", "");
        fields.remove(DraftField::Slug);
        let err = DraftDocument::capture(&fields).unwrap_err();
        assert!(matches!(err, EditorError::MissingField(id) if id == "id_slug"));
    }

    #[test]
    fn test_form_encoding() {
        let draft = DraftDocument {
            title: "Hello world".into(),
            body: "see [docs](https://example.com)".into(),
            slug: "hello-world".into(),
            published_at: String::new(),
        };
        let encoded = serde_urlencoded::to_string(&draft).unwrap();
        insta::assert_snapshot!(
            encoded,
            @"title=Hello+world&body=see+%5Bdocs%5D%28https%3A%2F%2Fexample.com%29&slug=hello-world&published_at="
        );
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = DraftField::ALL.iter().map(|f| f.form_name()).collect();
        assert_eq!(names, ["title", "body", "slug", "published_at"]);
        assert_eq!(DraftField::PublishedAt.element_id(), "id_published_at");
    }
}
