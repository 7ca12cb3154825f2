//! Paste-to-link formatting.
//!
//! Selecting text in the body editor and pasting a URL replaces the selection
//! with `[selection](url)`. With nothing selected the paste is left alone so
//! normal pasting keeps working.
//!
//! The work is split in two so hosts can cancel the native paste in between:
//! `plan_paste` decides what to do without touching the field, and
//! `apply_link_insertion` performs the edit and emits the change notification.
//! `handle_paste` does both for hosts that have nothing to cancel.

use std::ops::Range;

use crate::config::{EmptyTargetPolicy, LinkPasteConfig};
use crate::error::EditorError;
use crate::events::{FieldMutated, MutationCause, MutationListener};
use crate::text::{EditApplied, TextField};

/// A planned link insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkInsertion {
    /// Char range being replaced (the original selection).
    pub range: Range<usize>,
    /// The text that was selected.
    pub selected: String,
    /// The Markdown link that replaces it.
    pub replacement: String,
}

impl LinkInsertion {
    /// Caret offset once the replacement is applied.
    pub fn caret(&self) -> usize {
        self.range.start + self.replacement.chars().count()
    }
}

/// Decision for a single paste gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Not ours: let the default paste happen.
    PassThrough,
    /// Replace the selection with a link; the default paste must be suppressed.
    Formatted(LinkInsertion),
}

impl PasteOutcome {
    /// Whether the host should cancel its native paste.
    pub fn prevents_default(&self) -> bool {
        matches!(self, PasteOutcome::Formatted(_))
    }
}

/// Build a Markdown inline link.
pub fn format_markdown_link(text: &str, target: &str) -> String {
    format!("[{text}]({target})")
}

/// Decide how to handle a paste into `field`.
///
/// The clipboard is only read when there is a selection to wrap. A `None`
/// payload (unavailable or denied) is treated as empty.
pub fn plan_paste<F, C>(field: &F, read_clipboard: C, config: &LinkPasteConfig) -> PasteOutcome
where
    F: TextField + ?Sized,
    C: FnOnce() -> Option<String>,
{
    let selection = field.selection().clamp(field.len_chars());
    if selection.is_collapsed() {
        return PasteOutcome::PassThrough;
    }

    let Some(selected) = field.slice(selection.to_range()) else {
        return PasteOutcome::PassThrough;
    };

    let clipboard = read_clipboard().unwrap_or_default();
    let pasted = clipboard.trim();

    let target: &str = if pasted.is_empty() {
        match config.empty_target {
            EmptyTargetPolicy::SelfLink if !selected.trim().is_empty() => &selected,
            EmptyTargetPolicy::SelfLink | EmptyTargetPolicy::PassThrough => {
                tracing::debug!("paste has no link target, passing through");
                return PasteOutcome::PassThrough;
            }
        }
    } else {
        pasted
    };

    let replacement = format_markdown_link(&selected, target);
    PasteOutcome::Formatted(LinkInsertion {
        range: selection.to_range(),
        selected,
        replacement,
    })
}

/// Apply a planned insertion and notify `listener` once it is in place.
pub fn apply_link_insertion<F, L>(
    field: &mut F,
    insertion: &LinkInsertion,
    listener: &mut L,
) -> Result<EditApplied, EditorError>
where
    F: TextField + ?Sized,
    L: MutationListener + ?Sized,
{
    let applied = field.replace_range(insertion.range.clone(), &insertion.replacement)?;

    listener.field_mutated(&FieldMutated {
        field: field.name(),
        new_value: field.value(),
        cause: MutationCause::InsertFromPaste {
            data: insertion.replacement.clone(),
        },
        host_notified: applied.host_notified,
    });

    tracing::debug!(
        field = %field.name(),
        caret = applied.caret,
        "formatted paste as link"
    );
    Ok(applied)
}

/// Plan and apply a paste in one step.
///
/// Failures while editing are logged and reported as the planned outcome; they
/// never propagate to the host.
pub fn handle_paste<F, C, L>(
    field: &mut F,
    read_clipboard: C,
    config: &LinkPasteConfig,
    listener: &mut L,
) -> PasteOutcome
where
    F: TextField + ?Sized,
    C: FnOnce() -> Option<String>,
    L: MutationListener + ?Sized,
{
    let outcome = plan_paste(field, read_clipboard, config);
    if let PasteOutcome::Formatted(insertion) = &outcome {
        if let Err(e) = apply_link_insertion(field, insertion, listener) {
            tracing::warn!(error = %e, "failed to insert link");
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::PlainField;
    use crate::types::FieldSelection;

    fn paste(
        field: &mut PlainField,
        clipboard: Option<&str>,
        config: &LinkPasteConfig,
    ) -> (PasteOutcome, Vec<FieldMutated>) {
        let mut events = Vec::new();
        let clip = clipboard.map(str::to_string);
        let outcome = handle_paste(field, move || clip, config, &mut |e: &FieldMutated| {
            events.push(e.clone())
        });
        (outcome, events)
    }

    #[test]
    fn test_collapsed_selection_passes_through() {
        let mut field = PlainField::new("body", "see docs here").with_selection(4, 4);
        let mut events = Vec::new();

        let outcome = handle_paste(
            &mut field,
            || panic!("clipboard must not be read without a selection"),
            &LinkPasteConfig::default(),
            &mut |e: &FieldMutated| events.push(e.clone()),
        );

        assert_eq!(outcome, PasteOutcome::PassThrough);
        assert!(!outcome.prevents_default());
        assert_eq!(field.value(), "see docs here");
        assert_eq!(field.selection(), FieldSelection::caret(4));
        assert!(events.is_empty());
    }

    #[test]
    fn test_wraps_selection_in_link() {
        let mut field = PlainField::new("body", "see docs here").with_selection(4, 8);
        let (outcome, events) = paste(
            &mut field,
            Some("  https://example.com  "),
            &LinkPasteConfig::default(),
        );

        assert!(outcome.prevents_default());
        assert_eq!(field.value(), "see [docs](https://example.com) here");
        // 4 + len("[docs](https://example.com)")
        assert_eq!(field.selection(), FieldSelection::caret(31));

        match outcome {
            PasteOutcome::Formatted(insertion) => {
                assert_eq!(insertion.selected, "docs");
                assert_eq!(insertion.range, 4..8);
                assert_eq!(insertion.caret(), 31);
            }
            PasteOutcome::PassThrough => panic!("expected a link insertion"),
        }

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field, "body");
        assert_eq!(events[0].new_value, "see [docs](https://example.com) here");
        assert_eq!(events[0].cause.input_type(), "insertFromPaste");
        assert_eq!(
            events[0].cause.data(),
            Some("[docs](https://example.com)")
        );
    }

    #[test]
    fn test_whole_field_selected() {
        let mut field = PlainField::new("body", "docs").with_selection(0, 4);
        paste(&mut field, Some("https://x.test"), &LinkPasteConfig::default());
        assert_eq!(field.value(), "[docs](https://x.test)");
        assert_eq!(field.selection(), FieldSelection::caret(22));
    }

    #[test]
    fn test_empty_clipboard_self_links() {
        let mut field = PlainField::new("body", "go to example.com now").with_selection(6, 17);
        let (outcome, events) = paste(&mut field, Some("   "), &LinkPasteConfig::default());

        assert!(outcome.prevents_default());
        assert_eq!(field.value(), "go to [example.com](example.com) now");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_missing_clipboard_counts_as_empty() {
        let mut field = PlainField::new("body", "a link").with_selection(2, 6);
        paste(&mut field, None, &LinkPasteConfig::default());
        assert_eq!(field.value(), "a [link](link)");
    }

    #[test]
    fn test_empty_clipboard_pass_through_policy() {
        let config = LinkPasteConfig {
            empty_target: EmptyTargetPolicy::PassThrough,
        };
        let mut field = PlainField::new("body", "a link").with_selection(2, 6);
        let (outcome, events) = paste(&mut field, Some(""), &config);

        assert_eq!(outcome, PasteOutcome::PassThrough);
        assert_eq!(field.value(), "a link");
        assert!(events.is_empty());
    }

    #[test]
    fn test_blank_selection_never_self_links() {
        // Self-linking whitespace would produce a link with a blank target.
        let mut field = PlainField::new("body", "a   b").with_selection(1, 4);
        let (outcome, _) = paste(&mut field, Some(""), &LinkPasteConfig::default());
        assert_eq!(outcome, PasteOutcome::PassThrough);
        assert_eq!(field.value(), "a   b");
    }

    #[test]
    fn test_repeated_paste_nests() {
        let mut field = PlainField::new("body", "selected").with_selection(0, 8);
        paste(&mut field, Some("url"), &LinkPasteConfig::default());
        assert_eq!(field.value(), "[selected](url)");

        // Re-select the inserted link and paste the same target again.
        let mut field = field.with_selection(0, 15);
        paste(&mut field, Some("url"), &LinkPasteConfig::default());
        assert_eq!(field.value(), "[[selected](url)](url)");
    }

    #[test]
    fn test_multibyte_selection() {
        let mut field = PlainField::new("body", "voir le café ☕ ici").with_selection(8, 14);
        paste(&mut field, Some("https://café.example"), &LinkPasteConfig::default());
        assert_eq!(field.value(), "voir le [café ☕](https://café.example) ici");
        assert_eq!(
            field.selection(),
            FieldSelection::caret(8 + "[café ☕](https://café.example)".chars().count())
        );
    }

    #[test]
    fn test_stale_selection_is_clamped() {
        let mut field = PlainField::new("body", "hello");
        // Force a selection past the end, as a host might report after an edit.
        let outcome = plan_paste(
            &StaleSelection(&mut field),
            || Some("https://x.test".to_string()),
            &LinkPasteConfig::default(),
        );
        match outcome {
            PasteOutcome::Formatted(insertion) => {
                assert_eq!(insertion.range, 2..5);
                assert_eq!(insertion.replacement, "[llo](https://x.test)");
            }
            PasteOutcome::PassThrough => panic!("expected a link insertion"),
        }
    }

    #[test]
    fn test_format_markdown_link() {
        insta::assert_snapshot!(
            format_markdown_link("docs", "https://example.com"),
            @"[docs](https://example.com)"
        );
    }

    /// Field wrapper reporting a selection that runs past the text.
    struct StaleSelection<'a>(&'a mut PlainField);

    impl TextField for StaleSelection<'_> {
        fn name(&self) -> smol_str::SmolStr {
            self.0.name()
        }

        fn value(&self) -> String {
            self.0.value()
        }

        fn selection(&self) -> FieldSelection {
            FieldSelection::new(2, 99)
        }

        fn set_value(&mut self, value: &str) {
            self.0.set_value(value)
        }

        fn set_selection(&mut self, selection: FieldSelection) {
            self.0.set_selection(selection)
        }
    }
}
