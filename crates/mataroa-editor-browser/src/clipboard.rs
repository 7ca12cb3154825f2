//! Clipboard access for paste events.

/// Plain-text payload of a paste event.
///
/// Reads the event's `DataTransfer` synchronously, trying `text/plain` and then
/// the legacy `text` format. Returns None when nothing readable is there, which
/// the formatter treats as an empty clipboard.
pub fn clipboard_text(event: &web_sys::ClipboardEvent) -> Option<String> {
    let data_transfer = event.clipboard_data()?;

    for format in ["text/plain", "text"] {
        match data_transfer.get_data(format) {
            Ok(text) if !text.is_empty() => return Some(text),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(format, error = ?e, "clipboard read failed");
            }
        }
    }

    None
}
