//! Transcript rendering for the supported response formats.

use serde_json::Value;

use crate::types::ResponseFormat;

/// Render a raw response body for display or storage
///
/// Structured formats are re-serialized with pretty-printing. `text` extracts
/// the `text` field when the body looks like a JSON document; subtitle
/// formats pass through unchanged. A body that fails structured parsing is
/// passed through raw after a warning, the write still counts as a success.
pub fn render(format: ResponseFormat, raw: &str) -> String {
    match try_render(format, raw) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::warn!("failed to process {format} response, writing raw body: {e}");
            raw.to_owned()
        }
    }
}

fn try_render(format: ResponseFormat, raw: &str) -> serde_json::Result<String> {
    match format {
        ResponseFormat::Json | ResponseFormat::VerboseJson => {
            let document: Value = serde_json::from_str(raw)?;
            serde_json::to_string_pretty(&document)
        }
        ResponseFormat::Text if raw.trim_start().starts_with('{') => {
            let document: Value = serde_json::from_str(raw)?;

            // A document without a `text` field is kept as-is.
            Ok(document
                .get("text")
                .and_then(Value::as_str)
                .map_or_else(|| raw.to_owned(), str::to_owned))
        }
        ResponseFormat::Text | ResponseFormat::Srt | ResponseFormat::Vtt => Ok(raw.to_owned()),
    }
}
