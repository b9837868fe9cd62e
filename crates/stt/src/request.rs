use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::{error::SttError, types::TranscriptionRequest};

/// Build the multipart form for a transcription request
///
/// Reads the audio file into memory; the handle is released before the
/// network call starts. Optional fields are omitted when unset, the
/// remote validates everything else.
pub(crate) async fn build_form(request: &TranscriptionRequest) -> crate::error::Result<Form> {
    let audio = tokio::fs::read(&request.file).await.map_err(|source| SttError::FileAccess {
        path: request.file.clone(),
        source,
    })?;

    let filename = request
        .file
        .file_name()
        .map_or_else(|| String::from("audio"), |name| name.to_string_lossy().into_owned());

    let part = Part::bytes(audio)
        .file_name(filename)
        .mime_str(content_type_for(&request.file))
        .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?;

    let mut form = Form::new().part("file", part).text("model", request.model.clone());

    if let Some(language) = request.language.as_deref().filter(|l| !l.is_empty()) {
        form = form.text("language", language.to_owned());
    }

    if let Some(prompt) = request.prompt.as_deref().filter(|p| !p.is_empty()) {
        form = form.text("prompt", prompt.to_owned());
    }

    form = form
        .text("response_format", request.response_format.to_string())
        .text("temperature", request.temperature.to_string());

    if request.word_timestamps {
        form = form.text("timestamp_granularities[]", "word");
    }

    Ok(form)
}

/// Guess the MIME type of the audio file from its extension
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("mp3" | "mpga" | "mpeg") => "audio/mpeg",
        Some("mp4" | "m4a") => "audio/mp4",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg" | "oga") => "audio/ogg",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}
