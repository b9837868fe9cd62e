use std::path::PathBuf;

use strum::{Display, EnumString};

/// Remote operation to perform on the submitted audio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Task {
    /// Speech to text in the spoken language
    #[default]
    Transcribe,
    /// Speech to English text, regardless of the spoken language
    Translate,
}

impl Task {
    /// Endpoint path relative to the API base URL
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Transcribe => "/audio/transcriptions",
            Self::Translate => "/audio/translations",
        }
    }
}

/// Requested response format, following the `OpenAI` Whisper API
///
/// A single value drives both the `response_format` field on the wire and
/// the local rendering branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResponseFormat {
    /// Structured document with the transcript and metadata
    Json,
    /// Plain transcript text
    #[default]
    Text,
    /// SubRip subtitles
    Srt,
    /// Structured document with segment and word timing
    VerboseJson,
    /// WebVTT subtitles
    Vtt,
}

impl ResponseFormat {
    /// Canonical file extension for transcripts in this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json | Self::VerboseJson => "json",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Text => "txt",
        }
    }
}

/// Transcription request following the `OpenAI` Whisper API format
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Path to the audio file to submit
    pub file: PathBuf,
    /// Model identifier (e.g. "whisper-1")
    pub model: String,
    /// Optional language hint (ISO 639-1)
    pub language: Option<String>,
    /// Optional prompt to guide transcription
    pub prompt: Option<String>,
    /// Requested response format
    pub response_format: ResponseFormat,
    /// Sampling temperature (0-1)
    pub temperature: f32,
    /// Request word-level timing metadata (structured formats only)
    pub word_timestamps: bool,
    /// Remote operation to perform
    pub task: Task,
}

/// Raw response captured from a successful API call
///
/// Consumed once by rendering; nothing is persisted beyond the one write.
#[derive(Debug)]
pub struct SttResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body text
    pub body: String,
}
