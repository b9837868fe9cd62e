use std::path::PathBuf;

use clap::Parser;
use stt::ResponseFormat;

/// Hark audio transcription client
#[derive(Debug, Parser)]
#[command(
    name = "hark",
    version,
    about = "Transcribe or translate audio files via the OpenAI speech API"
)]
pub struct Args {
    /// Path to the audio file to submit
    #[arg(short, long)]
    pub file: PathBuf,

    /// Model identifier
    #[arg(short, long, default_value = stt::DEFAULT_MODEL)]
    pub model: String,

    /// Language of the spoken audio (ISO 639-1 hint)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Transcript destination; "-" writes to stdout.
    /// Defaults to the input path with the format's extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sampling temperature (0-1)
    #[arg(short, long, default_value_t = 0.0)]
    pub temperature: f32,

    /// Optional text to guide the model's style
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Transcript format (case-insensitive): json, text, srt, verbose_json, vtt
    #[arg(short, long, default_value_t = ResponseFormat::Text)]
    pub response_format: ResponseFormat,

    /// Request word-level timestamps (structured formats only)
    #[arg(long)]
    pub word_timestamps: bool,

    /// Translate the audio to English instead of transcribing it
    #[arg(long)]
    pub translate: bool,

    /// API key; the flag wins over the environment
    #[arg(short, long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the speech API
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
