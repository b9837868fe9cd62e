#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod format;
mod http_client;
mod request;
mod types;

pub use client::WhisperClient;
pub use error::{Result, SttError};
pub use format::render;
pub use types::{ResponseFormat, SttResponse, Task, TranscriptionRequest};

/// Model submitted when none is requested
pub const DEFAULT_MODEL: &str = "whisper-1";
