use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::SttError,
    http_client::http_client,
    request::build_form,
    types::{SttResponse, TranscriptionRequest},
};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Client for the `OpenAI` audio transcription and translation endpoints
pub struct WhisperClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl WhisperClient {
    pub fn new(api_key: SecretString, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Submit the audio and capture the raw response body
    ///
    /// Issues exactly one request, chosen by the request's task. A non-success
    /// status is returned as [`SttError::Api`] with the body preserved; no
    /// retry is attempted for any failure.
    pub async fn submit(&self, request: &TranscriptionRequest) -> crate::error::Result<SttResponse> {
        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request.task.endpoint_path()
        );

        tracing::debug!(
            "Whisper request: file={}, model={}, endpoint={url}",
            request.file.display(),
            request.model,
        );

        let form = build_form(request).await?;

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::Connection(format!("Failed to send request to Whisper: {e}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SttError::Connection(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            tracing::error!("Whisper API error ({status}): {body}");

            return Err(SttError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Whisper request complete, {} bytes", body.len());

        Ok(SttResponse {
            status: status.as_u16(),
            body,
        })
    }
}
