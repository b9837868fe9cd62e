//! Mock speech API backend for integration tests
//!
//! Implements a minimal OpenAI-compatible audio API that records each
//! multipart submission and returns canned responses

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// One multipart submission as seen by the backend
#[derive(Debug, Default, Clone)]
pub struct ReceivedRequest {
    pub endpoint: String,
    pub authorization: Option<String>,
    pub filename: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl ReceivedRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

/// Mock backend that returns predictable responses
pub struct MockSpeechApi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    transcription_count: AtomicU32,
    translation_count: AtomicU32,
    status: StatusCode,
    body: String,
    received: Mutex<Vec<ReceivedRequest>>,
}

impl MockSpeechApi {
    /// Start the mock server with a 200 response, returning immediately
    pub async fn start(body: &str) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::OK, body).await
    }

    /// Start a mock server that answers every request with the given status
    pub async fn start_with_status(status: u16, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(StatusCode::from_u16(status)?, body).await
    }

    async fn start_inner(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            transcription_count: AtomicU32::new(0),
            translation_count: AtomicU32::new(0),
            status,
            body: body.to_owned(),
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/audio/translations", routing::post(handle_translation))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for pointing the client at the mock
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Number of translation requests received
    pub fn translation_count(&self) -> u32 {
        self.state.translation_count.load(Ordering::Relaxed)
    }

    /// The most recent submission, if any
    pub fn last_request(&self) -> Option<ReceivedRequest> {
        self.state.received.lock().unwrap().last().cloned()
    }
}

impl Drop for MockSpeechApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> impl IntoResponse {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);
    record(&state, "/v1/audio/transcriptions", &headers, multipart).await;

    (state.status, state.body.clone())
}

async fn handle_translation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> impl IntoResponse {
    state.translation_count.fetch_add(1, Ordering::Relaxed);
    record(&state, "/v1/audio/translations", &headers, multipart).await;

    (state.status, state.body.clone())
}

async fn record(state: &MockState, endpoint: &str, headers: &HeaderMap, mut multipart: Multipart) {
    let mut received = ReceivedRequest {
        endpoint: endpoint.to_owned(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        ..ReceivedRequest::default()
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_owned();

        if name == "file" {
            received.filename = field.file_name().map(str::to_owned);
            let _ = field.bytes().await;
        } else {
            let value = field.text().await.unwrap_or_default();
            received.fields.push((name, value));
        }
    }

    state.received.lock().unwrap().push(received);
}
