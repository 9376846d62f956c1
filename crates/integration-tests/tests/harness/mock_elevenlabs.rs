//! Mock ElevenLabs backend server for integration tests
//!
//! Implements the text-to-speech endpoint and captures requests so tests
//! can assert on the outbound wire format

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock ElevenLabs backend that returns predictable audio
pub struct MockElevenLabs {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    /// Status returned instead of audio (None = succeed)
    fail_status: Option<u16>,
    /// Canned audio; when unset the request text bytes are echoed back
    audio: Mutex<Option<Vec<u8>>>,
    last_request: Mutex<Option<CapturedRequest>>,
}

/// Snapshot of the most recent synthesis request
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub voice_id: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

impl MockElevenLabs {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock server that fails every request with the given status
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Some(status)).await
    }

    async fn start_inner(fail_status: Option<u16>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            fail_status,
            audio: Mutex::new(None),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_text_to_speech))
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

    /// Base URL for configuring the mock as the upstream
    ///
    /// Includes `/v1` since the provider appends `/text-to-speech/{voice}`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Set the canned audio returned for subsequent requests
    pub fn set_audio(&self, audio: &[u8]) {
        *self.state.audio.lock().unwrap() = Some(audio.to_vec());
    }

    /// Number of synthesis requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// The most recent synthesis request, if any
    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockElevenLabs {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_text_to_speech(
    State(state): State<Arc<MockState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    *state.last_request.lock().unwrap() = Some(CapturedRequest {
        voice_id,
        api_key: headers
            .get("xi-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: body.clone(),
    });

    if let Some(status) = state.fail_status {
        return (
            StatusCode::from_u16(status).expect("valid status code"),
            Json(serde_json::json!({"detail": "mock upstream failure"})),
        )
            .into_response();
    }

    let audio = state.audio.lock().unwrap().clone().unwrap_or_else(|| {
        body["text"].as_str().unwrap_or_default().as_bytes().to_vec()
    });

    ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
}
