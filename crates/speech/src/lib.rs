#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod artifact;
mod error;
mod http_client;
mod provider;
mod relay;
mod request;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

pub use artifact::ArtifactStore;
pub use error::{Result, SpeechError};
pub use relay::{Relay, RelayBuilder};
pub use types::{SpeakRequest, SpeechAudio};
use request::ExtractPayload;

/// Build the speech relay from configuration
pub fn build_relay(config: &parrot_config::Config) -> anyhow::Result<Arc<Relay>> {
    let relay = Arc::new(
        RelayBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech relay: {e}"))?,
    );
    Ok(relay)
}

/// Create the endpoint router for the speech relay
pub fn endpoint_router() -> Router<Arc<Relay>> {
    Router::new().route("/api/speak", post(speak))
}

/// Handle speech synthesis requests
async fn speak(
    State(relay): State<Arc<Relay>>,
    ExtractPayload(request): ExtractPayload<types::SpeakRequest>,
) -> Result<axum::response::Response> {
    tracing::debug!("speak handler called");

    let response = relay.speak(request).await?;

    tracing::debug!("speech synthesis complete");

    Ok(response.into_response())
}
