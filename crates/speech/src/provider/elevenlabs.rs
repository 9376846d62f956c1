use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{error::SpeechError, http_client::http_client, types::SpeechAudio};

use super::SpeechProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// Voice settings sent with every request; not configurable per call
const STABILITY: f64 = 0.5;
const SIMILARITY_BOOST: f64 = 0.75;

/// `ElevenLabs` TTS provider bound to a single voice
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    voice_id: String,
}

impl ElevenLabsProvider {
    pub fn new(api_key: SecretString, voice_id: String, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            voice_id,
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: STABILITY,
            similarity_boost: SIMILARITY_BOOST,
        }
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechAudio> {
        let url = format!("{}/text-to-speech/{}", self.base_url, self.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: voice={}, input_len={}",
            self.voice_id,
            text.len(),
        );

        let body = ElevenLabsRequest {
            text,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret().to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                SpeechError::Connection(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(SpeechError::Upstream(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            SpeechError::Internal(None)
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }
}
