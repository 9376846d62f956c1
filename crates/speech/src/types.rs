use serde::Deserialize;

/// Speech synthesis request
///
/// `text` is optional at the schema level so that absent and `null` values
/// both reach the missing-input rejection instead of failing JSON parsing.
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// Text to synthesize into speech
    #[serde(default)]
    pub text: Option<String>,
}

/// Raw audio response from the TTS provider
pub struct SpeechAudio {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechAudio {
    /// Convert the audio into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
