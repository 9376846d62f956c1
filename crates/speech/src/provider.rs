pub mod elevenlabs;

use async_trait::async_trait;

use crate::types::SpeechAudio;

/// Trait for speech synthesis provider implementations
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechAudio>;
}
