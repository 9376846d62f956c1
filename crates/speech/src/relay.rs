use crate::{
    artifact::ArtifactStore,
    error::SpeechError,
    provider::{SpeechProvider, elevenlabs::ElevenLabsProvider},
    types::{SpeakRequest, SpeechAudio},
};

/// Speech relay: forwards text to the provider and persists the result
pub struct Relay {
    provider: Box<dyn SpeechProvider>,
    store: ArtifactStore,
}

impl Relay {
    /// Synthesize the request text and persist the returned audio
    ///
    /// Empty or missing text is rejected before any outbound call. On
    /// success the artifact slot holds exactly the returned bytes; on any
    /// failure it is left untouched.
    pub async fn speak(&self, request: SpeakRequest) -> crate::error::Result<SpeechAudio> {
        let text = request.text.unwrap_or_default();

        if text.is_empty() {
            return Err(SpeechError::MissingInput);
        }

        let audio = self.provider.synthesize(&text).await?;

        self.store.persist(&audio.audio).await?;

        tracing::debug!(
            artifact = %self.store.path().display(),
            bytes = audio.audio.len(),
            "artifact persisted"
        );

        Ok(audio)
    }

    /// Path of the persisted artifact slot
    pub fn artifact_path(&self) -> &std::path::Path {
        self.store.path()
    }
}

/// Builder for constructing the relay from configuration
pub struct RelayBuilder<'a> {
    config: &'a parrot_config::Config,
}

impl<'a> RelayBuilder<'a> {
    pub const fn new(config: &'a parrot_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Relay> {
        let speech = &self.config.speech;

        let api_key = speech
            .api_key
            .clone()
            .ok_or_else(|| SpeechError::Config("API key required for the speech provider".to_string()))?;

        let provider = Box::new(ElevenLabsProvider::new(
            api_key,
            speech.voice_id.clone(),
            speech.base_url.clone(),
        ));

        let store = ArtifactStore::new(&speech.artifact_dir)?;

        tracing::debug!(voice = %speech.voice_id, "speech relay initialized");

        Ok(Relay {
            provider,
            store,
        })
    }
}
