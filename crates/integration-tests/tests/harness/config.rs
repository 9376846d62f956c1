//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use parrot_config::{Config, HealthConfig, ServerConfig, SpeechConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder pointed at a mock upstream
    ///
    /// The artifact directory should be a per-test temporary directory so
    /// tests do not race on a shared slot.
    pub fn new(upstream_url: &str, artifact_dir: &Path) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                speech: SpeechConfig {
                    voice_id: "test-voice".to_owned(),
                    api_key: Some(SecretString::from("test-key")),
                    base_url: Some(upstream_url.to_owned()),
                    artifact_dir: artifact_dir.to_path_buf(),
                },
            },
        }
    }

    /// Override the configured voice id
    #[allow(dead_code)]
    pub fn with_voice(mut self, voice_id: &str) -> Self {
        self.config.speech.voice_id = voice_id.to_owned();
        self
    }

    /// Disable health endpoint
    #[allow(dead_code)]
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
