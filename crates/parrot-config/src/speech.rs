use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;

/// Speech relay configuration
///
/// The relay talks to exactly one upstream voice; both the credential and
/// the voice identifier are required deployment configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Voice identifier used for every synthesis call
    #[serde(default)]
    pub voice_id: String,
    /// API key for the upstream provider
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Directory holding the audio artifact slot
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice_id: String::new(),
            api_key: None,
            base_url: None,
            artifact_dir: default_artifact_dir(),
        }
    }
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("audio")
}
