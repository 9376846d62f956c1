#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod speech;

use serde::Deserialize;

pub use health::HealthConfig;
pub use server::ServerConfig;
pub use speech::SpeechConfig;

/// Top-level Parrot configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech relay configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}
