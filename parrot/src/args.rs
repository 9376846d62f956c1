use std::path::PathBuf;

use clap::Parser;

/// Parrot speech relay
#[derive(Debug, Parser)]
#[command(name = "parrot", about = "HTTP relay that forwards text to a hosted TTS service")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "parrot.toml", env = "PARROT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PARROT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
