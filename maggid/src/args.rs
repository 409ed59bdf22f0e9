use std::path::PathBuf;

use clap::Parser;

/// Maggid guidance service
#[derive(Debug, Parser)]
#[command(name = "maggid", about = "Spiritual guidance API backed by Gemini, with speech synthesis")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "maggid.toml", env = "MAGGID_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "MAGGID_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
