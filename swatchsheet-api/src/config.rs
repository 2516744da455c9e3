use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server settings, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "swatchsheet-api", about = "HTTP API for swatchsheet", version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "SWATCHSHEET_BIND", default_value = "0.0.0.0:5030")]
    pub bind: SocketAddr,

    /// Reference table served by /api/references
    #[arg(long, env = "SWATCHSHEET_TABLE")]
    pub table: Option<PathBuf>,
}
