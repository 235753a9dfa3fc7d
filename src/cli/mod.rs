use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "LISTEN_ADDRESS")]
    #[arg(default_value = "0.0.0.0:3000")]
    pub listen_address: SocketAddr,
    /// NDJSON file the locations are persisted to. Locations are kept in memory if omitted.
    #[arg(long, env = "STORAGE_PATH")]
    pub storage_path: Option<PathBuf>,
    /// Origins allowed by the CORS policy. Any origin is allowed if none are given.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<HeaderValue>,
    #[arg(long, env = "QUICKWIT_URL")]
    pub quickwit_url: Option<Url>,
    #[arg(long, env = "LOG_LEVEL")]
    #[arg(default_value = "info")]
    pub log_level: LevelFilter,
}
