use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Directory the static tree is served from.
    pub root_dir: PathBuf,
    /// Candidate index files tried, in order, when a directory is requested.
    pub index_files: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Keep-alive for HTTP/1.1 connections; 0 disables it.
    pub keep_alive_timeout: u64,
    /// Upper bound on a single connection's lifetime, in seconds.
    pub request_timeout: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("coiserve").required(false))
            .add_source(config::Environment::with_prefix("COISERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("resources.root_dir", "build/web")?
            .set_default(
                "resources.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.request_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

/// Shared state handed to the request handler at construction time.
///
/// The root is canonicalized once at startup and never changes; it is the
/// anchor for the path traversal guard.
pub struct AppState {
    pub config: Config,
    pub root_dir: PathBuf,
}

impl AppState {
    pub const fn new(config: Config, root_dir: PathBuf) -> Self {
        Self { config, root_dir }
    }
}
