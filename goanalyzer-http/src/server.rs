use axum::extract::DefaultBodyLimit;
use goanalyzer_core::{
    InternalResult,
    config::{self, AnalyzerConfig},
    pipeline::Analyzer,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Form bodies are percent-encoded, so they may be up to three times the
/// size of the code they carry.
const BODY_OVERHEAD_FACTOR: usize = 3;
const BODY_OVERHEAD_BYTES: usize = 1024;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Analyzer limits
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        config::from_file(path)
    }

    /// Largest request body accepted before the analyzer sees the input.
    pub fn body_limit(&self) -> usize {
        self.analyzer
            .max_input_bytes
            .saturating_mul(BODY_OVERHEAD_FACTOR)
            .saturating_add(BODY_OVERHEAD_BYTES)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Shared, read-only request state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new(config)),
        }
    }
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(config.analyzer.clone());
    info!(
        max_input_bytes = config.analyzer.max_input_bytes,
        "Initialized analyzer"
    );

    let app = create_api_router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.body_limit()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
