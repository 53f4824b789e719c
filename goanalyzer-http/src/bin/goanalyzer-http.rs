use clap::{Parser, Subcommand};
use goanalyzer_http::server::{ServerConfig, start_server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// goanalyzer HTTP server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "GOANALYZER_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "GOANALYZER_PORT")]
    port: u16,

    /// Largest accepted input, in bytes
    #[arg(long, env = "GOANALYZER_MAX_INPUT_BYTES")]
    max_input_bytes: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &cli.command {
        Some(Commands::Config { file }) => {
            tracing::info!("Loading configuration from file: {}", file.display());
            ServerConfig::from_file(file)?
        }
        None => ServerConfig {
            host: cli.host,
            port: cli.port,
            ..Default::default()
        },
    };
    if let Some(limit) = cli.max_input_bytes {
        config.analyzer.max_input_bytes = limit;
    }

    start_server(config).await
}
