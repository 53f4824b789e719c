use clap::{Parser, Subcommand};
use goanalyzer_cli::{
    config::{CliResult, resolve_config},
    input::read_source,
    output::{OutputFormat, format_analysis, format_tokens, format_verdicts},
};
use goanalyzer_core::{Analyzer, tokenize};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON analyzer config file
    #[arg(short, long, global = true, env = "GOANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// Largest accepted input, in bytes
    #[arg(long, global = true, env = "GOANALYZER_MAX_INPUT_BYTES")]
    max_input_bytes: Option<usize>,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List tokens and the per-kind census
    Tokens(SourceArgs),

    /// Run the structural and convention checks; exits with 1 on violations
    Check(SourceArgs),

    /// Run every analysis
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Parser)]
struct SourceArgs {
    /// Source file, or `-` for stdin
    #[arg(default_value = "-")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = resolve_config(cli.config.as_deref(), cli.max_input_bytes)?;
    debug!(max_input_bytes = config.max_input_bytes, "config resolved");
    let analyzer = Analyzer::new(config);

    match cli.command {
        Commands::Tokens(args) => {
            let source = read_source(&args.file, analyzer.config())?;
            print!("{}", format_tokens(&tokenize(&source)));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => {
            let source = read_source(&args.file, analyzer.config())?;
            let analysis = analyzer.analyze(&source)?;
            print!("{}", format_verdicts(&analysis));
            if analysis.is_clean() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Commands::Analyze { source, output } => {
            let text = read_source(&source.file, analyzer.config())?;
            let analysis = analyzer.analyze(&text)?;
            print!("{}", format_analysis(analysis, output)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
