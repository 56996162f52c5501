//! DigitalMe CLI - persona server over JSON-RPC.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod input;
mod output;

/// DigitalMe - a canned-reply digital persona served over JSON-RPC 2.0.
#[derive(Debug, Parser)]
#[command(name = "digitalme", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format. Overrides `logging.format`.
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP JSON-RPC server.
    Serve(commands::serve::ServeArgs),
    /// Ask the persona one question without starting a server.
    Ask(commands::ask::AskArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = digitalme_config::load_config(cli.config.as_deref())?;

    // Initialize tracing. Logs go to stderr so `ask` output stays clean.
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    match format {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!("DigitalMe starting with config: {:?}", config);

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Ask(args) => commands::ask::execute(args),
    }
}
