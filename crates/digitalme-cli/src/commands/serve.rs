//! `digitalme serve` command.
//!
//! Starts the HTTP server exposing the persona via JSON-RPC 2.0.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;

use digitalme_config::{ConfigError, DigitalMeConfig};
use digitalme_mcp::McpHandler;
use digitalme_persona::IVAN;
use digitalme_transport_http::HttpServer;

/// Start the HTTP JSON-RPC server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port to listen on (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Applies CLI overrides on top of the loaded configuration.
fn resolve_addr(args: &ServeArgs, config: &DigitalMeConfig) -> Result<SocketAddr, ConfigError> {
    let mut server = config.server.clone();
    if let Some(host) = &args.host {
        server.host = host.clone();
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server.socket_addr()
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &DigitalMeConfig) -> anyhow::Result<()> {
    let addr = resolve_addr(args, config)?;
    let handler = Arc::new(McpHandler::new(IVAN));
    let server = HttpServer::new(handler, addr);

    tracing::info!(personality = IVAN.name, %addr, "starting DigitalMe MCP server");

    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                tracing::error!(addr = ?e.addr(), error = %e, "DigitalMe server failed");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
