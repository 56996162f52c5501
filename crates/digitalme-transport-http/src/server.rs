//! HTTP server that binds an axum Router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use digitalme_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the JSON-RPC transport.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `handler` — shared JSON-RPC dispatcher
    /// * `addr` — socket address to listen on
    pub fn new(handler: Arc<McpHandler>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { handler },
        }
    }

    /// The address the server will bind to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener =
            TcpListener::bind(self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr,
                    source: e,
                })?;

        tracing::info!(addr = %self.addr, "DigitalMe MCP HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(HttpTransportError::Serve)?;

        Ok(())
    }
}
