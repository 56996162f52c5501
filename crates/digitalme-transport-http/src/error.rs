//! Failures of the persona HTTP listener.
//!
//! Request-level problems never surface here; they are answered with
//! JSON-RPC error envelopes by the router.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Why the DigitalMe HTTP server could not start or stopped serving.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The listening socket could not be opened.
    #[error("cannot listen for JSON-RPC requests on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The accept loop ended with an I/O error.
    #[error("persona HTTP server stopped: {0}")]
    Serve(#[source] io::Error),
}

impl HttpTransportError {
    /// The address involved, when the failure happened at bind time.
    pub fn addr(&self) -> Option<SocketAddr> {
        match self {
            Self::Bind { addr, .. } => Some(*addr),
            Self::Serve(_) => None,
        }
    }
}
