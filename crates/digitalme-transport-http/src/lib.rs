//! HTTP/JSON-RPC transport adapter for DigitalMe.
//! Exposes the persona over `POST /mcp`, plus `GET /health` and `GET /`.

mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_router, status_for, AppState};
pub use server::HttpServer;
