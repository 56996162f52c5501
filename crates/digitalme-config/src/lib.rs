//! # digitalme-config
//!
//! Configuration management for the DigitalMe server.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::DigitalMeConfig;
