//! CLI command definitions.

pub mod ask;
pub mod serve;
