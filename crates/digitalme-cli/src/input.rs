//! Input resolution for CLI commands.
//!
//! A message argument of `-` is read from stdin; anything else is used as-is.

use std::io::Read;

/// Resolves the final message text from the CLI argument.
pub fn resolve_message(message: &str) -> anyhow::Result<String> {
    match message {
        "-" => read_from_stdin(),
        other => Ok(other.to_string()),
    }
}

/// Reads the whole of stdin, trimming the trailing newline.
fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}
