//! Output formatting for CLI responses.

/// Prints a persona reply.
pub fn print_reply(reply: &str) {
    println!("{reply}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
