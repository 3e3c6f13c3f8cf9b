//! Console narration helpers.

/// Progress line on stdout.
pub fn info(message: &str) {
    println!("{message}");
}

/// Warning line on stderr.
pub fn warn(message: &str) {
    eprintln!("⚠️  {message}");
}
