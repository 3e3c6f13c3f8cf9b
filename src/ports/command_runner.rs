use std::path::Path;

use crate::domain::AppError;

/// Runs an external executable, streaming its output to the console.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`.
    ///
    /// Exit code 0 resolves; any other exit code fails with the reconstructed
    /// command line. Every invocation is attempted exactly once, no retries.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), AppError>;
}
