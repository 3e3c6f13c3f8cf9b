use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::CommandRunner;

/// Command runner backed by `std::process::Command` with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| AppError::CommandFailed {
                command: format!("{}: {}", command_line(program, args), e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::CommandFailed { command: command_line(program, args) })
        }
    }
}
