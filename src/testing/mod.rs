//! Shared in-memory fakes for unit tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, Bundle, BundleFile};
use crate::ports::{BundleFetcher, CommandRunner, IdSource};

/// One recorded external-command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl RecordedCommand {
    /// Reconstructed command line, convenient for assertions.
    pub fn line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Command runner that records invocations instead of spawning processes.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: Mutex<Vec<RecordedCommand>>,
    /// When set, any invocation whose command line starts with this string
    /// fails with `CommandFailed`.
    pub fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(prefix: &str) -> Self {
        Self { commands: Mutex::new(Vec::new()), fail_on: Some(prefix.to_string()) }
    }

    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.recorded().iter().map(RecordedCommand::line).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), AppError> {
        let command = RecordedCommand {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        };
        let line = command.line();
        self.commands.lock().unwrap().push(command);

        match &self.fail_on {
            Some(prefix) if line.starts_with(prefix.as_str()) => {
                Err(AppError::CommandFailed { command: line })
            }
            _ => Ok(()),
        }
    }
}

/// Bundle fetcher serving bundles from memory.
#[derive(Default)]
pub struct StaticFetcher {
    bundles: BTreeMap<String, Bundle>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle under `id` from `(filename, content)` pairs.
    pub fn with_bundle(mut self, id: &str, files: &[(&str, &str)]) -> Self {
        let files = files
            .iter()
            .map(|(name, content)| {
                (
                    name.to_string(),
                    BundleFile { filename: name.to_string(), content: content.to_string() },
                )
            })
            .collect();
        self.bundles.insert(id.to_string(), Bundle { id: id.to_string(), files });
        self
    }
}

impl BundleFetcher for StaticFetcher {
    fn fetch(&self, id: &str) -> Result<Bundle, AppError> {
        self.bundles.get(id).cloned().ok_or_else(|| AppError::Fetch {
            id: id.to_string(),
            details: "unknown bundle".to_string(),
        })
    }
}

/// Id source yielding a deterministic numbered sequence.
#[derive(Default)]
pub struct SequenceIds {
    suffixes: Mutex<u32>,
    prefixes: Mutex<u32>,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequenceIds {
    fn staging_suffix(&self) -> String {
        let mut counter = self.suffixes.lock().unwrap();
        *counter += 1;
        format!("staging-suffix-{:06}", *counter)
    }

    fn collision_prefix(&self) -> String {
        let mut counter = self.prefixes.lock().unwrap();
        *counter += 1;
        // 4 characters, like the production source.
        format!("p{:03}", *counter)
    }
}
