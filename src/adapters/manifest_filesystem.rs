use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, MANIFEST_FILE, PackageManifest};
use crate::ui;

/// Reads and writes a project's `package.json`, tolerating absence.
#[derive(Debug, Clone)]
pub struct FilesystemManifestStore {
    root: PathBuf,
}

impl FilesystemManifestStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Read the manifest. A missing file yields `Ok(None)`; a malformed one
    /// is logged and treated as absent so scaffolding can still proceed.
    pub fn read(&self) -> Result<Option<PackageManifest>, AppError> {
        let path = self.manifest_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(PackageManifest::from_value(value))),
            Err(e) => {
                ui::warn(&format!("Ignoring malformed {MANIFEST_FILE}: {e}"));
                Ok(None)
            }
        }
    }

    pub fn write(&self, manifest: &PackageManifest) -> Result<(), AppError> {
        fs::write(self.manifest_path(), manifest.to_pretty_string())?;
        Ok(())
    }
}
