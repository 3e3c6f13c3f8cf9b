use std::collections::BTreeMap;

use serde::Deserialize;

/// Reserved filename carrying a bundle's dependency list.
pub const DEPS_MANIFEST: &str = "deps.json";

/// Reserved filename carrying a bundle's script-name map.
pub const SCRIPTS_MANIFEST: &str = "scripts.json";

/// A single named text entry inside a bundle.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BundleFile {
    pub filename: String,
    pub content: String,
}

/// A remotely fetched set of named text files.
///
/// The two reserved manifest names (`deps.json`, `scripts.json`) carry
/// structured data and are never materialized as project files. A `BTreeMap`
/// keeps the copy phase's encounter order stable.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub id: String,
    pub files: BTreeMap<String, BundleFile>,
}

impl Bundle {
    /// Whether `name` is one of the reserved manifest filenames.
    pub fn is_manifest(name: &str) -> bool {
        name == DEPS_MANIFEST || name == SCRIPTS_MANIFEST
    }
}
