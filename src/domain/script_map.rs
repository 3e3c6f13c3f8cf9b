use std::collections::BTreeMap;

/// Script-name to shell-command table collected from bundles.
///
/// Fragments from sequentially loaded bundles merge with last-write-wins on
/// name collision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptMap(BTreeMap<String, String>);

impl ScriptMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, command: String) {
        self.0.insert(name, command);
    }

    /// Merge `other` into this map; entries in `other` win on collision.
    pub fn merge(&mut self, other: ScriptMap) {
        self.0.extend(other.0);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, String>> for ScriptMap {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }
}
