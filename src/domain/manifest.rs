use serde_json::{Map, Value, json};

use crate::domain::ScriptMap;

/// Filename of the project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// In-memory view of a project's `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest(Value);

impl Default for PackageManifest {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl PackageManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed manifest value. Non-object values are replaced
    /// with an empty object so later mutation always has somewhere to land.
    pub fn from_value(value: Value) -> Self {
        if value.is_object() { Self(value) } else { Self::default() }
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut rendered =
            serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }

    /// Baseline config for scaffolded projects: browserslist plus the parcel
    /// build/dev scripts.
    pub fn apply_base_config(&mut self) {
        let object = self.object_mut();
        object.insert("browserslist".to_string(), json!(["defaults"]));

        let scripts = Self::scripts_entry(object);
        scripts.insert("build".to_string(), json!("parcel build src/index.html"));
        scripts.insert("dev".to_string(), json!("parcel src/index.html"));
    }

    /// Extend (never replace) the manifest's `scripts` object with `scripts`.
    pub fn merge_scripts(&mut self, scripts: &ScriptMap) {
        if scripts.is_empty() {
            return;
        }

        let entries = Self::scripts_entry(self.object_mut());
        for (name, command) in scripts.iter() {
            entries.insert(name.clone(), json!(command));
        }
    }

    /// The `scripts` object, if present.
    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.0.get("scripts").and_then(Value::as_object)
    }

    fn object_mut(&mut self) -> &mut Map<String, Value> {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        self.0.as_object_mut().unwrap_or_else(|| unreachable!("manifest root is an object"))
    }

    fn scripts_entry(object: &mut Map<String, Value>) -> &mut Map<String, Value> {
        let entry = object.entry("scripts".to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        entry.as_object_mut().unwrap_or_else(|| unreachable!("scripts entry is an object"))
    }
}
