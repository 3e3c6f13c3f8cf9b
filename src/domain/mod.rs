//! Pure domain types shared across the crate.

mod bundle;
mod dependency;
mod error;
mod manifest;
mod package_manager;
mod script_map;
mod style;

pub use bundle::{Bundle, BundleFile, DEPS_MANIFEST, SCRIPTS_MANIFEST};
pub use dependency::partition_dependencies;
pub use error::AppError;
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use package_manager::PackageManager;
pub use script_map::ScriptMap;
pub use style::StyleFlavor;
