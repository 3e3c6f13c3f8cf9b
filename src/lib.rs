//! sprig: scaffold parcel-based web projects extended by remote script bundles.
//!
//! A project is created by `init`: directory tree, git and package-manager
//! setup, lint configs and templates, then zero or more remote script bundles
//! whose dependencies are installed and whose files land under `scripts/`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod templates;
mod ui;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{HttpBundleFetcher, ProcessCommandRunner, RandIdSource};
use app::AppContext;
use app::commands::init;

pub use app::commands::init::InitOptions;
pub use domain::{AppError, PackageManager, StyleFlavor};

/// Create a new project directory under the current working directory.
pub fn init(options: InitOptions) -> Result<(), AppError> {
    let runner = ProcessCommandRunner::new();
    let fetcher = HttpBundleFetcher::default_endpoint()?;
    let ctx = AppContext::new(runner, fetcher, RandIdSource::new());

    let cwd = std::env::current_dir()?;
    init::execute(&ctx, &cwd, &options)?;

    println!("✅ Created project '{}'", options.name);
    Ok(())
}
