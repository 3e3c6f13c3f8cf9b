//! Concrete implementations of the port traits plus filesystem IO.

mod http_bundle_fetcher;
mod manifest_filesystem;
mod process_command_runner;
mod rand_id_source;

pub use http_bundle_fetcher::HttpBundleFetcher;
pub use manifest_filesystem::FilesystemManifestStore;
pub use process_command_runner::ProcessCommandRunner;
pub use rand_id_source::RandIdSource;
