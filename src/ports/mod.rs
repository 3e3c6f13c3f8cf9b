//! Trait seams between the application layer and the outside world.

mod bundle_fetcher;
mod command_runner;
mod id_source;

pub use bundle_fetcher::BundleFetcher;
pub use command_runner::CommandRunner;
pub use id_source::IdSource;
