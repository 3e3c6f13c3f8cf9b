use crate::ports::{BundleFetcher, CommandRunner, IdSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CommandRunner, F: BundleFetcher, I: IdSource> {
    runner: C,
    fetcher: F,
    ids: I,
}

impl<C: CommandRunner, F: BundleFetcher, I: IdSource> AppContext<C, F, I> {
    /// Create a new application context.
    pub fn new(runner: C, fetcher: F, ids: I) -> Self {
        Self { runner, fetcher, ids }
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    /// Get a reference to the bundle fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the id source.
    pub fn ids(&self) -> &I {
        &self.ids
    }
}
