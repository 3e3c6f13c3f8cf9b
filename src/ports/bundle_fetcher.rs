use crate::domain::{AppError, Bundle};

/// Retrieves a named remote bundle.
pub trait BundleFetcher {
    /// Fetch the bundle addressed by `id`. Bundles are fetched fresh on every
    /// call; nothing is cached.
    fn fetch(&self, id: &str) -> Result<Bundle, AppError>;
}
