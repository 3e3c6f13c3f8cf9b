//! Application layer: orchestration over the port traits.

pub mod bundle_loader;
pub mod commands;
mod context;
pub mod installer;

pub use context::AppContext;
