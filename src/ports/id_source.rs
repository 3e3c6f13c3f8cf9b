/// Source of random identifiers for staging directories and renamed files.
///
/// Injected rather than sampled ambiently so tests can supply deterministic
/// ids.
pub trait IdSource {
    /// Collision-resistant suffix for a staging directory name.
    fn staging_suffix(&self) -> String;

    /// Short prefix applied to a renamed file on destination collision.
    fn collision_prefix(&self) -> String;
}
