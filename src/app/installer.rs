use std::path::Path;

use crate::domain::{AppError, PackageManager};
use crate::ports::CommandRunner;

/// Install `names` at the project root, as dev dependencies when `is_dev`.
///
/// One package-manager invocation per call; callers must not pass an empty
/// list.
pub fn install<C: CommandRunner>(
    runner: &C,
    root: &Path,
    names: &[String],
    is_dev: bool,
    pm: PackageManager,
) -> Result<(), AppError> {
    debug_assert!(!names.is_empty(), "install invoked with no package names");

    runner.run(pm.program(), &pm.add_args(names, is_dev), root)
}
