//! Remote script-bundle loading, the heart of project extension.
//!
//! A bundle is a set of named text files fetched from the gist endpoint. Two
//! names are reserved manifests: `deps.json` lists packages to install
//! (`<name>` or `<name>:dev`) and `scripts.json` maps script names to shell
//! commands. Every other file is staged in an ephemeral `tmp-<suffix>`
//! directory and then copied into the project's `scripts/` directory, with
//! destination collisions resolved by a random rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::installer;
use crate::domain::{
    AppError, Bundle, DEPS_MANIFEST, PackageManager, SCRIPTS_MANIFEST, ScriptMap,
    partition_dependencies,
};
use crate::ports::{BundleFetcher, CommandRunner, IdSource};
use crate::ui;

/// Directory under the project root receiving bundle-provided files.
pub const SCRIPTS_DIR: &str = "scripts";

/// A non-manifest bundle file written to the staging directory, remembered
/// for the copy phase.
struct StagedFile {
    path: PathBuf,
    name: String,
}

/// Fetch bundle `id` and materialize it into the project at `root`.
///
/// Dependencies from `deps.json` are installed (dev bucket first), remaining
/// files land under `scripts/`, and the entries from `scripts.json` are
/// returned for the caller to merge into the project manifest. The staging
/// directory is removed on every exit path once it has been created; on a
/// fatal error the original failure wins over a cleanup failure.
pub fn load_bundle<C, F, I>(
    runner: &C,
    fetcher: &F,
    ids: &I,
    id: &str,
    root: &Path,
    pm: PackageManager,
) -> Result<ScriptMap, AppError>
where
    C: CommandRunner,
    F: BundleFetcher,
    I: IdSource,
{
    let staging = root.join(format!("tmp-{}", ids.staging_suffix()));
    fs::create_dir(&staging)?;

    let result = materialize(runner, fetcher, ids, id, root, &staging, pm);

    ui::info("Cleaning up...");
    match result {
        Ok(scripts) => {
            remove_staging(&staging)?;
            ui::info("Done");
            Ok(scripts)
        }
        Err(e) => {
            if let Err(cleanup_err) = remove_staging(&staging) {
                ui::warn(&format!(
                    "Failed to remove staging directory {}: {cleanup_err}",
                    staging.display()
                ));
            }
            Err(e)
        }
    }
}

fn materialize<C, F, I>(
    runner: &C,
    fetcher: &F,
    ids: &I,
    id: &str,
    root: &Path,
    staging: &Path,
    pm: PackageManager,
) -> Result<ScriptMap, AppError>
where
    C: CommandRunner,
    F: BundleFetcher,
    I: IdSource,
{
    ui::info("Script contents loading started.");
    let bundle = fetcher.fetch(id)?;

    let (deps, scripts, staged) = partition_bundle(&bundle, staging)?;
    ui::info("Script contents loaded.");

    if !deps.is_empty() {
        let (dev, prod) = partition_dependencies(&deps);

        if !dev.is_empty() {
            installer::install(runner, root, &dev, true, pm)?;
        }
        if !prod.is_empty() {
            installer::install(runner, root, &prod, false, pm)?;
        }
    }

    if !staged.is_empty() {
        copy_into_scripts(ids, root, &staged)?;
    }

    Ok(scripts)
}

/// Split a bundle into collected dependency specs, script entries, and files
/// written verbatim into the staging directory.
///
/// An unparseable manifest is logged and contributes nothing; it never aborts
/// the load.
fn partition_bundle(
    bundle: &Bundle,
    staging: &Path,
) -> Result<(Vec<String>, ScriptMap, Vec<StagedFile>), AppError> {
    let mut deps = Vec::new();
    let mut scripts = ScriptMap::new();
    let mut staged = Vec::new();

    for (name, file) in &bundle.files {
        if name == DEPS_MANIFEST {
            match serde_json::from_str::<Vec<String>>(&file.content) {
                Ok(entries) => deps.extend(entries),
                Err(e) => ui::warn(&format!("Ignoring unparseable {DEPS_MANIFEST}: {e}")),
            }
            continue;
        }

        if name == SCRIPTS_MANIFEST {
            match serde_json::from_str::<BTreeMap<String, String>>(&file.content) {
                Ok(entries) => scripts.merge(ScriptMap::from(entries)),
                Err(e) => ui::warn(&format!("Ignoring unparseable {SCRIPTS_MANIFEST}: {e}")),
            }
            continue;
        }

        let path = staging.join(&file.filename);
        fs::write(&path, &file.content)?;
        staged.push(StagedFile { path, name: file.filename.clone() });
    }

    Ok((deps, scripts, staged))
}

/// Copy staged files into `scripts/`, renaming on destination collision.
///
/// First come, first served: the first file to claim a name keeps it; later
/// ones acquire a `<prefix>-` rename and a warning.
fn copy_into_scripts<I: IdSource>(
    ids: &I,
    root: &Path,
    staged: &[StagedFile],
) -> Result<(), AppError> {
    let scripts_dir = root.join(SCRIPTS_DIR);
    fs::create_dir_all(&scripts_dir)?;

    for file in staged {
        let mut destination = scripts_dir.join(&file.name);

        if destination.exists() {
            let renamed = format!("{}-{}", ids.collision_prefix(), file.name);
            ui::warn(&format!(
                "{SCRIPTS_DIR}/{} already exists; copying as {SCRIPTS_DIR}/{renamed}",
                file.name
            ));
            ui::warn(&format!(
                "Resolve the conflict before running scripts that expect {}",
                file.name
            ));
            destination = scripts_dir.join(renamed);
        }

        fs::copy(&file.path, &destination)?;
    }

    Ok(())
}

/// Remove every entry from the staging directory, then the directory itself.
fn remove_staging(staging: &Path) -> Result<(), AppError> {
    for entry in fs::read_dir(staging)? {
        fs::remove_file(entry?.path())?;
    }
    fs::remove_dir(staging)?;
    Ok(())
}
