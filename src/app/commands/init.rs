//! Project scaffolding: the consumer of the bundle loader.

use std::fs;
use std::path::Path;

use crate::adapters::FilesystemManifestStore;
use crate::app::{AppContext, bundle_loader, installer};
use crate::domain::{AppError, PackageManager, PackageManifest, ScriptMap, StyleFlavor};
use crate::ports::{BundleFetcher, CommandRunner, IdSource};
use crate::{templates, ui};

/// Dev dependencies installed into every scaffolded project.
const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "eslint",
    "eslint-config-prettier",
    "stylelint-config-recommended",
    "stylelint-config-prettier",
    "@arkweid/lefthook",
    "prettier",
    "parcel",
    "posthtml",
    "posthtml-modules",
];

const KEEP_FILE: &str = ".gitkeep";
const SITE_LANG: &str = "en";

/// Options collected from the `init` CLI surface.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub name: String,
    pub style: StyleFlavor,
    pub package_manager: PackageManager,
    pub bundles: Vec<String>,
    pub start_dev_server: bool,
}

/// Execute the init command: create and populate `<parent>/<name>`.
pub fn execute<C, F, I>(
    ctx: &AppContext<C, F, I>,
    parent: &Path,
    options: &InitOptions,
) -> Result<(), AppError>
where
    C: CommandRunner,
    F: BundleFetcher,
    I: IdSource,
{
    let root = parent.join(&options.name);
    if root.exists() {
        return Err(AppError::ProjectExists(options.name.clone()));
    }
    fs::create_dir(&root)?;

    let pm = options.package_manager;

    ctx.runner().run(pm.program(), &pm.init_args(), &root)?;
    ctx.runner().run("git", &["init".to_string()], &root)?;

    let mut dev_deps: Vec<String> =
        BASE_DEV_DEPENDENCIES.iter().map(|name| name.to_string()).collect();
    if let Some(extra) = options.style.extra_dev_dependency() {
        dev_deps.push(extra.to_string());
    }
    installer::install(ctx.runner(), &root, &dev_deps, true, pm)?;

    create_project_tree(&root)?;
    inject_config_files(&root, options)?;
    create_site_root(&root, options)?;

    let scripts = load_requested_bundles(ctx, &root, options)?;
    finalize_manifest(&root, &scripts)?;

    ui::info("🚀 We are ready to launch...");
    if options.start_dev_server {
        ctx.runner().run(pm.program(), &pm.run_args("dev"), &root)?;
    } else {
        ui::info(&format!("Start the dev server with `{}`", pm.dev_command()));
    }

    Ok(())
}

fn create_project_tree(root: &Path) -> Result<(), AppError> {
    for dir in ["dist", "static", "src"] {
        fs::create_dir(root.join(dir))?;
    }

    for dir in ["images", "fonts", "fragments"] {
        let path = root.join("src").join(dir);
        fs::create_dir(&path)?;
        fs::write(path.join(KEEP_FILE), "")?;
    }

    Ok(())
}

fn inject_config_files(root: &Path, options: &InitOptions) -> Result<(), AppError> {
    fs::write(root.join(".eslintrc"), templates::ESLINTRC)?;
    ui::info("👮 ESLint injected");

    fs::write(root.join(".stylelintrc"), templates::STYLELINTRC)?;
    ui::info("👨‍🎨 Stylelint injected");

    fs::write(root.join(".posthtmlrc"), templates::POSTHTMLRC)?;
    ui::info("📚 Posthtml injected");

    fs::write(root.join("lefthook.yml"), templates::LEFTHOOK)?;
    ui::info("🥊 Lefthook injected");

    fs::write(root.join(".gitignore"), templates::GITIGNORE)?;
    ui::info("🙈 Gitignore added");

    let readme = templates::readme(&options.name, options.package_manager)?;
    fs::write(root.join("README.md"), readme)?;
    ui::info("📖 Readme injected");

    Ok(())
}

fn create_site_root(root: &Path, options: &InitOptions) -> Result<(), AppError> {
    let index = templates::index_html(&options.name, SITE_LANG, options.style)?;
    fs::write(root.join("src").join("index.html"), index)?;

    let stylesheet = format!("index.{}", options.style.extension());
    fs::write(root.join("src").join(stylesheet), templates::INDEX_STYLESHEET)?;
    ui::info("🏗  Created site root");

    Ok(())
}

/// Load each requested bundle in CLI order, merging script fragments with
/// last-write-wins. With no bundles, `scripts/` still exists with a keep file.
fn load_requested_bundles<C, F, I>(
    ctx: &AppContext<C, F, I>,
    root: &Path,
    options: &InitOptions,
) -> Result<ScriptMap, AppError>
where
    C: CommandRunner,
    F: BundleFetcher,
    I: IdSource,
{
    let mut scripts = ScriptMap::new();

    for id in &options.bundles {
        let fragment = bundle_loader::load_bundle(
            ctx.runner(),
            ctx.fetcher(),
            ctx.ids(),
            id,
            root,
            options.package_manager,
        )?;
        scripts.merge(fragment);
    }

    if options.bundles.is_empty() {
        let scripts_dir = root.join(bundle_loader::SCRIPTS_DIR);
        fs::create_dir_all(&scripts_dir)?;
        fs::write(scripts_dir.join(KEEP_FILE), "")?;
    }

    Ok(scripts)
}

/// Apply the base manifest config and extend `scripts` with bundle entries.
fn finalize_manifest(root: &Path, scripts: &ScriptMap) -> Result<(), AppError> {
    let store = FilesystemManifestStore::new(root.to_path_buf());

    let mut manifest = store.read()?.unwrap_or_else(PackageManifest::new);
    manifest.apply_base_config();
    manifest.merge_scripts(scripts);
    store.write(&manifest)?;

    ui::info("🧟  Package manifest configured");
    Ok(())
}
