//! Embedded project assets and template rendering.

use minijinja::{Environment, context};

use crate::domain::{AppError, PackageManager, StyleFlavor};

pub const ESLINTRC: &str = include_str!("assets/eslintrc.json");
pub const STYLELINTRC: &str = include_str!("assets/stylelintrc.json");
pub const POSTHTMLRC: &str = include_str!("assets/posthtmlrc.json");
pub const LEFTHOOK: &str = include_str!("assets/lefthook.yml");
pub const GITIGNORE: &str = include_str!("assets/gitignore");
pub const INDEX_STYLESHEET: &str = include_str!("assets/index.css");

const README_TEMPLATE: &str = include_str!("assets/readme.md.j2");
const INDEX_HTML_TEMPLATE: &str = include_str!("assets/index.html.j2");

fn render(name: &str, source: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)
        .map_err(|e| AppError::config_error(format!("Failed to register template '{name}': {e}")))?;

    let template = env
        .get_template(name)
        .map_err(|e| AppError::config_error(format!("Failed to load template '{name}': {e}")))?;

    template
        .render(ctx)
        .map_err(|e| AppError::config_error(format!("Failed to render template '{name}': {e}")))
}

/// Render the project README for `name`.
pub fn readme(name: &str, pm: PackageManager) -> Result<String, AppError> {
    render(
        "readme.md",
        README_TEMPLATE,
        context! {
            name,
            package_manager => pm.program(),
            dev_command => pm.dev_command(),
            build_command => build_command(pm),
        },
    )
}

/// Render the site root `index.html` for `name`.
pub fn index_html(name: &str, lang: &str, style: StyleFlavor) -> Result<String, AppError> {
    render(
        "index.html",
        INDEX_HTML_TEMPLATE,
        context! {
            name,
            lang,
            stylesheet_extension => style.extension(),
        },
    )
}

fn build_command(pm: PackageManager) -> String {
    let mut parts = vec![pm.program().to_string()];
    parts.extend(pm.run_args("build"));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_names_the_project_and_package_manager() {
        let rendered = readme("my-site", PackageManager::Yarn).unwrap();
        assert!(rendered.starts_with("# my-site\n"));
        assert!(rendered.contains("`yarn dev`"));
        assert!(rendered.contains("`yarn build`"));
    }

    #[test]
    fn readme_uses_npm_run_for_npm() {
        let rendered = readme("my-site", PackageManager::Npm).unwrap();
        assert!(rendered.contains("`npm run dev`"));
        assert!(rendered.contains("`npm run build`"));
    }

    #[test]
    fn index_html_links_the_flavor_stylesheet() {
        let rendered = index_html("my-site", "en", StyleFlavor::Sass).unwrap();
        assert!(rendered.contains(r#"<html lang="en">"#));
        assert!(rendered.contains("<title>my-site</title>"));
        assert!(rendered.contains(r#"href="./index.scss""#));
    }

    #[test]
    fn static_assets_are_not_empty() {
        for asset in [ESLINTRC, STYLELINTRC, POSTHTMLRC, LEFTHOOK, GITIGNORE, INDEX_STYLESHEET] {
            assert!(!asset.trim().is_empty());
        }
    }
}
