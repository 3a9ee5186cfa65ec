//! Prints the unified row plan of a template.
//!
//! Usage: `collagekit <template.json> [config.toml|config.json]`

use std::path::{Path, PathBuf};

use anyhow::Context;
use collagekit::{default_config_path, init_logging, open_editor, EditorConfig, Template};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(template_path) = args.next() else {
        anyhow::bail!("usage: collagekit <template.json> [config.toml|config.json]");
    };
    if template_path == "--version" {
        println!("collagekit {} ({})", collagekit::VERSION, collagekit::BUILD_DATE);
        return Ok(());
    }

    let config_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => default_config_path()?,
    };
    let config = EditorConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    let template = load_template(Path::new(&template_path))?;
    let editor = open_editor(template, &config);
    let plan = editor.plan();
    info!(rows = plan.len(), "Planned template {}", template_path);

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn load_template(path: &Path) -> anyhow::Result<Template> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading template {}", path.display()))?;
    let template = Template::from_json(&json)
        .with_context(|| format!("parsing template {}", path.display()))?;
    Ok(template)
}
