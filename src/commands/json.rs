use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use weektaak_core::pipeline::export_json;

use crate::config::Config;
use crate::render::pluralize;

pub fn run(cfg: &Config) -> Result<()> {
    let weeks = export_json(&super::source(cfg), &cfg.json_path)
        .with_context(|| format!("Failed to export {} to JSON", cfg.data_path.display()))?;

    println!(
        "{} {} {} {}",
        "✓".green(),
        weeks,
        pluralize("week", weeks),
        cfg.json_path.display().dimmed()
    );

    Ok(())
}
