use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::config::Config;

type Step = fn(&Config) -> Result<()>;

/// Calendars run first; a failing step does not stop the next one.
const STEPS: [(&str, Step); 2] = [("calendars", super::calendars::run), ("json", super::json::run)];

pub fn run(cfg: &Config) -> Result<()> {
    let mut failed = Vec::new();

    for (name, step) in STEPS {
        if let Err(e) = step(cfg) {
            eprintln!("{} {}: {}", "✗".red(), name, format!("{e:#}").red());
            failed.push(name);
        }
    }

    if !failed.is_empty() {
        bail!("Export failed: {}", failed.join(", "));
    }

    Ok(())
}
