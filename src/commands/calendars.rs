use anyhow::{Context, Result};
use chrono::Utc;
use weektaak_core::output::FilenameTemplate;
use weektaak_core::pipeline::{CalendarExport, export_calendars};

use crate::config::Config;
use crate::render::Render;

pub fn run(cfg: &Config) -> Result<()> {
    // Reject a bad template before anything is read or removed
    let template = FilenameTemplate::parse(cfg.ics_filename_format.as_str())
        .context("Invalid ics_filename_format")?;

    let export = CalendarExport {
        template,
        admin: cfg.admin.clone(),
        schedule_url: cfg.schedule_url.clone(),
    };

    let report = export_calendars(&super::source(cfg), &export, Utc::now())
        .with_context(|| format!("Failed to generate calendars from {}", cfg.data_path.display()))?;

    println!("{}", report.render());

    Ok(())
}
