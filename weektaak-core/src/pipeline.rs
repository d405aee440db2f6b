//! The two export runs: read, parse, index, render, write.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::WeektaakResult;
use crate::index::PersonIndex;
use crate::output::{FilenameTemplate, cleanup, write_admin_calendar, write_json, write_personal_calendars};
use crate::parse::{RosterLayout, Transport, parse_encoded};
use crate::render::Renderer;
use crate::roster::Roster;

/// Where the roster comes from and how it is laid out.
#[derive(Debug, Clone)]
pub struct Source {
    pub data_path: PathBuf,
    pub transport: Transport,
    pub has_upstairs: bool,
}

impl Source {
    /// Read and parse the roster with `layout`.
    pub fn load(&self, layout: &RosterLayout) -> WeektaakResult<Roster> {
        let raw = std::fs::read_to_string(&self.data_path)?;
        let roster = parse_encoded(&raw, self.transport, layout)?;
        info!("parsed {} weeks from {}", roster.len(), self.data_path.display());
        Ok(roster)
    }
}

/// Settings of the calendar export.
#[derive(Debug, Clone)]
pub struct CalendarExport {
    pub template: FilenameTemplate,
    pub admin: Option<PathBuf>,
    pub schedule_url: String,
}

/// What a calendar export wrote.
#[derive(Debug, Default)]
pub struct CalendarReport {
    pub weeks: usize,
    pub removed: usize,
    pub personal: Vec<PathBuf>,
    pub admin: Option<PathBuf>,
}

/// Regenerate every personal calendar and the optional admin calendar.
///
/// The roster is parsed before the output directory is touched, so a bad
/// input file leaves the previous calendars in place.
pub fn export_calendars(source: &Source, export: &CalendarExport, now: DateTime<Utc>) -> WeektaakResult<CalendarReport> {
    let roster = source.load(&RosterLayout::calendars(source.has_upstairs))?;
    let index = PersonIndex::build(&roster);
    let renderer = Renderer::new(now).with_schedule_url(export.schedule_url.as_str());

    let removed = cleanup(&export.template.directory())?;
    let personal = write_personal_calendars(&index, &export.template, &renderer)?;

    let admin = match &export.admin {
        Some(path) => {
            write_admin_calendar(&roster, path, &renderer)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(CalendarReport {
        weeks: roster.len(),
        removed,
        personal,
        admin,
    })
}

/// Write the JSON lookup to `path`. Returns the number of weeks.
pub fn export_json(source: &Source, path: &Path) -> WeektaakResult<usize> {
    let roster = source.load(&RosterLayout::json(source.has_upstairs))?;
    write_json(&roster, path)?;
    Ok(roster.len())
}
