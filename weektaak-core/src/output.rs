//! Writing calendars and JSON to disk.
//!
//! Writes are not transactional: when one personal calendar fails to
//! write, the ones before it stay on disk and the rest are skipped.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{WeektaakError, WeektaakResult};
use crate::ics::generate_ics;
use crate::index::PersonIndex;
use crate::json::roster_to_json;
use crate::render::{Renderer, TITLE};
use crate::roster::WeekRecord;

/// Placeholder for the person's name in a filename template.
pub const PLACEHOLDER: &str = "{}";

/// Extension of the files removed by [`cleanup`].
pub const ICS_EXTENSION: &str = "ics";

/// A validated output path template with exactly one `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn parse(template: impl Into<String>) -> WeektaakResult<Self> {
        let template = template.into();
        match template.matches(PLACEHOLDER).count() {
            1 => Ok(FilenameTemplate(template)),
            0 => Err(WeektaakError::Configuration(format!(
                "filename {template} is not a format-string (include `{PLACEHOLDER}`)"
            ))),
            n => Err(WeektaakError::Configuration(format!(
                "filename {template} has {n} placeholders, expected one"
            ))),
        }
    }

    /// Path for `name`, lower-cased.
    pub fn path_for(&self, name: &str) -> PathBuf {
        PathBuf::from(self.0.replacen(PLACEHOLDER, &name.to_lowercase(), 1))
    }

    /// Directory the personal calendars end up in.
    pub fn directory(&self) -> PathBuf {
        match Path::new(&self.0).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Insert the lower-cased `name` into `template`.
///
/// ```
/// # use weektaak_core::output::format_filename_template;
/// let path = format_filename_template("cal/{}.ics", "Yochem").unwrap();
/// assert_eq!(path, std::path::PathBuf::from("cal/yochem.ics"));
/// ```
pub fn format_filename_template(template: &str, name: &str) -> WeektaakResult<PathBuf> {
    Ok(FilenameTemplate::parse(template)?.path_for(name))
}

/// Remove every `.ics` file directly inside `dir`.
///
/// A missing directory is nothing to clean up. Returns the number of
/// removed files.
pub fn cleanup(dir: &Path) -> WeektaakResult<usize> {
    if !dir.is_dir() {
        info!("nothing to cleanup: {} is not a directory", dir.display());
        return Ok(0);
    }

    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_ics = path.extension().and_then(|e| e.to_str()) == Some(ICS_EXTENSION);
        if path.is_file() && is_ics {
            std::fs::remove_file(&path)?;
            debug!("removed {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}

/// Write one calendar per person in `index`. Returns the written paths in
/// index order.
pub fn write_personal_calendars(
    index: &PersonIndex<'_>,
    template: &FilenameTemplate,
    renderer: &Renderer,
) -> WeektaakResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(index.len());

    for (person, weeks) in index.iter() {
        let events = renderer.personal(person, weeks)?;
        let path = template.path_for(person);
        write_file(&path, &generate_ics(&format!("{TITLE} {person}"), &events))?;
        written.push(path);
    }

    Ok(written)
}

/// Write the calendar with everybody's weeks.
pub fn write_admin_calendar(roster: &[WeekRecord], path: &Path, renderer: &Renderer) -> WeektaakResult<()> {
    write_file(path, &generate_ics(TITLE, &renderer.admin(roster)))
}

/// Write the compact JSON lookup.
pub fn write_json(roster: &[WeekRecord], path: &Path) -> WeektaakResult<()> {
    write_file(path, &roster_to_json(roster)?)
}

fn write_file(path: &Path, contents: &str) -> WeektaakResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    debug!("wrote {}", path.display());
    Ok(())
}
