//! Roster parsing: transport decoding and row splitting.

use chrono::NaiveDate;
use csv::StringRecord;
use data_encoding::BASE32;
use serde::{Deserialize, Serialize};

use crate::error::{WeektaakError, WeektaakResult};
use crate::roster::{Roster, WeekRecord};

/// Date format of the start and end columns.
pub const INPUT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Outer encoding wrapping the comma separated roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    None,
    #[default]
    Base32,
}

impl Transport {
    /// Decode `raw` into the plain comma separated text.
    pub fn decode(self, raw: &str) -> WeektaakResult<String> {
        match self {
            Transport::None => Ok(raw.to_string()),
            Transport::Base32 => {
                let bytes = BASE32
                    .decode(raw.trim().as_bytes())
                    .map_err(|e| WeektaakError::Decode(e.to_string()))?;
                String::from_utf8(bytes).map_err(|e| WeektaakError::Decode(e.to_string()))
            }
        }
    }
}

/// Column layout and row handling of a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLayout {
    /// The last column is the upstairs bathroom.
    pub has_upstairs: bool,
    /// Discard the first row.
    pub skip_header: bool,
    /// Stop at the first row with an empty start date instead of failing on it.
    pub stop_at_blank: bool,
}

impl RosterLayout {
    /// Layout used for the calendar export.
    pub fn calendars(has_upstairs: bool) -> Self {
        RosterLayout {
            has_upstairs,
            skip_header: true,
            stop_at_blank: true,
        }
    }

    /// Layout used for the JSON export. Has no end-of-data sentinel.
    pub fn json(has_upstairs: bool) -> Self {
        RosterLayout {
            has_upstairs,
            skip_header: true,
            stop_at_blank: false,
        }
    }

    /// Number of fixed columns after the kitchen columns.
    fn trailing_columns(&self) -> usize {
        if self.has_upstairs { 3 } else { 2 }
    }

    /// Fewest columns a row may have: two dates, one cook, trailing roles.
    fn min_columns(&self) -> usize {
        2 + 1 + self.trailing_columns()
    }
}

/// Parse comma separated roster text into weeks, in input order.
///
/// Fields may be quoted, so a name can contain a comma. Example row
/// (with upstairs):
///
/// ```text
/// 01-01-2023,08-01-2023,Abdula,Bob,Chiara,Darkan,Eloise,Frank
/// ```
pub fn parse_roster(text: &str, layout: &RosterLayout) -> WeektaakResult<Roster> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(layout.skip_header)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut roster = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| WeektaakError::Parse {
            line: e.position().map_or(0, |p| p.line() as usize),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if record.get(0).is_none_or(str::is_empty) && layout.stop_at_blank {
            break;
        }

        roster.push(parse_row(&record, line, layout)?);
    }

    Ok(roster)
}

/// Decode and parse in one go.
pub fn parse_encoded(raw: &str, transport: Transport, layout: &RosterLayout) -> WeektaakResult<Roster> {
    let text = transport.decode(raw)?;
    parse_roster(&text, layout)
}

fn parse_row(record: &StringRecord, line: usize, layout: &RosterLayout) -> WeektaakResult<WeekRecord> {
    let fields: Vec<&str> = record.iter().collect();
    if fields.len() < layout.min_columns() {
        return Err(WeektaakError::RowShape {
            line,
            found: fields.len(),
            expected: layout.min_columns(),
        });
    }

    let week_start = NaiveDate::parse_from_str(fields[0], INPUT_DATE_FORMAT).map_err(|e| {
        WeektaakError::Parse {
            line,
            message: format!("invalid start date '{}' ({e}), expected DD-MM-YYYY", fields[0]),
        }
    })?;

    let (kitchen, trailing) = fields[2..].split_at(fields.len() - 2 - layout.trailing_columns());
    let upstairs = if layout.has_upstairs {
        Some(trailing[2]).filter(|name| !name.is_empty()).map(str::to_string)
    } else {
        None
    };

    Ok(WeekRecord {
        week_start,
        kitchen: kitchen.iter().map(|name| name.to_string()).collect(),
        toilets: trailing[0].to_string(),
        showers: trailing[1].to_string(),
        upstairs,
    })
}
