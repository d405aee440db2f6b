//! Compact JSON lookup of the roster, keyed by week start.
//!
//! Only kitchen, toilets and showers are exported; the upstairs role is
//! left out of this format.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{WeektaakError, WeektaakResult};
use crate::roster::WeekRecord;

/// Date format of the top-level keys.
pub const KEY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Keys of one week's object, in output order.
pub const JSON_KEYS: [&str; 5] = ["kitchen-1", "kitchen-2", "kitchen-3", "toilets", "showers"];

/// One week's assignments keyed by [`JSON_KEYS`].
///
/// Kitchen members past the third are left out; a week with fewer cooks
/// just lacks the trailing kitchen keys.
struct JsonWeek<'a>(&'a WeekRecord);

impl JsonWeek<'_> {
    fn slots(&self) -> [Option<&str>; 5] {
        let week = self.0;
        let cook = |i: usize| week.kitchen.get(i).map(String::as_str);
        [cook(0), cook(1), cook(2), Some(week.toilets.as_str()), Some(week.showers.as_str())]
    }
}

impl Serialize for JsonWeek<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(&str, &str)> = JSON_KEYS
            .into_iter()
            .zip(self.slots())
            .filter_map(|(key, name)| Some((key, name?)))
            .collect();

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, name) in entries {
            map.serialize_entry(key, name)?;
        }
        map.end()
    }
}

/// Whole roster, keys in roster order.
struct JsonRoster<'a>(Vec<(String, &'a WeekRecord)>);

impl<'a> JsonRoster<'a> {
    /// A repeated date keeps its first position but takes the later row.
    fn new(roster: &'a [WeekRecord]) -> Self {
        let mut entries: Vec<(String, &WeekRecord)> = Vec::with_capacity(roster.len());
        for week in roster {
            let key = week.week_start.format(KEY_DATE_FORMAT).to_string();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = week,
                None => entries.push((key, week)),
            }
        }
        JsonRoster(entries)
    }
}

impl Serialize for JsonRoster<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, week) in &self.0 {
            map.serialize_entry(key, &JsonWeek(week))?;
        }
        map.end()
    }
}

/// Serialize `roster` without any whitespace.
pub fn roster_to_json(roster: &[WeekRecord]) -> WeektaakResult<String> {
    serde_json::to_string(&JsonRoster::new(roster))
        .map_err(|e| WeektaakError::Serialization(e.to_string()))
}
