//! Per-person view of the roster.

use crate::roster::WeekRecord;

/// Maps every person to the weeks they clean, in roster order.
///
/// People are kept in order of first appearance, so output is stable
/// between runs on the same input.
#[derive(Debug, Default)]
pub struct PersonIndex<'r> {
    entries: Vec<(String, Vec<&'r WeekRecord>)>,
}

impl<'r> PersonIndex<'r> {
    /// Build the index in a single pass over `roster`.
    ///
    /// A name assigned twice in the same week gets that week twice.
    pub fn build(roster: &'r [WeekRecord]) -> Self {
        let mut index = PersonIndex::default();

        for week in roster {
            for person in week.cleaners() {
                index.push(person, week);
            }
        }

        index
    }

    fn push(&mut self, person: &str, week: &'r WeekRecord) {
        match self.entries.iter_mut().find(|(name, _)| name.as_str() == person) {
            Some((_, weeks)) => weeks.push(week),
            None => self.entries.push((person.to_string(), vec![week])),
        }
    }

    /// Weeks for `person`, or `None` if they never clean.
    pub fn get(&self, person: &str) -> Option<&[&'r WeekRecord]> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == person)
            .map(|(_, weeks)| weeks.as_slice())
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'r WeekRecord])> {
        self.entries
            .iter()
            .map(|(name, weeks)| (name.as_str(), weeks.as_slice()))
    }

    /// Flatten back into (person, week) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &'r WeekRecord)> {
        self.iter()
            .flat_map(|(name, weeks)| weeks.iter().map(move |week| (name, *week)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
