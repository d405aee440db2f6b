//! Roster types: roles and one week of cleaning.

use chrono::{Datelike, NaiveDate};

use crate::error::{WeektaakError, WeektaakResult};

/// A cleaning duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Kitchen,
    Toilets,
    Showers,
    Upstairs,
}

/// Roles in lookup order. The first role holding a name decides its job.
pub const ROLE_PRIORITY: [Role; 4] = [Role::Kitchen, Role::Toilets, Role::Showers, Role::Upstairs];

impl Role {
    /// Dutch job name, shown in calendar titles.
    pub fn label(self) -> &'static str {
        match self {
            Role::Kitchen => "Keuken",
            Role::Toilets => "Wc's",
            Role::Showers => "Douches",
            Role::Upstairs => "Boven",
        }
    }

    /// Section heading used in event descriptions.
    pub fn heading(self) -> &'static str {
        match self {
            Role::Kitchen => "Keuken 🍳",
            Role::Toilets => "Wc's 🚽",
            Role::Showers => "Douches 🚿",
            Role::Upstairs => "Badkamer boven 🔝",
        }
    }
}

/// One week of cleaning.
///
/// Usually three people for the kitchen, one for the toilets, one for the
/// showers, and optionally one for the bathroom upstairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRecord {
    pub week_start: NaiveDate,
    pub kitchen: Vec<String>,
    pub toilets: String,
    pub showers: String,
    /// `None` when nobody cleans upstairs this week.
    pub upstairs: Option<String>,
}

/// The full schedule in input order.
pub type Roster = Vec<WeekRecord>;

impl WeekRecord {
    /// Names assigned to `role` this week, in column order.
    pub fn members(&self, role: Role) -> Vec<&str> {
        match role {
            Role::Kitchen => self.kitchen.iter().map(String::as_str).collect(),
            Role::Toilets => vec![self.toilets.as_str()],
            Role::Showers => vec![self.showers.as_str()],
            Role::Upstairs => self.upstairs.as_deref().into_iter().collect(),
        }
    }

    /// Every (role, name) assignment of this week, in role order.
    pub fn assignments(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        ROLE_PRIORITY
            .into_iter()
            .flat_map(move |role| self.members(role).into_iter().map(move |name| (role, name)))
    }

    /// All names doing the cleaning this week.
    pub fn cleaners(&self) -> Vec<&str> {
        self.assignments().map(|(_, name)| name).collect()
    }

    pub fn contains(&self, person: &str) -> bool {
        self.assignments().any(|(_, name)| name == person)
    }

    /// The role `person` has this week, checked in [`ROLE_PRIORITY`] order.
    pub fn role_of(&self, person: &str) -> WeektaakResult<Role> {
        ROLE_PRIORITY
            .into_iter()
            .find(|role| self.members(*role).contains(&person))
            .ok_or_else(|| WeektaakError::Lookup {
                person: person.to_string(),
                week: self.week_start.to_string(),
            })
    }

    /// Dutch job name for `person` this week.
    pub fn job_name(&self, person: &str) -> WeektaakResult<&'static str> {
        self.role_of(person).map(Role::label)
    }

    /// ISO 8601 week number of the week start.
    pub fn iso_week(&self) -> u32 {
        self.week_start.iso_week().week()
    }
}

#[cfg(test)]
pub(crate) fn sample_week() -> WeekRecord {
    WeekRecord {
        week_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        kitchen: vec!["Abdula".into(), "Bob".into(), "Chiara".into()],
        toilets: "Darkan".into(),
        showers: "Eloise".into(),
        upstairs: Some("Frank".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_name_per_role() {
        let week = sample_week();
        assert_eq!(week.job_name("Bob").unwrap(), "Keuken");
        assert_eq!(week.job_name("Darkan").unwrap(), "Wc's");
        assert_eq!(week.job_name("Eloise").unwrap(), "Douches");
        assert_eq!(week.job_name("Frank").unwrap(), "Boven");
    }

    #[test]
    fn test_job_name_kitchen_wins_over_toilets() {
        let mut week = sample_week();
        week.toilets = "Abdula".into();

        assert_eq!(week.role_of("Abdula").unwrap(), Role::Kitchen);
        assert_eq!(week.job_name("Abdula").unwrap(), "Keuken");
    }

    #[test]
    fn test_job_name_unknown_person_is_lookup_error() {
        let week = sample_week();
        let err = week.job_name("Zed").unwrap_err();
        assert!(matches!(err, WeektaakError::Lookup { ref person, .. } if person == "Zed"));
    }

    #[test]
    fn test_job_names_are_case_sensitive() {
        let week = sample_week();
        assert!(!week.contains("bob"));
        assert!(week.job_name("bob").is_err());
    }

    #[test]
    fn test_cleaners_skip_missing_upstairs() {
        let mut week = sample_week();
        assert_eq!(week.cleaners(), ["Abdula", "Bob", "Chiara", "Darkan", "Eloise", "Frank"]);

        week.upstairs = None;
        assert_eq!(week.cleaners(), ["Abdula", "Bob", "Chiara", "Darkan", "Eloise"]);
        assert!(week.job_name("Frank").is_err());
    }

    #[test]
    fn test_iso_week_of_new_years_day() {
        // 2023-01-01 is a Sunday, still ISO week 52 of 2022
        assert_eq!(sample_week().iso_week(), 52);
    }
}
