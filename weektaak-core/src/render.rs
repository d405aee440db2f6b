//! Turn weeks into calendar events.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::WeektaakResult;
use crate::roster::{ROLE_PRIORITY, WeekRecord};

/// Every cleaning week lasts this many days on the calendar.
pub const EVENT_DAYS: i64 = 6;

/// Title prefix of every event.
pub const TITLE: &str = "Weektaak";

pub const DEFAULT_SCHEDULE_URL: &str = "https://yochem.nl/weektaak/";

/// An all-day, non-blocking calendar event for one cleaning week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: NaiveDate,
    pub duration: Duration,
    /// TRANSP:TRANSPARENT, does not show as busy
    pub transparent: bool,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl CalendarEvent {
    /// Exclusive end date of the all-day event.
    pub fn end(&self) -> NaiveDate {
        self.start + self.duration
    }
}

/// Renders weeks with a fixed "now" and schedule link.
#[derive(Debug, Clone)]
pub struct Renderer {
    now: DateTime<Utc>,
    schedule_url: String,
}

impl Renderer {
    pub fn new(now: DateTime<Utc>) -> Self {
        Renderer {
            now,
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
        }
    }

    pub fn with_schedule_url(mut self, url: impl Into<String>) -> Self {
        self.schedule_url = url.into();
        self
    }

    /// Events for one person, titled with their job of that week.
    pub fn personal(&self, person: &str, weeks: &[&WeekRecord]) -> WeektaakResult<Vec<CalendarEvent>> {
        weeks
            .iter()
            .map(|week| {
                let job = week.job_name(person)?;
                Ok(self.event(week, format!("{TITLE}: {job}"), person))
            })
            .collect()
    }

    /// Events for the whole roster, one per week.
    pub fn admin(&self, roster: &[WeekRecord]) -> Vec<CalendarEvent> {
        roster
            .iter()
            .map(|week| self.event(week, TITLE.to_string(), "admin"))
            .collect()
    }

    fn event(&self, week: &WeekRecord, summary: String, owner: &str) -> CalendarEvent {
        CalendarEvent {
            uid: event_uid(week.week_start, owner),
            summary,
            description: self.describe(week),
            start: week.week_start,
            duration: Duration::days(EVENT_DAYS),
            transparent: true,
            created: self.now,
            last_modified: self.now,
        }
    }

    /// Multi-line overview of everybody's job in `week`.
    pub fn describe(&self, week: &WeekRecord) -> String {
        let mut lines = vec![format!("Week {}", week.iso_week())];

        for role in ROLE_PRIORITY {
            let members = week.members(role);
            if members.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(role.heading().to_string());
            lines.extend(members.iter().map(|name| format!("- {name}")));
        }

        lines.push(String::new());
        lines.push(format!("Zie {} voor het hele schema", self.schedule_url));
        lines.join("\n")
    }
}

/// Stable UID, so subscribers replace events on regeneration.
///
/// Derived from start date and owner only, so it is not unique when two rows
/// share a start date or a person is listed twice in one week. Such events
/// end up with the same UID and clients keep just one of them.
fn event_uid(start: NaiveDate, owner: &str) -> String {
    let owner: String = owner
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}-{}@weektaak", start.format("%Y%m%d"), owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeektaakError;
    use crate::roster::sample_week;
    use chrono::TimeZone;

    fn renderer() -> Renderer {
        Renderer::new(Utc.with_ymd_and_hms(2023, 1, 2, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_personal_event_title_and_window() {
        let week = sample_week();
        let events = renderer().personal("Abdula", &[&week]).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.summary, "Weektaak: Keuken");
        assert_eq!(event.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(event.end(), NaiveDate::from_ymd_opt(2023, 1, 7).unwrap());
        assert!(event.transparent);
    }

    #[test]
    fn test_every_role_gets_six_day_transparent_event() {
        let week = sample_week();
        let r = renderer();

        for person in week.cleaners() {
            let events = r.personal(person, &[&week]).unwrap();
            for event in events {
                assert_eq!(event.duration, Duration::days(6), "{person}");
                assert!(event.transparent, "{person}");
            }
        }
    }

    #[test]
    fn test_titles_use_dutch_labels() {
        let week = sample_week();
        let r = renderer();
        let title = |p: &str| r.personal(p, &[&week]).unwrap().remove(0).summary;

        assert_eq!(title("Darkan"), "Weektaak: Wc's");
        assert_eq!(title("Eloise"), "Weektaak: Douches");
        assert_eq!(title("Frank"), "Weektaak: Boven");
    }

    #[test]
    fn test_personal_event_for_absent_person_fails() {
        let week = sample_week();
        let err = renderer().personal("Zed", &[&week]).unwrap_err();
        assert!(matches!(err, WeektaakError::Lookup { .. }));
    }

    #[test]
    fn test_admin_events_use_plain_title() {
        let roster = vec![sample_week(), sample_week()];
        let events = renderer().admin(&roster);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.summary == "Weektaak"));
        assert!(events.iter().all(|e| e.duration == Duration::days(6)));
    }

    #[test]
    fn test_timestamps_come_from_renderer() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let events = Renderer::new(now).admin(&[sample_week()]);
        assert_eq!(events[0].created, now);
        assert_eq!(events[0].last_modified, now);
    }

    #[test]
    fn test_description_lists_all_roles() {
        let description = renderer().describe(&sample_week());
        let expected = "\
Week 52

Keuken 🍳
- Abdula
- Bob
- Chiara

Wc's 🚽
- Darkan

Douches 🚿
- Eloise

Badkamer boven 🔝
- Frank

Zie https://yochem.nl/weektaak/ voor het hele schema";
        assert_eq!(description, expected);
    }

    #[test]
    fn test_description_skips_empty_upstairs() {
        let mut week = sample_week();
        week.upstairs = None;
        let description = renderer().with_schedule_url("https://example.org/").describe(&week);

        assert!(!description.contains("Badkamer boven"));
        assert!(description.ends_with("Douches 🚿\n- Eloise\n\nZie https://example.org/ voor het hele schema"));
    }

    #[test]
    fn test_uid_is_stable_per_owner_and_week() {
        let week = sample_week();
        let r = renderer();
        let a = r.personal("Abdula", &[&week]).unwrap();
        let b = r.personal("Abdula", &[&week]).unwrap();
        assert_eq!(a[0].uid, "20230101-abdula@weektaak");
        assert_eq!(a[0].uid, b[0].uid);
        assert_eq!(r.admin(&[week])[0].uid, "20230101-admin@weektaak");
    }

    #[test]
    fn test_uid_repeats_for_double_assignment_in_one_week() {
        let mut week = sample_week();
        week.showers = "Abdula".into();
        let index = crate::index::PersonIndex::build(std::slice::from_ref(&week));

        let events = renderer().personal("Abdula", index.get("Abdula").unwrap()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].uid, events[1].uid);
        assert_eq!(events[0].summary, "Weektaak: Keuken");
    }
}
