//! ICS file generation.

use icalendar::{Calendar, Component, Property, ValueType};

use crate::render::CalendarEvent;

const PRODID: &str = "-//weektaak//Weektaak//NL";

/// Generate .ics content holding all `events`, in order.
pub fn generate_ics(calendar_name: &str, events: &[CalendarEvent]) -> String {
    let mut cal = Calendar::new();
    cal.name(calendar_name);

    for event in events {
        cal.push(to_ics_event(event));
    }

    strip_ics_bloat(&cal.done().to_string())
}

fn to_ics_event(event: &CalendarEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);
    ics_event.description(&event.description);

    // DTSTAMP is required by RFC 5545; use the render instant, not the wall clock
    let stamp = event.last_modified.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &stamp);
    ics_event.add_property("LAST-MODIFIED", &stamp);
    ics_event.add_property("CREATED", event.created.format("%Y%m%dT%H%M%SZ").to_string());

    add_date_property(&mut ics_event, "DTSTART", event.start);
    add_date_property(&mut ics_event, "DTEND", event.end());

    if event.transparent {
        ics_event.add_property("TRANSP", "TRANSPARENT");
    }

    ics_event.done()
}

/// All-day dates carry VALUE=DATE.
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
