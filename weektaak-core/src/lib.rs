//! Core of weektaak, the cleaning roster publisher.
//!
//! - `parse` reads the (optionally base32 wrapped) CSV roster into weeks
//! - `index` groups weeks per person
//! - `render` and `ics` turn weeks into all-day calendar events and .ics text
//! - `json` builds the compact date lookup
//! - `output` and `pipeline` write everything to disk

pub mod error;
pub mod ics;
pub mod index;
pub mod json;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod roster;

pub use error::{WeektaakError, WeektaakResult};
pub use index::PersonIndex;
pub use parse::{RosterLayout, Transport};
pub use render::{CalendarEvent, Renderer};
pub use roster::{Role, Roster, WeekRecord};
