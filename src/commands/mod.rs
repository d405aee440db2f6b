pub mod all;
pub mod calendars;
pub mod json;

use weektaak_core::pipeline::Source;

use crate::config::Config;

/// Roster source shared by both exports.
pub fn source(cfg: &Config) -> Source {
    Source {
        data_path: cfg.data_path.clone(),
        transport: cfg.roster.transport,
        has_upstairs: cfg.roster.has_upstairs,
    }
}
