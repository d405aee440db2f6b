use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use weektaak_core::Transport;
use weektaak_core::render::DEFAULT_SCHEDULE_URL;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "weektaak.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Roster file, base32 wrapped unless `roster.transport = "none"`
    pub data_path: PathBuf,

    /// Personal calendar path, `{}` is replaced by the lower-cased name
    pub ics_filename_format: String,

    /// Calendar with everybody's weeks; not written when unset
    pub admin: Option<PathBuf>,

    /// Output of the JSON lookup
    pub json_path: PathBuf,

    /// Linked at the bottom of every event description
    pub schedule_url: String,

    pub roster: RosterConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    pub transport: Transport,

    /// Last column is the upstairs bathroom
    pub has_upstairs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("data"),
            ics_filename_format: "public/cal/{}.ics".to_string(),
            admin: Some(PathBuf::from("public/cal/admin.ics")),
            json_path: PathBuf::from("public/tasks.json"),
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            roster: RosterConfig::default(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            transport: Transport::Base32,
            has_upstairs: true,
        }
    }
}

/// Load config from `path`, or from `weektaak.toml` if it exists.
///
/// Without an explicit path and without the default file, every setting
/// takes its default.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                return Ok(Config::default());
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents).with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            data_path = "../data.csv"
            ics_filename_format = "../cal/{}.ics"
            admin = "../cal/admin.ics"
            json_path = "tasks.json"
            schedule_url = "https://omhp.nl/weektaak/"

            [roster]
            transport = "none"
            has_upstairs = false
            "#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("../data.csv"));
        assert_eq!(config.ics_filename_format, "../cal/{}.ics");
        assert_eq!(config.admin, Some(PathBuf::from("../cal/admin.ics")));
        assert_eq!(config.schedule_url, "https://omhp.nl/weektaak/");
        assert_eq!(config.roster.transport, Transport::None);
        assert!(!config.roster.has_upstairs);
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        assert!(parse_config("[roster]\ntransport = \"base64\"").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weektaak.toml");
        std::fs::write(&path, "data_path = \"rooster\"").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.data_path, PathBuf::from("rooster"));
        assert_eq!(config.ics_filename_format, "public/cal/{}.ics");
    }
}
