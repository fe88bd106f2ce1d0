use chrono_tz::Tz;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::locale::Locale;
use crate::provider::feed::DEFAULT_FEED;
use crate::provider::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "KALENDER_CONFIG_FILE";

pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("kalender").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".kalender.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timezone: String,
    pub feed: String,
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            feed: DEFAULT_FEED.to_owned(),
            locale: Locale::default(),
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::from(e).with_msg(&format!("reading '{}'", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::new(ErrorKind::ConfigParse, &format!("{}: {}", path.display(), e)))
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| Error::new(ErrorKind::InvalidTimezone, &format!("'{}': {}", self.timezone, e)))
    }
}

/// Loads `path` if given, otherwise the first existing file from the usual
/// locations. Falls back to the defaults if there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Using config file '{}'", path.display());
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => {
            log::info!("Using config file '{}'", path.display());
            Config::from_file(&path)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
