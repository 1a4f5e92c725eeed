use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::{
    args::{self, KeyValues},
    csi::Endpoint,
    error::{Error, Result},
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings read from the config file and `CSC_*` environment variables.
/// Command line flags take precedence over everything here.
#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout: Option<TimeoutValue>,
    #[serde(default)]
    pub creds: HashMap<String, String>,
    #[serde(default)]
    pub with_spec_validation: bool,
}

/// `timeout = 30` and `timeout = "30s"` are both accepted.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TimeoutValue {
    Seconds(u64),
    Text(String),
}

impl TimeoutValue {
    fn duration(&self) -> Result<Duration> {
        match self {
            TimeoutValue::Seconds(n) => args::parse_duration(&n.to_string()),
            TimeoutValue::Text(text) => args::parse_duration(text),
        }
    }
}

pub fn config_file() -> PathBuf {
    match std::env::var("CSC_CONFIG") {
        Ok(config_file) => Path::new(&config_file).to_path_buf(),
        Err(_) => dirs::config_dir().unwrap_or_default().join("csc.toml"),
    }
}

pub fn load() -> Result<Config, figment::Error> {
    from_figment(
        Figment::new()
            .join(Env::prefixed("CSC_").ignore(&["config", "trace"]))
            .join(Toml::file(config_file())),
    )
}

fn from_figment(figment: Figment) -> Result<Config, figment::Error> {
    figment.extract()
}

/// Process-wide options shared by every request of a run.
#[derive(Clone, Debug)]
pub struct Settings {
    pub endpoint: Endpoint,
    pub timeout: Duration,
    pub creds: HashMap<String, String>,
    pub with_spec_validation: bool,
    pub requires_pub_info: bool,
    pub requires_creds: bool,
    pub requires_attributes: bool,
}

/// Values given on the command line; `None`/empty means "not given".
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub endpoint: Option<&'a str>,
    pub timeout: Option<Duration>,
    pub creds: &'a [KeyValues],
    pub with_spec_validation: bool,
    pub requires_pub_info: bool,
    pub requires_creds: bool,
    pub requires_attributes: bool,
}

impl Config {
    pub fn settings(&self, overrides: Overrides<'_>) -> Result<Settings> {
        let endpoint = overrides
            .endpoint
            .or(self.endpoint.as_deref())
            .ok_or(Error::NoEndpoint)?
            .parse::<Endpoint>()?;

        let timeout = match (overrides.timeout, &self.timeout) {
            (Some(timeout), _) => timeout,
            (None, Some(timeout)) => timeout.duration()?,
            (None, None) => DEFAULT_TIMEOUT,
        };

        let mut creds = self.creds.clone();
        creds.extend(args::merge(overrides.creds));

        // any requires-* toggle implies validation
        let with_spec_validation = self.with_spec_validation
            || overrides.with_spec_validation
            || overrides.requires_pub_info
            || overrides.requires_creds
            || overrides.requires_attributes;

        Ok(Settings {
            endpoint,
            timeout,
            creds,
            with_spec_validation,
            requires_pub_info: overrides.requires_pub_info,
            requires_creds: overrides.requires_creds,
            requires_attributes: overrides.requires_attributes,
        })
    }
}
