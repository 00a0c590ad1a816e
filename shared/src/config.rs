use std::time::Duration;

use url::Url;

use crate::{api::MY_INFO_PATH, error::ConfigError};

pub const DEFAULT_IDENTITY_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const BASE_URL_VAR: &str = "IDENTITY_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "IDENTITY_REQUEST_TIMEOUT_SECS";

/// Where the identity service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_IDENTITY_BASE_URL)
                .expect("default identity base url is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl IdentityConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(BASE_URL_VAR).filter(|value| !value.trim().is_empty()) {
            config.base_url = parse_base_url(&value)?;
        }
        if let Some(value) = lookup(REQUEST_TIMEOUT_VAR).filter(|value| !value.trim().is_empty()) {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidTimeout {
                    value: value.clone(),
                    source,
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn my_info_url(&self) -> Url {
        // Base urls always end with '/', so joining keeps any base path.
        self.base_url
            .join(MY_INFO_PATH)
            .expect("relative endpoint path joins onto a base url")
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UnsupportedBaseUrl(value.to_owned()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
