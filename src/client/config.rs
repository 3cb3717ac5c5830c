use std::time::Duration;

use reqwest::Url;

use crate::config::{parse, ConfigError};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the signup form sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    /// Upper bound on a single signup request, so a hung request cannot keep
    /// the form in flight forever.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url: as_base(api_base_url),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url =
            lookup("CAMPUS_CONNECT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = Url::parse(raw_url.trim()).map_err(|_| ConfigError::Invalid {
            key: "CAMPUS_CONNECT_API_URL",
            expected: "URL",
            value: raw_url.clone(),
        })?;
        let timeout_secs = parse(
            &lookup,
            "CAMPUS_CONNECT_API_TIMEOUT_SECS",
            "number of seconds",
            DEFAULT_TIMEOUT_SECS,
        )?;

        let api_base_url = as_base(api_base_url);
        log::info!("signup API base URL: {api_base_url}");

        Ok(Self {
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Endpoint paths are joined relative to the base, so a path prefix such as
/// `http://host/backend` must end in `/` to survive the join.
pub(crate) fn as_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}
