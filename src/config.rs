//! Client configuration resolved at build time.
//!
//! `SERVER_URL` is read from the environment (or a local `.env`, see
//! `build.rs`) when the crate is compiled.

use url::Url;

use crate::common::ConfigError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

const LOGIN_PATH: &str = "/api/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    pub fn new(server_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(server_url).map_err(|e| ConfigError::InvalidServerUrl {
            url: server_url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Configuration baked in at compile time, falling back to
    /// [`DEFAULT_SERVER_URL`] when `SERVER_URL` was not set.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("SERVER_URL").unwrap_or(DEFAULT_SERVER_URL))
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn login_endpoint(&self) -> String {
        format!("{}{}", self.server_url, LOGIN_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}
