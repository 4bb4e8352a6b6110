//! Service configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_COOKIE_NAME: &str = "sb-access-token";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the auth API, without a trailing slash.
    pub auth_url: String,
    pub auth_anon_key: String,
    pub auth_cookie_name: String,
    pub auth_timeout_secs: u64,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `AUTH_URL`
    /// - `AUTH_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_COOKIE_NAME`: default `sb-access-token`
    /// - `AUTH_TIMEOUT_SECS`: default 10; zero or unparsable uses the default
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `PORT` does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Lets tests avoid touching
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let auth_url = non_empty(lookup("AUTH_URL"))
            .ok_or(ConfigError::Missing("AUTH_URL"))?
            .trim_end_matches('/')
            .to_owned();
        let auth_anon_key = non_empty(lookup("AUTH_ANON_KEY")).ok_or(ConfigError::Missing("AUTH_ANON_KEY"))?;
        let auth_cookie_name =
            non_empty(lookup("AUTH_COOKIE_NAME")).unwrap_or_else(|| DEFAULT_AUTH_COOKIE_NAME.to_owned());
        let auth_timeout_secs = lookup("AUTH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);

        Ok(Self { port, auth_url, auth_anon_key, auth_cookie_name, auth_timeout_secs })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
