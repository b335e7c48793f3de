use dotenv::dotenv;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Public dataset the room list is read from unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://gist.githubusercontent.com/yuhong90/7ff8d4ebad6f759fcc10cc6abdda85cf/raw/463627e7d2c7ac31070ef409d29ed3439f7406f6/room-availability.json";

pub const ENDPOINT_VAR: &str = "ROOM_AVAILABILITY_URL";
pub const TIMEOUT_VAR: &str = "ROOM_VIEWER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// URL of the room-availability JSON document.
    pub endpoint: String,
    /// Upper bound for the whole HTTP request.
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl Settings {
    /// Reads `ROOM_AVAILABILITY_URL` and `ROOM_VIEWER_TIMEOUT_SECS`, falling back to the defaults.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first; variables
    /// already set in the process environment take precedence over it.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`Settings::from_env`], but loads the given env file instead of searching for `.env`.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenv::from_path(path.as_ref()).ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|value| !value.trim().is_empty()) {
            settings.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue { name: TIMEOUT_VAR.to_string(), value: raw.clone() })?;
            settings.timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings =
            Settings::from_lookup(lookup(&[(ENDPOINT_VAR, " http://localhost:8080/rooms.json "), (TIMEOUT_VAR, "3")])).unwrap();
        assert_eq!(settings.endpoint, "http://localhost:8080/rooms.json");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_endpoint_keeps_default() {
        let settings = Settings::from_lookup(lookup(&[(ENDPOINT_VAR, "   ")])).unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn rejects_invalid_timeout() {
        for raw in ["0", "-5", "soon"] {
            assert_eq!(
                Settings::from_lookup(lookup(&[(TIMEOUT_VAR, raw)])),
                Err(ConfigError::InvalidValue { name: TIMEOUT_VAR.to_string(), value: raw.to_string() })
            );
        }
    }
}
