//! Process settings read from the environment and an optional `.env` file.
//!
//! Account credentials are not part of [`Settings`]; they are read on every
//! login attempt by [`oprovider::EnvCredentialSource`] so a corrected `.env`
//! or environment takes effect without a restart.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use orderdesk::Settings;
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "ORDERDESK_LOGIN_TIMEOUT_SECS" => Some("90".to_string()),
//!     _ => None,
//! })
//! .expect("settings should parse");
//!
//! assert_eq!(settings.login_timeout, Some(Duration::from_secs(90)));
//! assert_eq!(settings.log_filter, "info");
//! ```

use std::time::Duration;

use crate::OrderDeskError;

pub const LOGIN_TIMEOUT_VAR: &str = "ORDERDESK_LOGIN_TIMEOUT_SECS";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Upper bound on a single provider login; `None` waits indefinitely.
    pub login_timeout: Option<Duration>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            login_timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Loads `.env` from the working directory when present, then reads the process environment.
    pub fn from_env() -> Result<Self, OrderDeskError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, OrderDeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let login_timeout = match non_empty(lookup(LOGIN_TIMEOUT_VAR)) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };
        let log_filter =
            non_empty(lookup(LOG_FILTER_VAR)).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            login_timeout,
            log_filter,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, OrderDeskError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(OrderDeskError::settings(format!(
            "{LOGIN_TIMEOUT_VAR} must be greater than zero"
        ))),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(_) => Err(OrderDeskError::settings(format!(
            "{LOGIN_TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::OrderDeskErrorKind;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let settings = Settings::from_lookup(lookup_from(&[
            (LOGIN_TIMEOUT_VAR, "  "),
            (LOG_FILTER_VAR, ""),
        ]))
        .expect("blank values are ignored");

        assert_eq!(settings.login_timeout, None);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_filter_is_taken_verbatim() {
        let settings = Settings::from_lookup(lookup_from(&[(
            LOG_FILTER_VAR,
            "osession=debug,otooling=info",
        )]))
        .expect("filter");

        assert_eq!(settings.log_filter, "osession=debug,otooling=info");
    }

    #[test]
    fn malformed_or_zero_timeout_is_a_settings_error() {
        for raw in ["soon", "-5", "1.5", "0"] {
            let error = Settings::from_lookup(lookup_from(&[(LOGIN_TIMEOUT_VAR, raw)]))
                .expect_err("timeout must be rejected");
            assert_eq!(error.kind, OrderDeskErrorKind::Settings, "value {raw}");
            assert!(error.message.contains(LOGIN_TIMEOUT_VAR));
        }
    }
}
