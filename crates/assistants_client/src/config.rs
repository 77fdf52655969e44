use std::time::Duration;

use thiserror::Error;

// Environment variable aliases, checked in order. The bot-prefixed name
// wins over the shared one when both are set.
pub const ASSISTANT_ID_VARS: &[&str] = &["BOT_ASSISTANT_ID"];
pub const API_KEY_VARS: &[&str] = &["BOT_OPENAI_API_KEY", "OPENAI_API_KEY"];
pub const ORG_ID_VARS: &[&str] = &["BOT_OPENAI_ORG_ID", "OPENAI_ORG_ID"];
pub const BASE_URL_VARS: &[&str] = &["BOT_OPENAI_BASE_URL", "OPENAI_BASE_URL"];

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("one of {} needs to be set", .keys.join(", "))]
    Missing { keys: Vec<String> },
}

/// Settings shared by every collaborator in the workspace. Built once in
/// `main` and passed by reference from there.
#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_id: String,
    pub api_key: String,
    pub org_id: Option<String>,
    pub base_url: String,
    /// Per-request HTTP timeout. Does not bound the run wait as a whole.
    pub request_timeout: Duration,
    /// Deadline for a run to reach `completed`, counted from run creation.
    pub run_timeout: Duration,
    /// Fixed sleep between run status polls.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assistant_id: String::new(),
            api_key: String::new(),
            org_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            run_timeout: DEFAULT_RUN_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Config {
    /// Reads the environment. The assistant id and API key are required;
    /// the organization id and base URL are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let assistant_id = first_non_empty(ASSISTANT_ID_VARS).ok_or_else(|| missing(ASSISTANT_ID_VARS))?;
        let api_key = first_non_empty(API_KEY_VARS).ok_or_else(|| missing(API_KEY_VARS))?;

        Ok(Config {
            assistant_id,
            api_key,
            org_id: first_non_empty(ORG_ID_VARS),
            base_url: first_non_empty(BASE_URL_VARS).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ..Config::default()
        })
    }
}

/// Value of the first variable in `keys` that is set and non-empty.
pub fn first_non_empty(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    })
}

fn missing(keys: &[&str]) -> ConfigError {
    ConfigError::Missing {
        keys: keys.iter().map(|key| key.to_string()).collect(),
    }
}
