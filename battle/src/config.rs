//! Engine configuration loaded from the environment

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{BattleError, BattleResult};

/// random.org endpoint returning one two-decimal fraction as plain text
pub const DEFAULT_RANDOM_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

pub const ENV_RANDOM_SOURCE: &str = "BATTLE_RANDOM_SOURCE";
pub const ENV_RANDOM_URL: &str = "BATTLE_RANDOM_URL";
pub const ENV_RANDOM_TIMEOUT_MS: &str = "BATTLE_RANDOM_TIMEOUT_MS";
pub const ENV_LOG_LEVEL: &str = "BATTLE_LOG_LEVEL";

/// Which random source backs the engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RandomSourceKind {
    /// Remote random number service over HTTP
    #[default]
    Http,
    /// Local thread RNG
    Local,
}

impl FromStr for RandomSourceKind {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(RandomSourceKind::Http),
            "local" => Ok(RandomSourceKind::Local),
            _ => Err(BattleError::Config {
                message: format!("Unknown random source: {s} (expected 'http' or 'local')"),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BattleConfig {
    pub random_source: RandomSourceKind,
    pub random_url: String,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            random_source: RandomSourceKind::default(),
            random_url: DEFAULT_RANDOM_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_level: "info".to_string(),
        }
    }
}

impl BattleConfig {
    /// Load `.env` if present, then read settings from the process environment
    pub fn from_env() -> BattleResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Read settings from a specific `.env` file layered over defaults
    pub fn from_env_file(path: impl AsRef<Path>) -> BattleResult<Self> {
        let iter = dotenvy::from_path_iter(path.as_ref()).map_err(|e| BattleError::Config {
            message: format!("Failed to read {}: {e}", path.as_ref().display()),
        })?;
        let vars = iter
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(|e| BattleError::Config {
                message: format!("Malformed env file: {e}"),
            })?;
        Self::from_vars(vars)
    }

    /// Build a config from key/value pairs, ignoring unrelated keys
    pub fn from_vars<I>(vars: I) -> BattleResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let mut config = Self::default();

        if let Some(kind) = vars.get(ENV_RANDOM_SOURCE) {
            config.random_source = kind.parse()?;
        }
        if let Some(url) = vars.get(ENV_RANDOM_URL) {
            if url.trim().is_empty() {
                return Err(BattleError::Config {
                    message: format!("{ENV_RANDOM_URL} must not be empty"),
                });
            }
            config.random_url = url.trim().to_string();
        }
        if let Some(timeout) = vars.get(ENV_RANDOM_TIMEOUT_MS) {
            let ms: u64 = timeout.trim().parse().map_err(|_| BattleError::Config {
                message: format!("{ENV_RANDOM_TIMEOUT_MS} must be a whole number of milliseconds, got {timeout:?}"),
            })?;
            config.request_timeout = Duration::from_millis(ms);
        }
        if let Some(level) = vars.get(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }

        Ok(config)
    }
}
