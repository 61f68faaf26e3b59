//! Runtime configuration read from the environment.

pub const DB_ENV: &str = "TRADEJOURNAL_DB";
pub const USER_ENV: &str = "TRADEJOURNAL_USER";
pub const LOG_ENV: &str = "TRADEJOURNAL_LOG";

pub const DEFAULT_DB_PATH: &str = "./tradejournal.db";
pub const DEFAULT_USER: &str = "local";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// SQLite database file, `:memory:` for a throwaway journal.
    pub db_path: String,
    /// Owner of every trade logged through this process.
    pub user_id: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            user_id: DEFAULT_USER.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl JournalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            db_path: get(DB_ENV, DEFAULT_DB_PATH),
            user_id: get(USER_ENV, DEFAULT_USER),
            log_filter: get(LOG_ENV, DEFAULT_LOG_FILTER),
        }
    }
}
