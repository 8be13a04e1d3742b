//! Runtime configuration for board hosts.
//!
//! Values come from defaults, optionally overridden by `TASKBOARD_*`
//! environment variables. Blank variables are treated as unset.

use crate::logging::default_log_level;
use crate::model::user::DEFAULT_AVATAR_BASE;
use std::path::PathBuf;

pub const ENV_AVATAR_BASE: &str = "TASKBOARD_AVATAR_BASE";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Directory prefix for user avatar images.
    pub avatar_base_path: String,
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    /// Absolute log directory; file logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            avatar_base_path: DEFAULT_AVATAR_BASE.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(base) = read(ENV_AVATAR_BASE) {
            config.avatar_base_path = base;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        config
    }
}
