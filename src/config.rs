use crate::constants::*;
use crate::errors::{ChatError, ChatResult};
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_message_length: usize,
    pub duplicate_window_ms: u64,
    pub reply_delay_min_ms: u64,
    pub reply_delay_max_ms: u64,
    pub notification_ttl_ms: u64,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_message_length: MAX_MESSAGE_LENGTH,
            duplicate_window_ms: DUPLICATE_WINDOW_MS,
            reply_delay_min_ms: REPLY_DELAY_MIN_MS,
            reply_delay_max_ms: REPLY_DELAY_MAX_MS,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn duplicate_window(&self) -> Duration {
        Duration::from_millis(self.duplicate_window_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Reads a config file, or writes the defaults there if it does not exist yet.
    pub fn load_or_create(path: &Path) -> ChatResult<Config> {
        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(|e| {
                ChatError::config_error(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = serde_json::from_str(&config_str)
                .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

            validate_config(&config)?;
            debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            write_config(path, &config)?;
            info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config (from `path` or the default location) into the global slot
/// read by [`get_config`].
pub fn initialize_config(path: Option<&Path>) -> ChatResult<()> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    let config = Config::load_or_create(&config_path)?;
    let mut slot = CONFIG
        .write()
        .map_err(|_| ChatError::config_error("Config lock poisoned"))?;
    *slot = config;
    Ok(())
}

pub fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("quipbot").join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    if config.max_message_length == 0 {
        return Err(ChatError::config_error(
            "max_message_length must be greater than 0",
        ));
    }

    if config.reply_delay_min_ms >= config.reply_delay_max_ms {
        return Err(ChatError::config_error(
            "reply_delay_min_ms must be less than reply_delay_max_ms",
        ));
    }

    if config.notification_ttl_ms == 0 {
        return Err(ChatError::config_error(
            "notification_ttl_ms must be greater than 0",
        ));
    }

    if config.log_level.trim().is_empty() {
        return Err(ChatError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}

fn write_config(path: &Path, config: &Config) -> ChatResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(())
}
