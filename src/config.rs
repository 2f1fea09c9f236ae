use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BarcartError, Result};

pub const DEFAULT_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
pub const DEFAULT_QUERY: &str = "margarita";
pub const DEFAULT_TOAST_MS: u64 = 3000;
pub const DEFAULT_PRINT_FILE: &str = "shopping-list.txt";
pub const DEFAULT_LOG_FILE: &str = "barcart.log";

/// Where a printed shopping list ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    File(PathBuf),
    /// Spooler command fed the document on stdin, e.g. `lpr`
    Command(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub default_query: String,
    pub toast_duration: Duration,
    pub print_target: PrintTarget,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_query: DEFAULT_QUERY.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            print_target: PrintTarget::File(PathBuf::from(DEFAULT_PRINT_FILE)),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `BARCART_*` variables resolved through `lookup`
    /// Unset or blank variables keep their default
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("BARCART_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(query) = get("BARCART_DEFAULT_QUERY") {
            config.default_query = query;
        }
        if let Some(ms) = get("BARCART_TOAST_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                BarcartError::Config(format!("BARCART_TOAST_MS must be milliseconds, got '{}'", ms))
            })?;
            config.toast_duration = Duration::from_millis(ms);
        }
        if let Some(command) = get("BARCART_PRINT_COMMAND") {
            config.print_target = PrintTarget::Command(command);
        } else if let Some(path) = get("BARCART_PRINT_FILE") {
            config.print_target = PrintTarget::File(PathBuf::from(path));
        }
        if let Some(path) = get("BARCART_LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }
}
