use crate::extractor::LabelSet;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_SYSTEM_PROMPT: &str =
    "Tu es un assistant IA utile et bienveillant. Réponds de manière claire et concise en français.";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration, read from the environment and an optional `.env` file
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub labels: LabelSet,
    pub log_level: String,
}

/// Where and how to reach the chat backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub system_prompt: String,
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BackendConfig::default();

        let url = lookup("FASTAPI_URL").unwrap_or(defaults.url);
        let system_prompt = lookup("CHAT_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt);
        let timeout = match lookup("CHAT_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().with_context(|| {
                format!("CHAT_TIMEOUT_SECS must be a number of seconds, got '{raw}'")
            })?),
            None => defaults.timeout,
        };

        let labels = match lookup("LISTING_LABELS") {
            Some(raw) => LabelSet::from_name(&raw).with_context(|| {
                format!("LISTING_LABELS must be one of fr, en, any; got '{raw}'")
            })?,
            None => LabelSet::default(),
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            backend: BackendConfig {
                url,
                system_prompt,
                timeout,
            },
            labels,
            log_level,
        })
    }
}
