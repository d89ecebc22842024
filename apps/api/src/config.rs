use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_MAX_ATTEMPTS, DEFAULT_TIMEOUT_SECS};

const DEFAULT_CATALOG_PATH: &str = "data/careers.csv";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub catalog_path: PathBuf,
    /// Spreadsheet append webhook. Chats are only traced when unset.
    pub chat_log_webhook_url: Option<String>,
    /// LLM timeout and attempt budget before the fallback recommender answers.
    pub llm: LlmSettings,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string())
                .into(),
            chat_log_webhook_url: optional_env("CHAT_LOG_WEBHOOK_URL"),
            llm: LlmSettings::new(
                parse_env("LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
                parse_env("LLM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        std::env::remove_var("CAREERPATH_TEST_UNSET");
        assert_eq!(parse_env("CAREERPATH_TEST_UNSET", 20u64).unwrap(), 20);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("CAREERPATH_TEST_TIMEOUT", " 7 ");
        assert_eq!(parse_env("CAREERPATH_TEST_TIMEOUT", 20u64).unwrap(), 7);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CAREERPATH_TEST_ATTEMPTS", "-1");
        assert!(parse_env("CAREERPATH_TEST_ATTEMPTS", 1u32).is_err());
    }
}
