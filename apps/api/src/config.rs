use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::client::LlmSettings;

/// Application configuration loaded from environment variables.
/// Only malformed values are fatal; a missing API key leaves the completion
/// service unconfigured and every task answers `UPSTREAM_UNAVAILABLE`.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    /// Answer-tip generations allowed in flight at once.
    pub tip_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let tip_concurrency = var("TIP_CONCURRENCY", "3")
            .parse::<usize>()
            .context("TIP_CONCURRENCY must be a positive integer")?;
        if tip_concurrency == 0 {
            anyhow::bail!("TIP_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            llm_api_key: lookup("LLM_API_KEY").filter(|v| !v.trim().is_empty()),
            llm_base_url: var("LLM_BASE_URL", "https://api.openai.com/v1"),
            llm_model: var("LLM_MODEL", "gpt-4o-mini"),
            llm_timeout: Duration::from_secs(
                var("LLM_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            tip_concurrency,
        })
    }

    /// Client settings, or `None` when no API key is configured.
    pub fn llm_settings(&self) -> Option<LlmSettings> {
        self.llm_api_key.as_ref().map(|api_key| LlmSettings {
            api_key: api_key.clone(),
            base_url: self.llm_base_url.clone(),
            model: self.llm_model.clone(),
            timeout: self.llm_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = config_from(&[]).unwrap();
        assert!(config.llm_api_key.is_none());
        assert!(config.llm_settings().is_none());
        assert_eq!(config.llm_base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.tip_concurrency, 3);
    }

    #[test]
    fn test_overrides_and_settings() {
        let config = config_from(&[
            ("LLM_API_KEY", "sk-test"),
            ("LLM_BASE_URL", "http://localhost:11434/v1"),
            ("LLM_MODEL", "llama3"),
            ("LLM_TIMEOUT_SECS", "15"),
            ("PORT", "3000"),
            ("TIP_CONCURRENCY", "5"),
        ])
        .unwrap();
        let settings = config.llm_settings().unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.base_url, "http://localhost:11434/v1");
        assert_eq!(settings.model, "llama3");
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert_eq!(config.port, 3000);
        assert_eq!(config.tip_concurrency, 5);
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("LLM_API_KEY", "  ")]).unwrap();
        assert!(config.llm_api_key.is_none());
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("TIP_CONCURRENCY", "0")]).is_err());
    }
}
