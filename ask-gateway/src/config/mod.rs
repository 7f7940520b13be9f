use gateway_core::config as core_config;
use gateway_core::error::AppError;
use secrecy::Secret;
use std::env;

/// OpenAI-compatible API root used when `OPENAI_BASE_URL` is unset.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for every completion when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer credential. Absence is only reported when a completion is attempted.
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    /// Fixed for the lifetime of the process.
    pub model: String,
    /// Request timeout; `None` keeps the transport default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let timeout_secs = match optional_env("OPENAI_TIMEOUT_SECS") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "OPENAI_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?),
            None => None,
        };

        Ok(GatewayConfig {
            common,
            openai: OpenAiConfig {
                api_key: optional_env("OPENAI_API_KEY").map(Secret::new),
                base_url: get_env("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
                model: get_env("OPENAI_MODEL", DEFAULT_MODEL),
                timeout_secs,
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Read `key`, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
