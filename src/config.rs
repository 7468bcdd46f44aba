use std::time::Duration;

use crate::domain::DEFAULT_MODEL;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_SITE_URL: &str = "https://learnerbot.ai";
pub const DEFAULT_SITE_NAME: &str = "LearnerBot AI Assistant";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the completion provider.
///
/// Built once and handed to the client; nothing re-reads the environment
/// afterwards.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    api_key: Option<String>,
    base_url: String,
    site_url: String,
    site_name: String,
    model: String,
    /// `None` means requests never time out.
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable                  | Default                        |
    /// |---------------------------|--------------------------------|
    /// | `OPENROUTER_API_KEY`      | unset (degraded mode)          |
    /// | `OPENROUTER_BASE_URL`     | `https://openrouter.ai/api/v1` |
    /// | `OPENROUTER_MODEL`        | `openai/gpt-4o`                |
    /// | `SITE_URL`                | `https://learnerbot.ai`        |
    /// | `SITE_NAME`               | `LearnerBot AI Assistant`      |
    /// | `OPENROUTER_TIMEOUT_SECS` | `60`, `0` disables             |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let request_timeout = match env_var("OPENROUTER_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring invalid OPENROUTER_TIMEOUT_SECS '{}', using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Self {
            api_key: env_var("OPENROUTER_API_KEY"),
            base_url: env_var("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
            site_url: env_var("SITE_URL").unwrap_or(defaults.site_url),
            site_name: env_var("SITE_NAME").unwrap_or(defaults.site_name),
            model: env_var("OPENROUTER_MODEL").unwrap_or(defaults.model),
            request_timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
