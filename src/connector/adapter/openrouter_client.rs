use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ChatCompletionClient;
use crate::config::ClientConfig;
use crate::domain::{ChatMessage, DomainError, GenerationParams, ModelDescriptor};

const COMPLETIONS_PATH: &str = "/chat/completions";
const MODELS_PATH: &str = "/models";
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format from the provider";
const MODELS_REQUEST_FAILED: &str = "Failed to fetch models";

/// OpenAI-compatible chat-completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    params: &'a GenerationParams,
    stream: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelDescriptor>,
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// HTTP client for the OpenRouter chat-completions API (and any
/// OpenAI-compatible endpoint reachable at `base_url`).
///
/// Without an API key the client is still constructed, but
/// [`is_configured`](ChatCompletionClient::is_configured) reports `false` and
/// `complete` fails with [`DomainError::MissingConfiguration`] before touching
/// the network.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: ClientConfig,
    params: GenerationParams,
}

impl OpenRouterClient {
    pub fn new(config: ClientConfig) -> Self {
        if !config.has_api_key() {
            warn!("OpenRouter API key not found. Please set OPENROUTER_API_KEY in your .env file");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            params: GenerationParams::for_model(config.model()),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}{}", self.config.base_url(), COMPLETIONS_PATH)
    }

    fn models_url(&self) -> String {
        format!("{}{}", self.config.base_url(), MODELS_PATH)
    }

    /// Pull `error.message` out of a failed response body, falling back to a
    /// message naming the status code.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "OpenRouter API request failed with status {}",
                    status.as_u16()
                )
            })
    }

    /// Read `choices[0].message.content`. Any missing level or wrongly typed
    /// value is a malformed response.
    fn extract_reply(body: &Value) -> Result<String, DomainError> {
        body.get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| DomainError::malformed_response(INVALID_RESPONSE_FORMAT))
    }
}

#[async_trait]
impl ChatCompletionClient for OpenRouterClient {
    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(DomainError::MissingConfiguration)?;

        let request = ApiRequest {
            messages,
            params: &self.params,
            stream: false,
        };

        debug!(
            "OpenRouterClient: POST {} model={} messages={}",
            COMPLETIONS_PATH,
            self.params.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .header("HTTP-Referer", self.config.site_url())
            .header("X-Title", self.config.site_name())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenRouterClient: API returned {status}: {body}");
            return Err(DomainError::request_failed(Self::error_message(status, &body)));
        }

        // Only a body that is not JSON at all is a decode failure.
        let body: Value = response.json().await?;
        Self::extract_reply(&body)
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DomainError> {
        let mut request = self.client.get(self.models_url());
        if let Some(api_key) = self.config.api_key() {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            warn!("OpenRouterClient: models endpoint returned {}", response.status());
            return Err(DomainError::request_failed(MODELS_REQUEST_FAILED));
        }

        let models: ModelsResponse = response.json().await?;
        debug!("OpenRouterClient: {} models available", models.data.len());
        Ok(models.data)
    }

    fn provider_name(&self) -> &str {
        "OpenRouter"
    }
}
