use serde::{Deserialize, Serialize};

/// Reply shown to the user in degraded mode, alongside [`MISSING_API_KEY_ERROR`].
pub const MISSING_API_KEY_MESSAGE: &str = "\
I'd love to help you learn, but I need an API key to connect to my brain! 🧠

Please add your OpenRouter API key to the .env file:
1. Copy .env.example to .env
2. Add your OpenRouter API key as OPENROUTER_API_KEY
3. Restart LearnerBot

Don't worry - once that's set up, we'll have amazing learning adventures together! 🚀";

pub const MISSING_API_KEY_ERROR: &str = "API key not configured";

/// Outcome of a send-message call.
///
/// Exactly one of two shapes is produced: a non-empty `message` with no
/// `error`, or an empty `message` with `error` set. The degraded-mode reply is
/// the one exception and carries a placeholder message together with
/// [`MISSING_API_KEY_ERROR`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn missing_configuration() -> Self {
        Self {
            message: MISSING_API_KEY_MESSAGE.to_string(),
            error: Some(MISSING_API_KEY_ERROR.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_missing_configuration(&self) -> bool {
        self.error.as_deref() == Some(MISSING_API_KEY_ERROR)
    }
}
