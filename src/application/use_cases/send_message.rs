use std::sync::Arc;

use tracing::{debug, error};

use crate::application::ChatCompletionClient;
use crate::domain::{build_conversation, ApiResponse, ChatMessage};

/// Sends one user message, with the caller's history, and normalizes the
/// outcome into an [`ApiResponse`].
///
/// No error escapes `execute`: every failure becomes `ApiResponse::error`.
/// The use case holds no per-conversation state, so one instance can serve
/// any number of concurrent calls.
pub struct SendMessageUseCase {
    client: Arc<dyn ChatCompletionClient>,
}

impl SendMessageUseCase {
    pub fn new(client: Arc<dyn ChatCompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, message: &str, history: &[ChatMessage]) -> ApiResponse {
        if !self.client.is_configured() {
            return ApiResponse::missing_configuration();
        }

        let messages = build_conversation(history, message);
        debug!(
            "Sending {} messages ({} history) to {}",
            messages.len(),
            history.len(),
            self.client.provider_name()
        );

        match self.client.complete(&messages).await {
            Ok(reply) => ApiResponse::success(reply),
            Err(e) => {
                error!("{} API error: {}", self.client.provider_name(), e);
                ApiResponse::failure(e.to_string())
            }
        }
    }
}
