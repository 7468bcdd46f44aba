use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError, ModelDescriptor};

/// Port to a hosted chat-completions provider.
///
/// Implementors own transport, authentication and the provider wire format.
/// Use cases only see role-tagged messages in and reply text out.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Whether credentials are present. When `false`, callers must not invoke
    /// [`complete`](Self::complete).
    fn is_configured(&self) -> bool;

    /// Send the full message array and return the assistant's reply text,
    /// already trimmed of surrounding whitespace.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;

    /// Fetch the provider's model catalogue.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DomainError>;

    fn provider_name(&self) -> &str;
}
