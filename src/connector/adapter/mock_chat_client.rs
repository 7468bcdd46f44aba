use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatCompletionClient;
use crate::domain::{ChatMessage, DomainError, ModelDescriptor, Role};

enum Behavior {
    /// Reply with the last user message.
    Echo,
    Reply(String),
    Fail(DomainError),
}

/// Offline [`ChatCompletionClient`] for `--mock` runs and tests.
///
/// Records how often it was called and the last message array it received.
pub struct MockChatClient {
    configured: bool,
    behavior: Behavior,
    models: Vec<ModelDescriptor>,
    calls: AtomicUsize,
    last_request: Mutex<Option<Vec<ChatMessage>>>,
}

impl MockChatClient {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            configured: true,
            behavior,
            models: vec![],
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(reply.into()))
    }

    /// Every call, including `list_models`, fails with a copy of `error`.
    pub fn with_error(error: DomainError) -> Self {
        Self::with_behavior(Behavior::Fail(error))
    }

    /// A client with no credentials.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::echo()
        }
    }

    pub fn with_models(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.models = models;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Vec<ChatMessage>> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn failure(&self) -> Option<DomainError> {
        match &self.behavior {
            Behavior::Fail(e) => Some(copy_error(e)),
            _ => None,
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::echo()
    }
}

// DomainError is not Clone because of the io::Error variant.
fn copy_error(e: &DomainError) -> DomainError {
    match e {
        DomainError::MissingConfiguration => DomainError::MissingConfiguration,
        DomainError::RequestFailed(m) => DomainError::RequestFailed(m.clone()),
        DomainError::MalformedResponse(m) => DomainError::MalformedResponse(m.clone()),
        DomainError::Transport(m) => DomainError::Transport(m.clone()),
        DomainError::InvalidInput(m) => DomainError::InvalidInput(m.clone()),
        DomainError::IoError(io) => DomainError::Transport(io.to_string()),
    }
}

#[async_trait]
impl ChatCompletionClient for MockChatClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(messages.to_vec());
        debug!("MockChatClient: received {} messages", messages.len());

        if !self.configured {
            return Err(DomainError::MissingConfiguration);
        }
        if let Some(e) = self.failure() {
            return Err(e);
        }

        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.trim().to_string()),
            _ => Ok(messages
                .iter()
                .rev()
                .find(|m| m.role() == Role::User)
                .map(|m| m.content().trim().to_string())
                .unwrap_or_default()),
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, DomainError> {
        match self.failure() {
            Some(e) => Err(e),
            None => Ok(self.models.clone()),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
