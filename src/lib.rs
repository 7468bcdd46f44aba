pub mod application;
pub mod config;
pub mod connector;
pub mod domain;

pub use application::{ChatCompletionClient, ListModelsUseCase, SendMessageUseCase};

pub use config::ClientConfig;

pub use connector::{MockChatClient, OpenRouterClient};

pub use domain::{
    build_conversation, ApiResponse, ChatMessage, DomainError, GenerationParams, ModelDescriptor,
    Role, SYSTEM_PROMPT,
};
