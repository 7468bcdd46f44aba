mod mock_chat_client;
mod openrouter_client;

pub use mock_chat_client::*;
pub use openrouter_client::*;
