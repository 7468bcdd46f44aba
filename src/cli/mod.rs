use std::path::{Path, PathBuf};

use clap::Subcommand;

use learnerbot::domain::{ChatMessage, DomainError};

#[derive(Subcommand)]
pub enum Commands {
    /// Ask LearnerBot something. Without a message, starts an interactive session
    Chat {
        message: Option<String>,

        /// JSON file holding earlier turns: [{"role": "user", "content": "..."}, ...]
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// List the models the provider offers
    Models {
        /// Fail instead of printing nothing when the catalogue can't be fetched
        #[arg(long)]
        strict: bool,
    },
}

/// Read a conversation history file.
pub fn load_history(path: &Path) -> Result<Vec<ChatMessage>, DomainError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        DomainError::invalid_input(format!("{}: {}", path.display(), e))
    })
}
