use std::sync::Arc;

use tracing::error;

use crate::application::ChatCompletionClient;
use crate::domain::{DomainError, ModelDescriptor};

/// Lists the models the provider offers.
///
/// [`execute`](Self::execute) is best-effort and yields an empty list on any
/// failure. Use [`try_execute`](Self::try_execute) to see the failure reason.
pub struct ListModelsUseCase {
    client: Arc<dyn ChatCompletionClient>,
}

impl ListModelsUseCase {
    pub fn new(client: Arc<dyn ChatCompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self) -> Vec<ModelDescriptor> {
        match self.try_execute().await {
            Ok(models) => models,
            Err(e) => {
                error!("Error fetching models: {}", e);
                vec![]
            }
        }
    }

    pub async fn try_execute(&self) -> Result<Vec<ModelDescriptor>, DomainError> {
        self.client.list_models().await
    }
}
