use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A model entry from the provider's model catalogue.
///
/// The record is kept as raw JSON; only the commonly present fields get
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDescriptor(Value);

impl ModelDescriptor {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}
