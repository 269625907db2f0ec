//! Models endpoints.
//!
//! Lists and describes the models available in the API.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde_json::Value;

/// Accessor for the `models` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Models<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Models<'_> {
    /// `GET models` — list the currently available models.
    pub fn list(&self) -> Result<Value, OpenAiError> {
        self.client.get("models")
    }

    /// `GET models/{model}` — retrieve basic information about one model.
    pub fn retrieve(&self, model: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("models/{model}"))
    }
}
