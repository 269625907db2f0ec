//! Embeddings endpoint.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `embeddings` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Embeddings<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Embeddings<'_> {
    /// `POST embeddings` — get a vector representation of a given input.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("embeddings", body)
    }
}
