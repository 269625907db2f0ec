//! Completions endpoint.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `completions` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Completions<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Completions<'_> {
    /// `POST completions` — create a completion for the provided prompt and
    /// parameters.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("completions", body)
    }
}
