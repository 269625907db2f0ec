//! Edits endpoint.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `edits` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Edits<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Edits<'_> {
    /// `POST edits` — create an edited version of the given input.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("edits", body)
    }
}
