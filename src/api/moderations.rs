//! Moderations endpoint.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `moderations` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Moderations<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Moderations<'_> {
    /// `POST moderations` — classify whether a text violates the content
    /// policy.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("moderations", body)
    }
}
