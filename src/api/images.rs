//! Images endpoints.
//!
//! Given a prompt and/or an input image, the API generates a new image.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `images` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Images<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Images<'_> {
    /// `POST images/generations` — generate an image from a prompt.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("images/generations", body)
    }

    /// `POST images/edits` — create an edited or extended image.
    pub fn edit<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("images/edits", body)
    }

    /// `POST images/variations` — create a variation of a given image.
    pub fn variation<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("images/variations", body)
    }
}
