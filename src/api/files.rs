//! Files endpoints.
//!
//! Files are documents uploaded for use with features like fine-tuning.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `files` resource family.
#[derive(Debug, Clone, Copy)]
pub struct Files<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl Files<'_> {
    /// `GET files` — list the files belonging to the account.
    pub fn list(&self) -> Result<Value, OpenAiError> {
        self.client.get("files")
    }

    /// `POST files` — upload a file.
    pub fn upload<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("files", body)
    }

    /// `GET files/{file_id}` — retrieve information about one file.
    pub fn retrieve(&self, file_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("files/{file_id}"))
    }

    /// `GET files/{file_id}/content` — retrieve the contents of one file.
    pub fn content(&self, file_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("files/{file_id}/content"))
    }
}
