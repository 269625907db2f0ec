//! Fine-tunes endpoints.
//!
//! Manages fine-tuning jobs that tailor a model to specific training data.

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use serde::Serialize;
use serde_json::Value;

/// Accessor for the `fine-tunes` resource family.
#[derive(Debug, Clone, Copy)]
pub struct FineTunes<'a> {
    pub(crate) client: &'a OpenAiClient,
}

impl FineTunes<'_> {
    /// `POST fine-tunes` — create a fine-tuning job.
    pub fn create<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value, OpenAiError> {
        self.client.post("fine-tunes", body)
    }

    /// `GET fine-tunes` — list the account's fine-tuning jobs.
    pub fn list(&self) -> Result<Value, OpenAiError> {
        self.client.get("fine-tunes")
    }

    /// `GET fine-tunes/{fine_tune_id}` — retrieve one fine-tuning job.
    pub fn retrieve(&self, fine_tune_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("fine-tunes/{fine_tune_id}"))
    }

    /// `GET fine-tunes/{fine_tune_id}/content` — retrieve job content.
    pub fn content(&self, fine_tune_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("fine-tunes/{fine_tune_id}/content"))
    }

    /// `GET fine-tunes/{fine_tune_id}/cancel` — cancel a running job.
    pub fn cancel(&self, fine_tune_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("fine-tunes/{fine_tune_id}/cancel"))
    }

    /// `GET fine-tunes/{fine_tune_id}/events` — list a job's status events.
    pub fn events(&self, fine_tune_id: &str) -> Result<Value, OpenAiError> {
        self.client.get(&format!("fine-tunes/{fine_tune_id}/events"))
    }
}
