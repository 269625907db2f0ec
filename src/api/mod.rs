//! Resource accessors, one module per REST resource family.
//!
//! Each accessor borrows the client and maps one method per REST operation
//! to a fixed endpoint suffix. No business logic lives here; everything
//! delegates to [`OpenAiClient::get`](crate::OpenAiClient::get) and
//! [`OpenAiClient::post`](crate::OpenAiClient::post).

mod completions;
mod edits;
mod embeddings;
mod files;
mod fine_tunes;
mod images;
mod models;
mod moderations;

pub use completions::Completions;
pub use edits::Edits;
pub use embeddings::Embeddings;
pub use files::Files;
pub use fine_tunes::FineTunes;
pub use images::Images;
pub use models::Models;
pub use moderations::Moderations;
