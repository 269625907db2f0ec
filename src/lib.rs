//! Synchronous OpenAI REST API client.
//!
//! Maps the OpenAI endpoints (models, completions, edits, images,
//! embeddings, files, fine-tunes, moderations) onto typed method calls. Each
//! call is one blocking request/response round-trip with JSON encode/decode
//! at the edges: no retries, no caching, no background tasks.
//!
//! # Example
//!
//! ```no_run
//! use openai_rest::{OpenAiClient, OpenAiConfig};
//! use serde_json::json;
//!
//! let client = OpenAiClient::new(
//!     OpenAiConfig::from_env()?.with_organization("org-example"),
//! )?;
//!
//! let models = client.models().list()?;
//! let moderation = client.moderations().create(&json!({
//!     "input": "I want to hug them",
//! }))?;
//! # Ok::<(), openai_rest::OpenAiError>(())
//! ```
//!
//! Errors come back as [`OpenAiError`] values: transport failures, API error
//! envelopes and configuration problems all use the same `Result` channel.
//! The one exception is a response body that is not valid JSON, which is
//! logged and returned as the empty JSON value instead of failing the call.

pub mod api;
mod client;
mod config;
mod error;
mod transport;

pub use client::{OpenAiClient, escape};
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiConfig};
pub use error::OpenAiError;
