//! The client facade.
//!
//! [`OpenAiClient`] holds the configuration and the transport session and
//! exposes the generic verbs: [`get`](OpenAiClient::get) and
//! [`post`](OpenAiClient::post) build `base_url + suffix`, attach the
//! standard headers, delegate to the session and interpret the raw response.
//! Resource accessors ([`models`](OpenAiClient::models),
//! [`files`](OpenAiClient::files), ...) layer fixed endpoint suffixes on top
//! of those verbs.

use crate::api::{
    Completions, Edits, Embeddings, Files, FineTunes, Images, Models, Moderations,
};
use crate::config::OpenAiConfig;
use crate::error::{OpenAiError, classify_error_envelope};
use crate::transport::{RawResponse, Session};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

const ORGANIZATION_HEADER: HeaderName = HeaderName::from_static("openai-organization");

/// Synchronous OpenAI API client.
///
/// Construct one explicitly and pass it by reference; there is no
/// process-wide instance. Every operation returns
/// `Result<serde_json::Value, OpenAiError>` so each call site decides how to
/// recover.
///
/// ```no_run
/// use openai_rest::{OpenAiClient, OpenAiConfig};
/// use serde_json::json;
///
/// let client = OpenAiClient::new(OpenAiConfig::new("sk-..."))?;
/// let completion = client.completions().create(&json!({
///     "model": "gpt-3.5-turbo-instruct",
///     "prompt": "Say this is a test",
///     "max_tokens": 7,
/// }))?;
/// println!("{completion}");
/// # Ok::<(), openai_rest::OpenAiError>(())
/// ```
pub struct OpenAiClient {
    config: OpenAiConfig,
    session: Session,
}

impl OpenAiClient {
    /// Create a client from a validated configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        config.validate()?;
        let session = Session::new(config.timeout, config.proxy.as_deref())?;
        Ok(Self { config, session })
    }

    /// Create a client from `OPENAI_API_KEY` / `OPENAI_ORGANIZATION`.
    pub fn from_env() -> Result<Self, OpenAiError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    /// The base URL endpoint suffixes are appended to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Override the base URL for requests issued from now on.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
    }

    /// Send the `OpenAI-Organization` header on requests issued from now on.
    pub fn set_organization(&mut self, organization: impl Into<String>) {
        self.config.organization = Some(organization.into());
    }

    /// Stop sending the `OpenAI-Organization` header.
    pub fn clear_organization(&mut self) {
        self.config.organization = None;
    }

    /// Route requests issued from now on through the given proxy.
    pub fn set_proxy(&mut self, proxy: impl Into<String>) -> Result<(), OpenAiError> {
        let proxy = proxy.into();
        self.session.set_proxy(&proxy)?;
        self.config.proxy = Some(proxy);
        Ok(())
    }

    /// Perform a GET against `base_url + suffix`.
    pub fn get(&self, suffix: &str) -> Result<Value, OpenAiError> {
        let url = format!("{}{}", self.config.base_url, suffix);
        let raw = self
            .session
            .execute(Method::GET, &url, self.build_headers()?, None)?;
        self.interpret(raw)
    }

    /// Perform a POST of a JSON body against `base_url + suffix`.
    pub fn post<T: Serialize + ?Sized>(
        &self,
        suffix: &str,
        body: &T,
    ) -> Result<Value, OpenAiError> {
        let url = format!("{}{}", self.config.base_url, suffix);
        let body = serde_json::to_string(body)?;
        let raw = self
            .session
            .execute(Method::POST, &url, self.build_headers()?, Some(body))?;
        self.interpret(raw)
    }

    fn build_headers(&self) -> Result<HeaderMap, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = format!("Bearer {}", self.config.api_key.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|e| OpenAiError::Configuration(format!("invalid API key format: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if let Some(organization) = &self.config.organization {
            let value = HeaderValue::from_str(organization).map_err(|e| {
                OpenAiError::Configuration(format!("invalid organization id: {e}"))
            })?;
            headers.insert(ORGANIZATION_HEADER, value);
        }

        Ok(headers)
    }

    /// Decode the raw response and route it to the right channel.
    ///
    /// A body that parses as JSON and carries an `error` field becomes an
    /// [`OpenAiError`]. A body that is not valid JSON is a silent soft
    /// failure: a diagnostic is emitted and the empty JSON value is
    /// returned. HTTP status alone never fails a call; the envelope is the
    /// API's error channel.
    fn interpret(&self, raw: RawResponse) -> Result<Value, OpenAiError> {
        match serde_json::from_str::<Value>(&raw.text) {
            Ok(json) => match classify_error_envelope(raw.status, &json) {
                Some(err) => Err(err),
                None => Ok(json),
            },
            Err(_) => {
                warn!(
                    status = raw.status,
                    "response body is not valid JSON; returning empty result"
                );
                Ok(Value::Null)
            }
        }
    }

    /// Accessor for the `models` endpoints.
    pub fn models(&self) -> Models<'_> {
        Models { client: self }
    }

    /// Accessor for the `completions` endpoint.
    pub fn completions(&self) -> Completions<'_> {
        Completions { client: self }
    }

    /// Accessor for the `edits` endpoint.
    pub fn edits(&self) -> Edits<'_> {
        Edits { client: self }
    }

    /// Accessor for the `images` endpoints.
    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    /// Accessor for the `embeddings` endpoint.
    pub fn embeddings(&self) -> Embeddings<'_> {
        Embeddings { client: self }
    }

    /// Accessor for the `files` endpoints.
    pub fn files(&self) -> Files<'_> {
        Files { client: self }
    }

    /// Accessor for the `fine-tunes` endpoints.
    pub fn fine_tunes(&self) -> FineTunes<'_> {
        FineTunes { client: self }
    }

    /// Accessor for the `moderations` endpoint.
    pub fn moderations(&self) -> Moderations<'_> {
        Moderations { client: self }
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Percent-encode a string for use inside a URL (query values, path
/// segments callers build themselves). Endpoint methods concatenate their
/// path parameters verbatim; encoding is the caller's choice.
pub fn escape(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}
