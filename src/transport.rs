//! Blocking HTTP transport session.
//!
//! A [`Session`] owns one reusable `reqwest::blocking::Client` and executes
//! a single request at a time: a mutex makes requests on one session
//! mutually exclusive, so one caller's in-flight request cannot interleave
//! with another's on the same connection pool. There is no queuing or
//! prioritization beyond that, and the calling thread blocks for the whole
//! round-trip.

use crate::error::OpenAiError;
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Raw transport-level response: HTTP status plus the undecoded body text.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub text: String,
}

/// One reusable blocking HTTP connection pool plus its session settings.
#[derive(Debug)]
pub(crate) struct Session {
    http: reqwest::blocking::Client,
    timeout: Duration,
    request_lock: Mutex<()>,
}

impl Session {
    /// Build a session with the given timeout and optional proxy.
    pub fn new(timeout: Duration, proxy: Option<&str>) -> Result<Self, OpenAiError> {
        Ok(Self {
            http: build_client(timeout, proxy)?,
            timeout,
            request_lock: Mutex::new(()),
        })
    }

    /// Replace the underlying client to apply a new proxy.
    ///
    /// Proxies are a client-level setting in reqwest, so changing one means
    /// swapping the connection pool; the old pool is released on drop.
    pub fn set_proxy(&mut self, proxy: &str) -> Result<(), OpenAiError> {
        self.http = build_client(self.timeout, Some(proxy))?;
        Ok(())
    }

    /// Execute one blocking request and capture the raw response.
    ///
    /// Transport failures (connect, DNS, TLS, timeout, body read) surface as
    /// [`OpenAiError::Http`]. HTTP status is captured, not judged: the
    /// caller owns response interpretation.
    pub fn execute(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<RawResponse, OpenAiError> {
        let _guard = self
            .request_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        debug!(%method, url, "sending request");

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        debug!(status, bytes = text.len(), "received response");

        Ok(RawResponse { status, text })
    }
}

fn build_client(
    timeout: Duration,
    proxy: Option<&str>,
) -> Result<reqwest::blocking::Client, OpenAiError> {
    let mut builder = reqwest::blocking::Client::builder().timeout(timeout);
    if let Some(url) = proxy {
        let proxy = reqwest::Proxy::all(url).map_err(|e| {
            OpenAiError::Configuration(format!("invalid proxy URL '{url}': {e}"))
        })?;
        builder = builder.proxy(proxy);
    }
    builder.build().map_err(OpenAiError::Http)
}
