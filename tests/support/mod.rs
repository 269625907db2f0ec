//! mockito test utilities.
//!
//! Wraps server creation and common JSON mocks so individual tests stay
//! focused on the behavior under test, and insulates them from mockito API
//! changes.

#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use openai_rest::{OpenAiClient, OpenAiConfig};

/// API key used by every test client.
pub const TEST_KEY: &str = "sk-test-key";

/// Start a mock server (the sync API matches the blocking client).
pub fn start() -> ServerGuard {
    Server::new()
}

/// Base URL pointing at the mock server. Endpoint suffixes are appended
/// verbatim, so the trailing slash matters.
pub fn base_url(server: &ServerGuard) -> String {
    format!("{}/", server.url())
}

/// A client wired to the mock server.
pub fn client_for(server: &ServerGuard) -> OpenAiClient {
    OpenAiClient::new(OpenAiConfig::new(TEST_KEY).with_base_url(base_url(server)))
        .expect("build test client")
}

/// Mount a JSON response mock for the given method and path.
pub fn json_mock(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body_json: &str,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body_json)
        .create()
}
