//! Client configuration.
//!
//! Everything the facade needs before it can issue a request: credentials,
//! base URL, optional proxy and the request timeout. The API key is held as
//! a [`SecretString`] so it never leaks through `Debug` output.

use crate::error::OpenAiError;
use secrecy::SecretString;
use std::time::Duration;

/// Default OpenAI API base URL. Endpoint suffixes are appended verbatim,
/// so the value keeps its trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

/// Default request timeout applied to the blocking HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`OpenAiClient`](crate::OpenAiClient).
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key used for Bearer authentication.
    pub api_key: SecretString,
    /// Optional organization id, sent as the `OpenAI-Organization` header.
    pub organization: Option<String>,
    /// Base URL every endpoint suffix is appended to.
    pub base_url: String,
    /// Optional proxy URL applied to the whole transport session.
    pub proxy: Option<String>,
    /// Timeout for each request round-trip.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create a configuration with the given API key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            organization: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_ORGANIZATION` is optional.
    pub fn from_env() -> Result<Self, OpenAiError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenAiError::Configuration("OPENAI_API_KEY is not set".to_string())
        })?;
        let mut config = Self::new(api_key);
        if let Ok(organization) = std::env::var("OPENAI_ORGANIZATION") {
            if !organization.is_empty() {
                config.organization = Some(organization);
            }
        }
        Ok(config)
    }

    /// Set the organization id.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Override the base URL (e.g. for an API-compatible gateway or a mock
    /// server). Suffixes are appended verbatim, so end the value with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Route all requests through the given proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), OpenAiError> {
        use secrecy::ExposeSecret;

        if self.api_key.expose_secret().is_empty() {
            return Err(OpenAiError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.is_empty() {
            return Err(OpenAiError::Configuration(
                "base URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use secrecy::ExposeSecret;

        f.debug_struct("OpenAiConfig")
            .field("has_api_key", &!self.api_key.expose_secret().is_empty())
            .field("organization", &self.organization)
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_api_surface() {
        let config = OpenAiConfig::new("sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.organization.is_none());
        assert!(config.proxy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_defaults() {
        let config = OpenAiConfig::new("sk-test")
            .with_organization("org-abc")
            .with_base_url("http://localhost:8080/v1/")
            .with_proxy("http://proxy.local:3128")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.organization.as_deref(), Some("org-abc"));
        assert_eq!(config.base_url, "http://localhost:8080/v1/");
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_api_key_fails_validation() {
        let err = OpenAiConfig::new("").validate().unwrap_err();
        assert!(matches!(err, OpenAiError::Configuration(_)));
    }

    #[test]
    fn debug_output_never_contains_the_api_key() {
        let config = OpenAiConfig::new("sk-super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-super-secret"));
        assert!(rendered.contains("has_api_key: true"));
    }
}
