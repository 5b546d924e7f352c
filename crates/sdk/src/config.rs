//! Configuration types for the Signaturit SDK.

use std::time::Duration;
use url::Url;

/// Production API endpoint.
pub const PRODUCTION_URL: &str = "https://api.signaturit.com/v3";

/// Sandbox API endpoint.
pub const SANDBOX_URL: &str = "https://api.sandbox.signaturit.com/v3";

/// API environment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Select the environment from a sandbox/debug flag.
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Base URL of the environment, including the version prefix.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Configuration for the Signaturit client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Environment the base URL was derived from.
    pub environment: Environment,
    /// Base URL requests are resolved against.
    pub base_url: Url,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given environment.
    pub fn new(environment: Environment, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self {
            environment,
            base_url: Url::parse(environment.base_url())?,
            api_key: api_key.into(),
            timeout: None,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
