//! Main client for the Signaturit SDK.

use crate::api::{ContactsApi, SignaturesApi};
use crate::config::{ClientConfig, Environment};
use crate::error::{SignaturitError, SignaturitResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Signaturit API.
#[derive(Debug, Clone)]
pub struct SignaturitClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl SignaturitClient {
    /// Create a new client builder.
    pub fn builder() -> SignaturitClientBuilder {
        SignaturitClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> SignaturitResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Raw transport, for calls the typed APIs do not cover.
    pub fn http(&self) -> &HttpTransport {
        &self.http
    }

    /// Get the contacts API.
    pub fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(self)
    }

    /// Get the signatures API.
    pub fn signatures(&self) -> SignaturesApi<'_> {
        SignaturesApi::new(self)
    }
}

/// Builder for creating a SignaturitClient.
pub struct SignaturitClientBuilder {
    api_key: Option<String>,
    environment: Environment,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SignaturitClientBuilder {
    /// Create a new builder targeting production.
    pub fn new() -> Self {
        Self {
            api_key: None,
            environment: Environment::Production,
            base_url: None,
            timeout: None,
        }
    }

    /// Set the secret token used as bearer credential.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Use the sandbox environment when `sandbox` is true.
    pub fn sandbox(self, sandbox: bool) -> Self {
        self.environment(Environment::from_sandbox_flag(sandbox))
    }

    /// Override the environment's base URL (mock servers, proxies).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> SignaturitResult<SignaturitClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SignaturitError::Config("api_key is required".to_string()))?;

        let base_url = match self.base_url {
            Some(url) => Url::parse(&url)?,
            None => Url::parse(self.environment.base_url())?,
        };

        let config = ClientConfig {
            environment: self.environment,
            base_url,
            api_key,
            timeout: self.timeout,
        };

        SignaturitClient::from_config(config)
    }
}

impl Default for SignaturitClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
