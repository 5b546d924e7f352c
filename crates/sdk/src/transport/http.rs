//! HTTP transport layer for the Signaturit SDK.

use crate::config::ClientConfig;
use crate::error::{SignaturitError, SignaturitResult};
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Accepted status set for reads, updates and deletes.
pub const OK: &[u16] = &[200];

/// Accepted status set for calls that may create a resource.
pub const OK_OR_CREATED: &[u16] = &[200, 201];

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Pass the response through when its status is in `accepted`,
    /// otherwise turn it into an upstream error carrying the body verbatim.
    pub fn expect_status(self, accepted: &[u16]) -> SignaturitResult<Self> {
        if accepted.contains(&self.status) {
            Ok(self)
        } else {
            Err(SignaturitError::Upstream {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> SignaturitResult<T> {
        serde_json::from_str(&self.body).map_err(|e| SignaturitError::decoding(&e, &self.body))
    }
}

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> SignaturitResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| SignaturitError::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Build a URL by appending `path` to the base URL, one segment at a
    /// time. Each segment is percent-encoded, so `/`, `?`, `#` and `..`
    /// inside an id cannot escape into another resource.
    fn build_url(&self, path: &[&str]) -> SignaturitResult<url::Url> {
        if let Some(segment) = path.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(SignaturitError::Config(format!(
                "Invalid path segment: {:?}",
                segment
            )));
        }

        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SignaturitError::Config("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Perform a single request and hand back the status and body untouched.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> SignaturitResult<RawResponse> {
        let url = self.build_url(path)?;

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(SignaturitError::Encoding)?;
            request = request.body(encoded);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(method = %method, url = %url, status, "Signaturit API exchange");

        Ok(RawResponse { status, body })
    }

    /// Execute a GET request.
    pub async fn get(&self, path: &[&str]) -> SignaturitResult<RawResponse> {
        self.request::<()>(Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &[&str], body: &B) -> SignaturitResult<RawResponse> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Execute a POST request without a body.
    pub async fn post_empty(&self, path: &[&str]) -> SignaturitResult<RawResponse> {
        self.request::<()>(Method::POST, path, None).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &[&str], body: &B) -> SignaturitResult<RawResponse> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, path: &[&str]) -> SignaturitResult<RawResponse> {
        self.request::<()>(Method::DELETE, path, None).await
    }
}
