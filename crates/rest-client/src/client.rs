//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Method};
use std::time::Duration;

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    status: u16,
    body: String,
}

impl RestResponse {
    /// Create a response from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body as received.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a non-success response into a `RestError::HttpError`.
    pub fn into_http_error(self) -> RestError {
        RestError::HttpError {
            status: self.status,
            message: self.body,
        }
    }
}

/// Generic REST client for making HTTP requests.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.binance.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/api/v3/time")
    /// * `query` - Optional encoded query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn get(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<RestResponse, RestError> {
        self.send(Method::GET, path, query, headers).await
    }

    /// Make a POST request with parameters in the query string.
    pub async fn post(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<RestResponse, RestError> {
        self.send(Method::POST, path, query, headers).await
    }

    /// Make a DELETE request.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<RestResponse, RestError> {
        self.send(Method::DELETE, path, query, headers).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<RestResponse, RestError> {
        // Query is appended verbatim so signed parameter order is preserved.
        let url = self.build_url(path, query);
        tracing::debug!(method = %method, path = %path, "HTTP request");

        let mut request = self.client.request(method, &url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status = status, bytes = body.len(), "HTTP response");

        Ok(RestResponse::new(status, body))
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
