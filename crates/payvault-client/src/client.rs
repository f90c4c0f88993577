//! Payvault HTTP client implementation.
//!
//! Every endpoint method in the resource modules funnels through the
//! generic request helpers here: one code path builds the request,
//! attaches authentication, and maps error responses. Resource methods
//! only contribute a method, a path, and the request/response shapes.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiErrorResponse, ClientError};

/// Payvault API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PayvaultClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_version: Option<String>,
}

impl PayvaultClient {
    /// Hosted API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.payvault.dev";

    /// Create a client for the hosted API with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(Self::DEFAULT_BASE_URL, api_key, ClientOptions::default())
    }

    /// Create a client with a custom base URL and options.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be built.
    pub fn with_options(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::Configuration("API key must not be empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            api_version: options.api_version,
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::GET, path, None::<&()>, None::<&()>)
            .await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, path, Some(query), None::<&()>)
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(Method::DELETE, path, None::<&()>, None::<&()>)
            .await
    }

    /// Build, authenticate, and dispatch one request.
    async fn execute<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(method = %method, path = %path, "Dispatching API request");

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(&self.api_key);

        if let Some(version) = &self.api_version {
            request = request.header("payvault-version", version);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle an API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse the structured error body
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        let err = match error_body {
            Ok(api_error) => ClientError::Api {
                error_type: api_error.error.error_type,
                message: api_error.error.message,
                code: api_error.error.code,
                param: api_error.error.param,
                status: status.as_u16(),
            },
            Err(_) => ClientError::Api {
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
                param: None,
                status: status.as_u16(),
            },
        };

        tracing::warn!(status = %status, error = %err, "API request failed");
        Err(err)
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// API version to pin responses to, sent as the `payvault-version`
    /// header. Defaults to the account's configured version.
    pub api_version: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            api_version: None,
        }
    }
}

impl ClientOptions {
    /// Create options pinned to an API version.
    #[must_use]
    pub fn with_api_version(version: impl Into<String>) -> Self {
        Self {
            api_version: Some(version.into()),
            ..Self::default()
        }
    }
}
