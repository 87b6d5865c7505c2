use std::{future::Future, time::Duration};

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, utils::timeout::with_timeout};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed client for one LeadDB backend.
///
/// The base URL is fixed at construction; pages build a new client when the
/// configured base URL changes instead of reading it from ambient state.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.timeout == other.timeout
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::DEFAULT_API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: Client::new(),
            base_url: config::normalize_base_url(Some(base_url.as_ref())),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Runs a whole request, body included, under the client-side timeout.
    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        with_timeout(self.timeout, fut)
            .await
            .map_err(|elapsed| ApiError::timeout(format!("Request timed out: {}", elapsed)))?
    }

    /// Maps transport failures and non-2xx statuses into `ApiError`.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let fallback = format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Request failed")
        );
        let message = match response.json::<Value>().await {
            Ok(body) => ["error", "message"]
                .iter()
                .find_map(|key| body.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or(fallback),
            Err(_) => fallback,
        };
        ApiError::http_status(status.as_u16(), message)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode_failed(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self.http_client().get(self.url(path)).query(params);
        self.bounded(async { Self::decode(self.send(request).await?).await })
            .await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http_client().post(self.url(path)).json(body);
        self.bounded(async { Self::decode(self.send(request).await?).await })
            .await
    }

    pub async fn health(&self) -> Result<(), ApiError> {
        let request = self.http_client().get(self.url("/health"));
        self.bounded(async { self.send(request).await.map(|_| ()) })
            .await
    }
}
