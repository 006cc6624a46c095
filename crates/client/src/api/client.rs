//! API client with bearer injection and the centralized 401 policy
//!
//! Every catalog call funnels through [`ApiClient`]:
//! - the bearer token is read from the storage adapter at dispatch time and
//!   attached when present; absent, the request proceeds unauthenticated
//! - any 401 response unconditionally clears the persisted token and user,
//!   notifies the injected [`UnauthorizedObserver`], and surfaces
//!   [`ApiError::Unauthorized`] to the caller
//! - every other failure is surfaced unmodified; there are no retries and no
//!   response-shape validation beyond typed deserialization

use std::sync::Arc;
use std::time::Duration;

use reelforge_common::storage::{KeyValueStore, KeyValueStoreExt};
use reelforge_domain::constants::{AUTH_TOKEN_KEY, USER_KEY};
use reelforge_domain::ApiConfig;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Hook fired after the 401 policy has cleared persisted session state.
///
/// The data layer performs no navigation: the composition root decides what
/// "logged out" means for the rest of the application (typically flipping
/// the session store to anonymous, which views observe).
pub trait UnauthorizedObserver: Send + Sync {
    /// Called once per 401 response, after storage has been cleared.
    fn on_unauthorized(&self);
}

/// Shared HTTP client for all catalog calls.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    storage: Arc<dyn KeyValueStore>,
    on_unauthorized: Option<Arc<dyn UnauthorizedObserver>>,
    cancel: Option<CancellationToken>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is unparsable or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ApiConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        Url::parse(&config.base_url)
            .map_err(|err| ApiError::Config(format!("invalid base URL: {err}")))?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
            on_unauthorized: None,
            cancel: None,
        })
    }

    /// Attach the hook fired after a 401 has cleared persisted state.
    #[must_use]
    pub fn with_unauthorized_observer(mut self, observer: Arc<dyn UnauthorizedObserver>) -> Self {
        self.on_unauthorized = Some(observer);
        self
    }

    /// Derive a handle whose calls resolve to [`ApiError::Cancelled`] once
    /// `cancel` is cancelled. Used to scope requests to a view's lifetime.
    #[must_use]
    pub fn scoped(&self, cancel: CancellationToken) -> Self {
        let mut scoped = self.clone();
        scoped.cancel = Some(cancel);
        scoped
    }

    /// Base URL this client dispatches against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET request.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.dispatch::<(), ()>(Method::GET, path, None, None).await?;
        Self::decode(response).await
    }

    /// Execute a GET request with a serialized query string.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch::<Q, ()>(Method::GET, path, Some(query), None).await?;
        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch::<(), B>(Method::POST, path, None, Some(body)).await?;
        Self::decode(response).await
    }

    /// Execute a POST request without a body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.dispatch::<(), ()>(Method::POST, path, None, None).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.dispatch::<(), B>(Method::PUT, path, None, Some(body)).await?;
        Self::decode(response).await
    }

    /// Execute a DELETE request.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.dispatch::<(), ()>(Method::DELETE, path, None, None).await?;
        Self::decode(response).await
    }

    async fn dispatch<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        // Token is read at dispatch time so a login that lands between two
        // calls is picked up without rebuilding the client.
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = match &self.cancel {
            Some(cancel) => self.http.send_cancellable(request, cancel).await?,
            None => self.http.send(request).await?,
        };

        if response.status() == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized(&url);
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    fn bearer_token(&self) -> Option<String> {
        self.storage.get::<String>(AUTH_TOKEN_KEY)
    }

    fn handle_unauthorized(&self, url: &str) {
        warn!(url, "401 response: clearing persisted session");
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
        if let Some(observer) = &self.on_unauthorized {
            observer.on_unauthorized();
        }
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, body));
        }

        // 204/205 have no body by RFC spec
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "no-content response ({}) for a type that needs a body",
                    status.as_u16()
                ))
            });
        }

        response.json().await.map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn map_status_error(status: StatusCode, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("status {}", status.as_u16())
        } else {
            body
        };

        debug!(status = status.as_u16(), "non-success response");

        if status.is_server_error() {
            ApiError::Server { status: status.as_u16(), message }
        } else {
            ApiError::Client { status: status.as_u16(), message }
        }
    }
}
