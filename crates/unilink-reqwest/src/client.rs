//! Authenticated request pipeline built on reqwest.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::{CancellationToken, DropGuard};
use unilink_core::{Error, Result};
use url::Url;

use crate::error::Error as TransportError;
use crate::{ApiConfig, RetryConfig, SharedTokenStore, TRACING_TARGET, TokenStore};

/// Upper bound on the number of body characters kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 1024;

/// Inner client that holds the HTTP client and configuration.
struct ApiClientInner {
    http: Client,
    config: ApiConfig,
    base_url: Url,
    tokens: SharedTokenStore,
    retry: RetryConfig,
}

/// Single request pipeline shared by every service.
///
/// Every request is sent to `base_url + path` with a JSON content type. When
/// the token store holds a token it is attached as a bearer credential; when
/// reading the store fails the request is aborted before anything is sent.
/// Responses with a non-success status become [`ErrorKind::Http`] errors
/// carrying the status code and the backend's message.
///
/// Cloning is cheap; clones share the HTTP connection pool and token store.
///
/// [`ErrorKind::Http`]: unilink_core::ErrorKind::Http
///
/// # Examples
///
/// ```rust,ignore
/// use unilink_reqwest::{ApiClient, ApiConfig, MemoryTokenStore};
///
/// let client = ApiClient::new(ApiConfig::default(), MemoryTokenStore::new())?;
/// let profile: serde_json::Value = client.get("/auth/me").await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
    cancellation: Option<CancellationToken>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.inner.config)
            .field("tokens", &self.inner.tokens)
            .field("scoped", &self.cancellation.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a new client with the given configuration and token store.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration is invalid or the
    /// HTTP client cannot be created.
    pub fn new(config: ApiConfig, tokens: impl TokenStore + 'static) -> Result<Self> {
        Self::with_shared_tokens(config, Arc::new(tokens))
    }

    /// Creates a new client over an already shared token store.
    pub fn with_shared_tokens(config: ApiConfig, tokens: SharedTokenStore) -> Result<Self> {
        config.validate()?;

        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            api_url = %config.api_url,
            timeout_ms = timeout.as_millis(),
            get_retries = config.get_retries,
            "Creating API client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .map_err(|e| {
                Error::configuration()
                    .with_message("failed to create HTTP client")
                    .with_source(e)
            })?;

        let inner = ApiClientInner {
            http,
            base_url: directory_url(&config.api_url),
            retry: config.retry_config(),
            config,
            tokens,
        };

        tracing::info!(
            target: TRACING_TARGET,
            api_url = %inner.config.api_url,
            "API client created successfully"
        );

        Ok(Self {
            inner: Arc::new(inner),
            cancellation: None,
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Gets the token store consulted before every request.
    pub fn tokens(&self) -> &SharedTokenStore {
        &self.inner.tokens
    }

    /// Resolves a request path against the base endpoint.
    ///
    /// Leading slashes are ignored so `/auth/login` and `auth/login` both
    /// land below the configured base path.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::from(e).into())
    }

    /// Returns a client whose requests abort once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: self.inner.clone(),
            cancellation: Some(token),
        }
    }

    /// Returns a client scoped to the lifetime of the returned guard.
    ///
    /// Dropping the guard cancels every in-flight request issued through the
    /// scoped client; they resolve with a cancellation error. Scopes nest: a
    /// scope created from a scoped client is cancelled with its parent.
    pub fn scoped(&self) -> (Self, DropGuard) {
        let token = match &self.cancellation {
            Some(parent) => parent.child_token(),
            None => CancellationToken::new(),
        };

        (self.with_cancellation(token.clone()), token.drop_guard())
    }

    /// Returns true if this client's scope has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Sends a `GET` request and decodes the response body.
    ///
    /// Retryable failures are retried according to the configured policy.
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.get_inner::<T, ()>(path, None).await
    }

    /// Sends a `GET` request with query parameters and decodes the response body.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get_inner(path, Some(query)).await
    }

    /// Sends a `POST` request with a JSON body and decodes the response body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T, (), B>(Method::POST, path, None, Some(body))
            .await
    }

    /// Sends a `PUT` request with a JSON body and decodes the response body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute::<T, (), B>(Method::PUT, path, None, Some(body))
            .await
    }

    async fn get_inner<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.inner
            .retry
            .retry(|| self.execute::<T, Q, ()>(Method::GET, path, query, None))
            .await
    }

    /// Attaches the bearer credential, if a token is stored.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.inner.tokens.get().map_err(|err| {
            Error::request_setup()
                .with_message("failed to read authentication token")
                .with_source(err)
        })?;

        Ok(match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn execute<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let context = format!("{method} {path}");

        let url = self.endpoint(path)?;
        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        request = self
            .authorize(request)
            .map_err(|err| err.with_context(context.clone()))?;

        if let Some(query) = query {
            request = request.query(query);
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(TransportError::from)?;
            request = request.body(payload);
        }

        let started_at = Instant::now();
        tracing::debug!(
            target: TRACING_TARGET,
            request = %context,
            "Dispatching request"
        );

        let exchange = async {
            let response = request.send().await.map_err(TransportError::from)?;
            decode(response).await
        };

        let result = match &self.cancellation {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    Err(Error::cancelled().with_message("request cancelled by its owner"))
                }
                result = exchange => result,
            },
            None => exchange.await,
        };

        let elapsed = started_at.elapsed();
        match &result {
            Ok(_) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request = %context,
                    elapsed_ms = elapsed.as_millis(),
                    "Request completed"
                );
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    request = %context,
                    error = %err,
                    elapsed_ms = elapsed.as_millis(),
                    "Request failed"
                );
            }
        }

        result.map_err(|err| err.with_context(context))
    }
}

/// Decodes a response into `T`, or into an HTTP error for non-success statuses.
async fn decode<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await.map_err(TransportError::from)?;

    if !status.is_success() {
        return Err(Error::http(status.as_u16()).with_message(error_message(status, &body)));
    }

    // Empty bodies decode as JSON `null` so `()` and `Option<T>` work.
    let payload = if body.trim().is_empty() {
        "null"
    } else {
        body.as_str()
    };

    serde_json::from_str(payload).map_err(|e| TransportError::from(e).into())
}

/// Extracts a human-readable message from an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = fields.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_owned()
}

/// Returns `url` with a trailing slash so relative joins append to its path.
fn directory_url(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
