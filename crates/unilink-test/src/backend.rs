//! Mock backend server and request recording.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use crate::{TRACING_TARGET, routes};

/// A request as observed by the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Request path including the `/api` prefix.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// `Authorization` header value, if any.
    pub authorization: Option<String>,
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
    /// Decoded JSON body, `Value::Null` when empty or not JSON.
    pub body: Value,
}

#[derive(Debug, Default)]
struct MockStateInner {
    requests: Vec<RecordedRequest>,
    failures: Vec<StatusCode>,
}

/// State shared between the server task and the test.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockState {
    inner: Arc<Mutex<MockStateInner>>,
}

impl MockState {
    fn lock(&self) -> MutexGuard<'_, MockStateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, request: RecordedRequest) {
        self.lock().requests.push(request);
    }

    fn take_failure(&self) -> Option<StatusCode> {
        let mut inner = self.lock();
        if inner.failures.is_empty() {
            None
        } else {
            Some(inner.failures.remove(0))
        }
    }
}

/// An imitation of the platform API served on `127.0.0.1` at an ephemeral port.
///
/// The server task is aborted when the backend is dropped.
#[derive(Debug)]
pub struct MockBackend {
    addr: SocketAddr,
    state: MockState,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// Binds an ephemeral port and starts serving.
    pub async fn start() -> std::io::Result<Self> {
        let state = MockState::default();
        let router = routes::router()
            .layer(middleware::from_fn_with_state(state.clone(), record));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::warn!(target: TRACING_TARGET, error = %err, "Mock backend stopped");
            }
        });

        tracing::debug!(target: TRACING_TARGET, %addr, "Mock backend listening");
        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Returns the base API URL, e.g. `http://127.0.0.1:4242/api`.
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).expect("socket address forms a valid URL")
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().requests.last().cloned()
    }

    /// Makes the next `count` requests fail with `status`, whatever their route.
    pub fn fail_next(&self, count: usize, status: u16) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut inner = self.state.lock();
        inner.failures.extend(std::iter::repeat_n(status, count));
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Records the request and applies any injected failure.
async fn record(State(state): State<MockState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    state.record(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
        query: parts.uri.query().map(str::to_owned),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    });

    if let Some(status) = state.take_failure() {
        return (status, Json(json!({ "message": "injected failure" }))).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
