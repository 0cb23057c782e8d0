//! Scripted Telex server for exercising a real [`telex::Client`] end to end.
//!
//! The server answers the two producer endpoints from FIFO queues of canned
//! responses. Anything the queues were not prepared for is answered with a
//! 500 whose body says what went wrong, which surfaces in the client as
//! `TelexError::UnexpectedStatus`.

use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use telex::Notification;
use telex::models::Followup;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::reporter::ErrorReporter;

const NOTIFY_PATH: &str = "/producer/messages";
const FOLLOWUP_PATH: &str = "/producer/messages/{id}/followups";

/// A complete HTTP response replayed verbatim by [`TestServer`]
#[derive(Debug, Clone, PartialEq)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CannedResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// `201 Created` carrying `{"id": id}`, what Telex answers on success
    pub fn created(id: impl Into<String>) -> Self {
        Self::with_id(StatusCode::CREATED, id.into())
    }

    fn with_id(status: StatusCode, id: String) -> Self {
        Self::new(status)
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )
            .body(json!({ "id": id }).to_string())
    }
}

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Builds a `{"id": id}` JSON response, with status 201 unless one is given
pub fn generate_http_response(id: Uuid, status: Option<StatusCode>) -> CannedResponse {
    CannedResponse::with_id(status.unwrap_or(StatusCode::CREATED), id.to_string())
}

#[derive(Default)]
struct Expectations {
    notify: VecDeque<Option<CannedResponse>>,
    followup: VecDeque<Option<CannedResponse>>,
    received_notifications: Vec<Notification>,
    received_followups: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct SharedState(Arc<Mutex<Expectations>>);

impl SharedState {
    fn lock(&self) -> MutexGuard<'_, Expectations> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn respond(canned: Option<CannedResponse>) -> Response {
    canned
        .unwrap_or_else(|| CannedResponse::created(Uuid::new_v4().to_string()))
        .into_response()
}

fn internal_error(message: impl Into<String>) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message.into()).into_response()
}

async fn notify_handler(State(state): State<SharedState>, body: Bytes) -> Response {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => return internal_error(e.to_string()),
    };

    // Any JSON is accepted; only bodies shaped like a notification are recorded
    let notification = serde_json::from_value::<Notification>(value).ok();

    let next = {
        let mut expectations = state.lock();
        expectations.received_notifications.extend(notification);
        expectations.notify.pop_front()
    };

    match next {
        Some(canned) => respond(canned),
        None => {
            tracing::debug!("notify received with no expectations left");
            internal_error("No Notify Response Expectations")
        }
    }
}

async fn followup_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let followup: Followup = match serde_json::from_slice(&body) {
        Ok(followup) => followup,
        Err(e) => return internal_error(e.to_string()),
    };

    if followup.body.is_empty() {
        return (StatusCode::BAD_REQUEST, "Empty followup body").into_response();
    }

    let next = {
        let mut expectations = state.lock();
        expectations.received_followups.push((id, followup.body));
        expectations.followup.pop_front()
    };

    match next {
        Some(canned) => respond(canned),
        None => {
            tracing::debug!("followup received with no expectations left");
            internal_error("No Followup Response Expectations")
        }
    }
}

async fn unexpected_method(method: Method) -> Response {
    internal_error(format!("Unexpected Method: {method}"))
}

async fn unexpected_path(uri: Uri) -> Response {
    internal_error(format!("Unexpected path: {}", uri.path()))
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route(NOTIFY_PATH, post(notify_handler).fallback(unexpected_method))
        .route(
            FOLLOWUP_PATH,
            post(followup_handler).fallback(unexpected_method),
        )
        .fallback(unexpected_path)
        .with_state(state)
}

/// In-process HTTP server impersonating Telex.
///
/// ```ignore
/// let server = TestServer::start().await?;
/// server.expect_notify();
///
/// let client = telex::Client::new(&server.url())?;
/// client.notify(&notification).await?;
///
/// assert!(server.wait(Duration::from_secs(1)).await);
/// server.expect_done(&PanicReporter);
/// ```
pub struct TestServer {
    addr: SocketAddr,
    state: SharedState,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Bind to an ephemeral loopback port and start serving in the background
    pub async fn start() -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = SharedState::default();
        let (shutdown, signal) = oneshot::channel::<()>();

        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = signal.await;
            });
            if let Err(e) = server.await {
                tracing::warn!(error = %e, "Test server stopped with an error");
            }
        });

        tracing::debug!(%addr, "Test server listening");

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown),
            handle: Some(handle),
        })
    }

    /// Base URL to hand to `telex::Client`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Expect one notify call, answered with a fresh id
    pub fn expect_notify(&self) {
        self.state.lock().notify.push_back(None);
    }

    /// Expect one notify call per entry; `None` answers with a fresh id
    pub fn expect_notify_with<I>(&self, responses: I)
    where
        I: IntoIterator<Item = Option<CannedResponse>>,
    {
        self.state.lock().notify.extend(responses);
    }

    /// Expect one followup call, answered with a fresh id
    pub fn expect_followup(&self) {
        self.state.lock().followup.push_back(None);
    }

    /// Expect one followup call per entry; `None` answers with a fresh id
    pub fn expect_followup_with<I>(&self, responses: I)
    where
        I: IntoIterator<Item = Option<CannedResponse>>,
    {
        self.state.lock().followup.extend(responses);
    }

    /// Number of `(notify, followup)` expectations not yet consumed
    pub fn pending(&self) -> (usize, usize) {
        let expectations = self.state.lock();
        (expectations.notify.len(), expectations.followup.len())
    }

    /// Notifications received so far, decoded from their JSON bodies.
    ///
    /// Bodies that are valid JSON but not shaped like a notification are
    /// answered as usual and left out of this list.
    pub fn received_notifications(&self) -> Vec<Notification> {
        self.state.lock().received_notifications.clone()
    }

    /// `(id, body)` of every accepted followup received so far
    pub fn received_followups(&self) -> Vec<(String, String)> {
        self.state.lock().received_followups.clone()
    }

    /// Wait until every expectation has been consumed.
    ///
    /// Polls twenty times over `timeout`; returns `false` if expectations are
    /// still pending when it elapses.
    pub async fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let interval = timeout / 20;
        loop {
            if self.pending() == (0, 0) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(interval).await;
        }
    }

    /// Report an error for each endpoint with expectations left unconsumed
    pub fn expect_done(&self, reporter: &dyn ErrorReporter) {
        let (notify, followup) = self.pending();
        if notify > 0 {
            reporter.report(format!("{notify} Notify expectations left"));
        }
        if followup > 0 {
            reporter.report(format!("{followup} Followup expectations left"));
        }
    }

    /// Stop accepting connections and wait for the server task to finish
    pub async fn close(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Test server task failed");
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
