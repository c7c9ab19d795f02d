//! In-process stand-in for the Cablecast API
//!
//! Serves canned responses on 127.0.0.1 so the real reqwest client is
//! exercised end to end.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Canned response for one resource
#[derive(Debug, Clone)]
pub enum StubResponse {
    Json(Value),
    /// Body that is not JSON at all
    Raw(String),
    Status(u16),
}

/// Canned responses keyed by resource id
#[derive(Debug, Clone, Default)]
pub struct StubRoutes {
    pub searches: HashMap<String, StubResponse>,
    pub shows: HashMap<String, StubResponse>,
    pub vods: HashMap<String, StubResponse>,
}

impl StubRoutes {
    pub fn search(mut self, id: u64, response: StubResponse) -> Self {
        self.searches.insert(id.to_string(), response);
        self
    }

    pub fn show(mut self, id: u64, response: StubResponse) -> Self {
        self.shows.insert(id.to_string(), response);
        self
    }

    pub fn vod(mut self, id: u64, response: StubResponse) -> Self {
        self.vods.insert(id.to_string(), response);
        self
    }
}

struct StubState {
    routes: StubRoutes,
    hits: AtomicUsize,
}

/// Running stub server; stopped on drop
pub struct StubCablecast {
    pub base_url: String,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl StubCablecast {
    pub async fn start(routes: StubRoutes) -> Self {
        let state = Arc::new(StubState {
            routes,
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/CablecastAPI/v1/shows/search/advanced/:id", get(search))
            .route("/CablecastAPI/v1/shows/:id", get(show))
            .route("/CablecastAPI/v1/vods/:id", get(vod))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/CablecastAPI/v1", addr),
            state,
            handle,
        }
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubCablecast {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/CablecastAPI/v1", addr)
}

fn respond(state: &StubState, response: Option<&StubResponse>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match response {
        Some(StubResponse::Json(value)) => Json(value.clone()).into_response(),
        Some(StubResponse::Raw(body)) => body.clone().into_response(),
        Some(StubResponse::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn search(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    respond(&state, state.routes.searches.get(&id))
}

async fn show(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    respond(&state, state.routes.shows.get(&id))
}

async fn vod(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    respond(&state, state.routes.vods.get(&id))
}
