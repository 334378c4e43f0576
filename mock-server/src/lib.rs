//! Canned-response stand-in for the content API.
//!
//! Serves a fixed table of `StubRoute`s matched on method and path (the
//! query string is ignored) and records every request it receives so tests
//! can inspect what a client actually sent. Recorded requests are served
//! back from `GET /__requests`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};

/// One canned response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubRoute {
    pub method: String,
    pub path: String,
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: String,
}

fn default_status() -> u16 {
    200
}

impl StubRoute {
    pub fn new(method: &str, path: &str, status: u16, body: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        self.method.eq_ignore_ascii_case(method.as_str()) && self.path == path
    }
}

/// A request as the server saw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub if_modified_since: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct AppState {
    routes: Arc<Vec<StubRoute>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

pub fn app(routes: Vec<StubRoute>) -> Router {
    let state = AppState {
        routes: Arc::new(routes),
        requests: Arc::new(RwLock::new(Vec::new())),
    };
    Router::new()
        .route("/__requests", get(list_requests))
        .fallback(serve_stub)
        .with_state(state)
}

pub async fn run(listener: TcpListener, routes: Vec<StubRoute>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(routes)).await
}

/// Read a JSON array of routes from disk.
pub fn load_routes(path: &str) -> Result<Vec<StubRoute>, std::io::Error> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(std::io::Error::from)
}

async fn list_requests(State(state): State<AppState>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests.read().await.clone())
}

async fn serve_stub(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.write().await.push(RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        if_modified_since: header("if-modified-since"),
        body,
    });

    let Some(route) = state.routes.iter().find(|r| r.matches(&method, uri.path())) else {
        debug!(%method, path = uri.path(), "no stub route");
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "errors": { "status": "404" } })),
        )
            .into_response();
    };
    info!(%method, path = uri.path(), status = route.status, "serving stub");
    stub_response(route)
}

fn stub_response(route: &StubRoute) -> Response {
    let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, Body::from(route.body.clone())).into_response();
    for (name, value) in &route.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => warn!(header = %name, "skipping invalid stub header"),
        }
    }
    response
}
