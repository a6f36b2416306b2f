//! Reverse proxy for the deployment backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever calls same-origin `/api/*`. This handler forwards
//! method, path, query, body, and end-to-end headers to `API_UPSTREAM_URL`
//! and relays the answer unchanged. Proxy-side failures use the same
//! `{ error, logs }` JSON shape as backend failures so the client reports
//! them the same way.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Headers scoped to a single connection (RFC 9110 §7.6.1) plus the ones the
/// proxy recomputes itself.
const STRIPPED_HEADERS: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("deployment backend is not configured")]
    NotConfigured,
    #[error("request body rejected: {0}")]
    Body(String),
    #[error("deployment backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string(), "logs": [] });
        (status, Json(body)).into_response()
    }
}

/// `ANY /api/{*path}`: forward to the deployment backend.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let Some(base) = state.upstream.as_deref() else {
        tracing::warn!(uri = %request.uri(), "api request with no upstream configured");
        return Err(ProxyError::NotConfigured);
    };

    let (parts, body) = request.into_parts();
    let url = upstream_url(base, &parts.uri);
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(filter_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .inspect_err(|e| tracing::error!(error = %e, %url, "upstream request failed"))?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());
    let body = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, "proxied api request");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Join the upstream base with the incoming path and query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Copy of `headers` without hop-by-hop and recomputed headers.
pub fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let mut connection_scoped: Vec<String> = Vec::new();
    if let Some(value) = headers.get("connection").and_then(|v| v.to_str().ok()) {
        connection_scoped.extend(value.split(',').map(|name| name.trim().to_ascii_lowercase()));
    }

    headers
        .iter()
        .filter(|(name, _)| {
            let name = name.as_str();
            !STRIPPED_HEADERS.contains(&name) && !connection_scoped.iter().any(|scoped| scoped == name)
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
