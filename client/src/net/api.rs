//! REST helpers for the deployment backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages turn failures into a status
//! message plus a toast; nothing here panics. Response bodies are decoded by
//! pure helpers so status/body interpretation is testable off-browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::DeployFailure;
use super::types::{Ack, Commit, DeploySuccess, DeploymentNote, DeploymentRecord};
#[cfg(feature = "hydrate")]
use super::types::{AdminLastDeployment, DeployRequest, SaveNotesRequest};

pub const ADMIN_LAST_DEPLOYMENT: &str = "/api/admin/last-deployment";
pub const ADMIN_DEPLOY: &str = "/api/admin/deploy";
pub const DEPLOYMENT_LAST: &str = "/api/deployment/last";
pub const DEPLOYMENT_COMMITS: &str = "/api/deployment/commits";
pub const DEPLOYMENT_NOTES: &str = "/api/deployment/notes";
pub const DEPLOYMENT_DEPLOY: &str = "/api/deployment/deploy";

/// Failure talking to the deployment backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The backend answered with an error.
    #[error("{error}")]
    Status { status: u16, error: String, logs: Vec<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-provided log lines, if the failure carried any.
    pub fn logs(&self) -> &[String] {
        match self {
            Self::Status { logs, .. } => logs,
            _ => &[],
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a JSON body, mapping non-2xx statuses to [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error for a non-2xx response, preferring the backend's own message.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<DeployFailure>(body) {
        Ok(failure) => ApiError::Status { status, error: failure.error, logs: failure.logs },
        Err(_) => ApiError::Status { status, error: request_failed_message(status), logs: Vec::new() },
    }
}

/// Interpret a deploy response.
///
/// A 2xx body carrying `error` is still a failure; the backend reports some
/// build failures that way.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_deploy_response(status: u16, body: &str) -> Result<DeploySuccess, ApiError> {
    if is_success(status) {
        if let Ok(failure) = serde_json::from_str::<DeployFailure>(body) {
            return Err(ApiError::Status { status, error: failure.error, logs: failure.logs });
        }
    }
    decode_json(status, body)
}

/// Interpret a write acknowledgement. An empty 2xx body counts as success.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_ack(status: u16, body: &str) -> Result<Ack, ApiError> {
    if is_success(status) && body.trim().is_empty() {
        return Ok(Ack::default());
    }
    let ack: Ack = decode_json(status, body)?;
    match (&ack.error, ack.success) {
        (Some(error), _) => Err(ApiError::Status { status, error: error.clone(), logs: Vec::new() }),
        (None, Some(false)) => Err(ApiError::Status {
            status,
            error: ack.message.clone().unwrap_or_else(|| "request rejected".to_owned()),
            logs: Vec::new(),
        }),
        _ => Ok(ack),
    }
}

#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let (status, body) = read_response(resp).await?;
    decode_json(status, &body)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, payload: &B) -> Result<(u16, String), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

/// Fetch the admin view of the last deployment time.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_admin_last_deployment() -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: AdminLastDeployment = get_json(ADMIN_LAST_DEPLOYMENT).await?;
        Ok(body.last_deployment)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Trigger a deployment via `POST /api/admin/deploy`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure or when the backend reports an
/// error; backend logs travel inside [`ApiError::Status`].
pub async fn trigger_admin_deploy() -> Result<DeploySuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ADMIN_DEPLOY)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, body) = read_response(resp).await?;
        interpret_deploy_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the last deployment record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_last_deployment() -> Result<DeploymentRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(DEPLOYMENT_LAST).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch recent commits, newest first as ordered by the backend.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_commits() -> Result<Vec<Commit>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(DEPLOYMENT_COMMITS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the deployment notes history.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_notes() -> Result<Vec<DeploymentNote>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(DEPLOYMENT_NOTES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Deploy with release notes via `POST /api/deployment/deploy`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure or when the backend reports an
/// error.
pub async fn deploy_with_notes(notes: &str) -> Result<DeploySuccess, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = DeployRequest { notes: notes.to_owned() };
        let (status, body) = post_json(DEPLOYMENT_DEPLOY, &payload).await?;
        interpret_deploy_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notes;
        Err(ApiError::Unavailable)
    }
}

/// Persist release notes via `POST /api/deployment/notes`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure or when the write is rejected.
pub async fn save_notes(notes: &str, timestamp: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SaveNotesRequest { notes: notes.to_owned(), timestamp: timestamp.to_owned() };
        let (status, body) = post_json(DEPLOYMENT_NOTES, &payload).await?;
        interpret_ack(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notes, timestamp);
        Err(ApiError::Unavailable)
    }
}
