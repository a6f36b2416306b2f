//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site itself is stateless; the only shared pieces are the pooled HTTP
//! client and the deployment backend address used by the `/api` proxy.

use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;

/// Clone is required by Axum; `reqwest::Client` is an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl AppState {
    /// Build state with a client honoring the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &SiteConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config.api_upstream.as_deref()))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, upstream: Option<&str>) -> Self {
        Self { http, upstream: upstream.map(Arc::from) }
    }
}
