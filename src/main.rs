mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing `.env` is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,academy=debug")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "proxying /api to deployment backend"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will return 503"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state, config.site_root.clone()).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "academy listening");
    axum::serve(listener, app).await.expect("server failed");
}
