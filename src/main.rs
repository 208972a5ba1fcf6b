use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod models;
mod service;
mod store;

use service::UrlService;
use store::Store;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub service: UrlService,
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent — env vars may already be set)
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hashlink=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting hashlink on {}:{}", config.host, config.port);

    // The store is constructed exactly once here and handed to the service
    // by reference; all shortener state lives for the process lifetime.
    let store = Arc::new(Store::new());
    let state = Arc::new(AppState {
        service: UrlService::new(store),
    });

    let app = handlers::router(state);

    // ── Serve ──────────────────────────────────────────────────────────────
    let bind_addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
