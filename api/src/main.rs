//! Warbot Feed API Server
//!
//! Records match, ringer and recruitment announcements relayed by warbot and
//! serves them as an auto-refreshing listing.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryLogRepository;
use app::{FeedService, IngestService};
use config::Config;
use feed::{PageOptions, RecordRenderer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<InMemoryLogRepository>>,
    pub ingest_service: Arc<IngestService<InMemoryLogRepository>>,
    pub page: PageOptions,
}

impl AppState {
    /// Wire services around a fresh in-memory log
    pub fn from_config(config: &Config) -> Self {
        let log_repo = Arc::new(InMemoryLogRepository::new(config.retain_records));

        let feed_service = Arc::new(FeedService::new(
            log_repo.clone(),
            RecordRenderer::new(config.link_mode),
            config.feed_limit,
        ));

        let ingest_service = Arc::new(IngestService::new(
            log_repo.clone(),
            config.announcer_prefix.clone(),
        ));

        Self {
            feed_service,
            ingest_service,
            page: PageOptions {
                title: config.page_title.clone(),
                refresh_secs: config.refresh_secs,
            },
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn build_router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    // Rate limiting config for the relay endpoint, keyed by peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_millisecond(config.ingest_replenish_ms())
            .burst_size(config.ingest_burst)
            .finish()
            .context("Invalid ingest rate limit config")?,
    );

    let ingest_routes = Router::new()
        .route("/announcements", post(handlers::post_announcement))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let app = Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::get_feed))
        .route("/feed", get(handlers::get_feed))
        .merge(ingest_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,warfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Warbot feed...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        "Feed shows the newest {} of up to {} retained announcements",
        config.feed_limit,
        config.retain_records
    );

    let state = AppState::from_config(&config);
    let app = build_router(state, &config)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
