//! HTTP API over the dramlog store.
//!
//! Read endpoints serve the bottle listings, the tasting browse, and
//! the reviewer roster. The one write endpoint, consumer review
//! intake, sits behind a shared-secret header.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

use axum::Router;
use dramlog_store::{Config, Store};

pub mod api;
pub mod error;

pub use error::ApiError;

/// Application state shared across HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store over the configured data root. Cloned into blocking
    /// tasks per request; all reads are stateless walks.
    pub store: Store,
    /// Shared secret for the admin endpoint. `None` disables writes.
    pub admin_token: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, admin_token: Option<String>) -> Self {
        Self { store, admin_token }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/health", get(api::health::health_check))
        .route("/api/bottles", get(api::bottles::list_bottles))
        .route("/api/bottles/:slug", get(api::bottles::bottle_detail))
        .route("/api/tastings", get(api::tastings::list_tastings))
        .route("/api/reviewers", get(api::reviewers::list_reviewers))
        .route(
            "/api/reviewers/:id/tastings",
            get(api::reviewers::reviewer_tastings),
        )
        .route(
            "/api/admin/consumer-reviews",
            post(api::admin::create_consumer_review),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped. Shared by the server
/// binary and the CLI `serve` subcommand.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = Store::open(&config.data_root);
    let state = AppState::new(store, config.admin_token.clone());
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "dramlog listening on {} (data root {})",
        config.bind_addr,
        config.data_root.display()
    );
    axum::serve(listener, router).await?;
    Ok(())
}
