//! # attest-server
//!
//! HTTP API over a [`ChecklistStore`].
//!
//! Routes are served under both `/checklists` and `/api/checklists`:
//!
//! | Method     | Path                                  |
//! |------------|---------------------------------------|
//! | GET        | `{prefix}`                            |
//! | GET        | `{prefix}/:id`                        |
//! | PUT, POST  | `{prefix}/:id/items/:item_id/status`  |
//! | GET        | `{prefix}/:id/progress`               |
//! | GET        | `/health`                             |
//!
//! The store's `NotFound` becomes a 404 with a JSON error envelope; malformed
//! ids, malformed bodies, and a missing `status` become 400s.

mod cors;
mod error;
mod handlers;

pub use error::{ApiError, ServerError};

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use attest_config::ServerConfig;
use attest_store::ChecklistStore;
use axum::Router;
use axum::routing::{get, put};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Path prefixes the checklist routes are mounted under.
pub const ROUTE_PREFIXES: [&str; 2] = ["/checklists", "/api/checklists"];

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ChecklistStore>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<ChecklistStore>) -> Self {
        Self {
            store,
            started_at: Utc::now(),
        }
    }
}

/// Build the full router: checklist routes under every prefix, `/health`,
/// CORS, and request tracing.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] if a configured CORS origin is not a
/// valid header value.
pub fn router(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    let mut app = Router::new().route("/health", get(handlers::health));
    for prefix in ROUTE_PREFIXES {
        app = app.nest(prefix, checklist_routes());
    }

    Ok(app
        .layer(cors::layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn checklist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_checklists))
        .route("/:id", get(handlers::get_checklist))
        .route(
            "/:id/items/:item_id/status",
            put(handlers::update_item_status).post(handlers::update_item_status),
        )
        .route("/:id/progress", get(handlers::get_progress))
}

/// A bound, not yet running, checklist server.
pub struct ChecklistServer {
    listener: TcpListener,
    app: Router,
}

impl ChecklistServer {
    /// Bind the configured address and build the router over `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] if the address is invalid, cannot be bound, or
    /// the CORS configuration is invalid.
    pub async fn bind(config: &ServerConfig, store: Arc<ChecklistStore>) -> Result<Self, ServerError> {
        let addr = config.socket_addr()?;
        let app = router(AppState::new(store), config)?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self { listener, app })
    }

    /// The address actually bound (resolves port `0`).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the socket cannot report its address.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the accept loop fails.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        tracing::info!(%addr, "checklist service listening");
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!(%addr, "checklist service stopped");
        Ok(())
    }

    /// Serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run_until`].
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(ctrl_c()).await
    }
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c; shutting down");
        return;
    }
    tracing::info!("received ctrl-c; shutting down");
}
