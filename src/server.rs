//! HTTP API exposing the listing pipeline.
//!
//! Routes:
//! - `GET /` - plain-text welcome message
//! - `GET /api/papers` - run one batch; JSON array of records, or `500` with a
//!   generic message when the listing page cannot be fetched

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::listing::ListingExtractor;

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the paperstats REST API!";

/// Generic message returned for any listing failure.
pub const FETCH_ERROR_MESSAGE: &str = "could not fetch paper data";

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    extractor: Arc<ListingExtractor>,
}

impl AppState {
    /// Wraps an extractor for use by the handlers.
    #[must_use]
    pub fn new(extractor: ListingExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: &'static str,
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/papers", get(papers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the API until the process is stopped.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, router(state)).await
}

async fn index() -> &'static str {
    WELCOME_MESSAGE
}

async fn papers(State(state): State<AppState>) -> Response {
    match state.extractor.extract_listing().await {
        Ok(records) => Json(records).into_response(),
        Err(err) => {
            error!(error = %err, "listing batch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: FETCH_ERROR_MESSAGE,
                }),
            )
                .into_response()
        }
    }
}
