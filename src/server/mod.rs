//! HTTP surface for the trip planner.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `error` - `ApiError`, the JSON error body every failing route returns
//! - `pages` - static HTML pages

mod error;
mod handlers;
mod pages;

pub use error::ApiError;

use std::{any::Any, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{
    config::PlannerConfig,
    core::TripPlanner,
    error::{PlannerError, Result},
};

// =============================================================================
// Application State
// =============================================================================

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub planner: TripPlanner,
    /// Redacted credential echoed by `/test_api`.
    pub api_key_preview: String,
}

impl AppState {
    pub fn new(planner: TripPlanner, config: &PlannerConfig) -> Self {
        Self {
            planner,
            api_key_preview: config.api_key_preview(),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/test", get(handlers::test_page))
        .route("/test_api", get(handlers::test_api))
        .route("/get_recommendations", post(handlers::get_recommendations))
        .route("/download_plan", post(handlers::download_plan))
        .fallback(handlers::not_found)
        .with_state(state)
        // Finished plans are posted back whole.
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic"
    };
    error!("handler panicked: {}", detail);

    ApiError::internal_server_error().into_response()
}

// =============================================================================
// Server Entry Point
// =============================================================================

pub async fn serve(state: Arc<AppState>, bind: &str) -> Result<()> {
    let listener = bind_listener(bind).await?;
    let app = build_router(state);
    info!("trip planner listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("trip planner shut down");
    Ok(())
}

/// Bind `host:port`; host names are resolved.
pub async fn bind_listener(bind: &str) -> Result<TcpListener> {
    TcpListener::bind(bind).await.map_err(|err| {
        PlannerError::Config(format!("cannot bind `{bind}`: {err}"))
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_listener_resolves_host_names() {
        let listener = bind_listener("localhost:0").await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_reports_bad_address() {
        let err = bind_listener("not an address").await.unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
        assert!(err.to_string().contains("not an address"));
    }
}
