//! The HTTP host: axum router with the CORS policy installed ahead of the
//! course-management routes.

pub mod middleware;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::policy::CorsPolicy;
use middleware::cors_middleware;

pub type SharedCors = Arc<CorsPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
}

impl AppState {
    pub fn new(cors: CorsPolicy) -> Self {
        Self {
            cors: Arc::new(cors),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Mounts `api` next to the built-in routes and wraps everything in the
/// request pipeline. Layers, outermost first:
///
/// 1. HTTP tracing
/// 2. CORS
/// 3. panic translation to a JSON 500
///
/// Authentication for `api` belongs inside `api` itself so that it runs after
/// CORS has answered preflights.
pub fn build_router_with(state: AppState, api: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/errors/{code}", get(routes::error_page))
        .merge(api)
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.cors_policy()?);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Byway API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
