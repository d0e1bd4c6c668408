//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new().route("/astro", get(handlers::get_astro));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::almanac::UsnoClient;
    use crate::config::ServiceConfig;
    use crate::ephemeris::AnalyticEphemeris;

    fn state() -> AppState {
        let config = ServiceConfig::default();
        let client = UsnoClient::new("http://127.0.0.1:9", config.almanac.timeout()).unwrap();
        AppState::new(config, Arc::new(client), Arc::new(AnalyticEphemeris::new()))
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = create_router(state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_future_mode_needs_no_almanac() {
        let app = create_router(state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/astro?mode=future&days=5&date=2026-01-16")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_router(state());
        let response = app
            .oneshot(Request::builder().uri("/api/ephemeris").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
