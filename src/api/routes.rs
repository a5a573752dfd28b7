//! API Routes
//!
//! Configures the Axum router with all explorer endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    first_page_handler, gen_pair_handler, health_handler, key_handler, missing_key_handler,
    not_found_handler, page_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /key/:exponent` - One derived key with balance
/// - `GET /page/:page` - One page of keys with balances
/// - `GET /gen_pair` - Random key pair
/// - `GET /stats` - Balance cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/key/", get(missing_key_handler))
        .route("/key/:exponent", get(key_handler))
        .route("/page/", get(first_page_handler))
        .route("/page/:page", get(page_handler))
        .route("/gen_pair", get(gen_pair_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::ScriptedSource;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::from_config(&Config::default(), ScriptedSource::always(0));
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_key_endpoint() {
        assert_eq!(status_of("/key/1").await, StatusCode::OK);
        assert_eq!(status_of("/key/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/key/").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_page_endpoint() {
        assert_eq!(status_of("/page/2").await, StatusCode::OK);
        assert_eq!(status_of("/page/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/lottery/tickets").await, StatusCode::NOT_FOUND);
    }
}
