//! Socialify REST API
//!
//! HTTP API layer for Socialify, built with Axum.
//!
//! # Endpoints
//!
//! ## Users
//! - `GET /api/users` - User directory (`{ users: { id: name } }`)
//! - `GET /api/users/top` - Top users by post count
//! - `GET /api/users/:userId/posts` - Posts by a user
//!
//! ## Posts
//! - `GET /api/posts/latest` - Newest posts with authors
//! - `GET /api/posts/popular` - Posts tied for the most comments
//! - `GET /api/posts/:postId/comments` - Comments on a post
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Status with dataset counts
//!
//! Unknown ids on the detail endpoints return empty lists with `200 OK`.
//!
//! # Example
//!
//! ```rust,ignore
//! use socialify::analytics::{AnalyticsConfig, AnalyticsService};
//! use socialify::api::{serve, AppState};
//! use socialify::config::ApiConfig;
//! use socialify::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::sample()?);
//!     let analytics = Arc::new(AnalyticsService::new(dataset, AnalyticsConfig::default()));
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(analytics, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // User routes
        .route("/users", get(routes::users::list_users))
        .route("/users/top", get(routes::users::top_users))
        .route("/users/:user_id/posts", get(routes::users::user_posts))
        // Post routes
        .route("/posts/latest", get(routes::posts::latest_posts))
        .route("/posts/popular", get(routes::posts::popular_posts))
        .route("/posts/:post_id/comments", get(routes::posts::post_comments));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: any origin unless an allow-list is configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Socialify API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Socialify API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AnalyticsConfig, AnalyticsService};
    use crate::dataset::{Dataset, Seed};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app_from(seed: Seed) -> Router {
        let dataset = Arc::new(Dataset::from_seed(seed).unwrap());
        let analytics = Arc::new(AnalyticsService::new(dataset, AnalyticsConfig::default()));
        build_router(AppState::new(analytics, ApiConfig::default()))
    }

    fn create_test_app() -> Router {
        create_test_app_from(Seed::sample())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["users"], 10);
        assert_eq!(body["posts"], 19);
        assert_eq!(body["comments"], 8);
    }

    #[tokio::test]
    async fn test_list_users() {
        let (status, body) = get_json(create_test_app(), "/api/users").await;

        assert_eq!(status, StatusCode::OK);
        let users = body["users"].as_object().unwrap();
        assert_eq!(users.len(), 10);
        assert_eq!(users["1"], "John Doe");
        assert_eq!(users["10"], "Helen Moore");
    }

    #[tokio::test]
    async fn test_top_users() {
        let (status, body) = get_json(create_test_app(), "/api/users/top").await;

        assert_eq!(status, StatusCode::OK);
        let top = body["topUsers"].as_array().unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(top[0]["user"]["id"], "1");
        assert_eq!(top[0]["user"]["name"], "John Doe");
        assert_eq!(top[0]["postCount"], 10);
    }

    #[tokio::test]
    async fn test_user_posts() {
        let (status, body) = get_json(create_test_app(), "/api/users/3/posts").await;

        assert_eq!(status, StatusCode::OK);
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], 345);
        assert_eq!(posts[0]["userid"], "3");
    }

    #[tokio::test]
    async fn test_unknown_user_posts_is_empty() {
        let (status, body) = get_json(create_test_app(), "/api/users/999/posts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_latest_posts() {
        let (status, body) = get_json(create_test_app(), "/api/posts/latest").await;

        assert_eq!(status, StatusCode::OK);
        let latest = body["latestPosts"].as_array().unwrap();
        assert_eq!(latest.len(), 5);
        assert_eq!(latest[0]["post"]["id"], 952);
        assert_eq!(latest[0]["post"]["content"], "Post about zebra");
        assert_eq!(latest[0]["user"]["name"], "John Doe");
        assert!(latest[0].get("commentCount").is_none());

        let ids: Vec<u64> = latest
            .iter()
            .map(|e| e["post"]["id"].as_u64().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn test_popular_posts() {
        let (status, body) = get_json(create_test_app(), "/api/posts/popular").await;

        assert_eq!(status, StatusCode::OK);
        let popular = body["popularPosts"].as_array().unwrap();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0]["post"]["id"], 370);
        assert_eq!(popular[0]["commentCount"], 3);
        assert_eq!(popular[0]["user"]["id"], "1");
    }

    #[tokio::test]
    async fn test_popular_posts_without_comments() {
        let seed = Seed::new()
            .user("1", "John Doe")
            .post(1, "1", "a")
            .post(2, "1", "b");
        let (status, body) = get_json(create_test_app_from(seed), "/api/posts/popular").await;

        assert_eq!(status, StatusCode::OK);
        let popular = body["popularPosts"].as_array().unwrap();
        assert_eq!(popular.len(), 2);
        assert!(popular.iter().all(|e| e["commentCount"] == 0));
    }

    #[tokio::test]
    async fn test_post_comments() {
        let (status, body) = get_json(create_test_app(), "/api/posts/161/comments").await;

        assert_eq!(status, StatusCode::OK);
        let comments = body["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["postid"], 161);
    }

    #[tokio::test]
    async fn test_unknown_post_comments_is_empty() {
        for uri in ["/api/posts/999/comments", "/api/posts/abc/comments"] {
            let (status, body) = get_json(create_test_app(), uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["comments"], serde_json::json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(create_test_app(), "/api/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/users/top")
                    .header(header::ORIGIN, "http://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let dataset = Arc::new(Dataset::sample().unwrap());
        let analytics = Arc::new(AnalyticsService::new(dataset, AnalyticsConfig::default()));
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let app = build_router(AppState::new(analytics, config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/posts/latest")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }
}
