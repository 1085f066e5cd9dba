//! HTTP API over the Scribo pipeline.
//!
//! [`app`] builds the router; `main.rs` binds it to a socket.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Builds the application router with tracing, CORS, compression and a request timeout.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/analyze", post(routes::analyze))
        .route("/api/seo", post(routes::seo))
        .route("/api/generate", post(routes::generate))
        .route("/api/social", post(routes::social))
        .route("/api/summarize", post(routes::summarize))
        .route("/api/voice", post(routes::voice))
        .route("/api/articles", get(routes::list_articles))
        .route(
            "/api/articles/{key}",
            get(routes::get_article).put(routes::put_article).delete(routes::delete_article),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)),
        )
}
