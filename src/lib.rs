//! Token-authenticated quote API.
//!
//! Users register and log in with a username and password, receive an opaque
//! access token, and present it in `Authorization` to read a random quote.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::{AppState, RouteInfo};
pub use services::{AuthService, QuoteService};

use axum::routing::{get, post};
use handlers::http;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Every route served by [`create_app`], as reported by `GET /`.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo { path: "/", methods: &["GET"] },
    RouteInfo { path: "/health", methods: &["GET"] },
    RouteInfo { path: "/register", methods: &["POST"] },
    RouteInfo { path: "/login", methods: &["POST"] },
    RouteInfo { path: "/secret", methods: &["GET"] },
];

/// Build the API router with CORS and request tracing. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(http::list_routes))
        .route("/health", get(http::health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/secret", get(handlers::secret))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
