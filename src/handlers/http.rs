//! HTTP handlers: shared state, route listing, and health.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::json;

use std::sync::Arc;

use crate::repositories::{IdentityStore, QuoteStore};
use crate::services::{AuthService, QuoteService};

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub quote_service: QuoteService,
}

impl AppState {
    pub fn new(auth_service: AuthService, quote_service: QuoteService) -> Self {
        Self {
            auth_service,
            quote_service,
        }
    }

    /// Wire both services to one store that holds users and quotes.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: IdentityStore + QuoteStore + 'static,
    {
        Self::new(AuthService::new(store.clone()), QuoteService::new(store))
    }

    pub fn auth_service(&self) -> &AuthService {
        &self.auth_service
    }
    pub fn quote_service(&self) -> &QuoteService {
        &self.quote_service
    }
}

/// One entry of the `GET /` route listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub methods: &'static [&'static str],
}

/// GET /: every registered route with its methods.
pub async fn list_routes() -> Json<&'static [RouteInfo]> {
    Json(crate::ROUTES)
}

/// GET /health: liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "quotegate" })),
    )
}
