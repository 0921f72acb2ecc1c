//! Protected content: one random quote per request.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::handlers::http::AppState;
use crate::middleware::AuthUser;

/// GET /secret. Requires `Authorization: <accessToken>`.
pub async fn secret(State(state): State<AppState>, AuthUser(user): AuthUser) -> Response {
    match state.quote_service().random_quote().await {
        Ok(quote) => {
            debug!(user_id = %user.id, quote_id = %quote.id, "served quote");
            Json(json!({ "success": true, "body": [quote] })).into_response()
        }
        Err(e) => e.into_body_response(),
    }
}
