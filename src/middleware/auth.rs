//! Auth extractor: resolves the raw `Authorization` header to a stored user.

use axum::http::header::AUTHORIZATION;
use tracing::debug;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::User;

/// Extractor: the user whose access token was presented in `Authorization`.
///
/// The header carries the token itself, with no scheme prefix.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let user = state.auth_service().authenticate(token).await.map_err(|e| {
            if matches!(e, AppError::Unauthenticated) {
                debug!("rejected request: invalid or missing access token");
            }
            e
        })?;
        Ok(AuthUser(user))
    }
}
