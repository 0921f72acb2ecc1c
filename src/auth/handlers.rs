//! Auth HTTP handlers: register, login.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::http::AppState;
use crate::models::Account;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, message = "password is required")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn success(status: StatusCode, account: Account) -> Response {
    (status, Json(json!({ "success": true, "response": account }))).into_response()
}

/// POST /register. Every failure, including store errors, is reported as 400.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    match register_account(&state, body).await {
        Ok(account) => success(StatusCode::CREATED, account),
        Err(e) => e.into_response_with_status(StatusCode::BAD_REQUEST),
    }
}

async fn register_account(
    state: &AppState,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<Account> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    body.validate().map_err(|e| AppError::Validation(e.to_string()))?;
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();
    state.auth_service().register(&username, &password).await
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = body.map_err(|_| AppError::InvalidCredentials)?;
    let account = state
        .auth_service()
        .login(&body.username, &body.password)
        .await?;
    Ok(success(StatusCode::OK, account))
}
