//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for logging in and out of the dashboard.

use crate::web::{controller::LoginOutcome, dto::ScreenDto, state::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use media_monitor_core::Event;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::ToSchema;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/login - Submit the login form
///
/// Blank fields answer 422 with per-field errors on the login screen. A
/// refused password answers 401 with a form-level error. While a session is
/// active the attempt answers 409 and changes nothing.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ScreenDto),
        (status = 401, description = "Invalid credentials", body = ScreenDto),
        (status = 409, description = "Someone is already logged in", body = ScreenDto),
        (status = 422, description = "Missing username or password", body = ScreenDto),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let outcome = state
        .dashboard
        .login(state.verifier.as_ref(), req.username, req.password)
        .await
        .map_err(|e| {
            error!("Failed to verify credentials: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Authentication error".to_string(),
            )
        })?;

    let response = match outcome {
        LoginOutcome::LoggedIn(screen) => (StatusCode::OK, Json(screen)),
        LoginOutcome::AlreadyLoggedIn(screen) => (StatusCode::CONFLICT, Json(screen)),
        LoginOutcome::Invalid(screen) => (StatusCode::UNPROCESSABLE_ENTITY, Json(screen)),
        LoginOutcome::Rejected(screen) => (StatusCode::UNAUTHORIZED, Json(screen)),
    };
    Ok(response)
}

/// POST /auth/logout - Return to the login screen
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logout successful", body = ScreenDto),
        (status = 401, description = "No active session")
    )
)]
pub async fn logout_handler(State(state): State<Arc<AppState>>) -> Json<ScreenDto> {
    let screen = state.dashboard.dispatch(Event::Logout);
    info!("User logged out");
    Json(screen)
}
