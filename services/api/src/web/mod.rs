pub mod alert_timer;
pub mod auth;
pub mod controller;
pub mod dto;
pub mod middleware;
pub mod protocol;
pub mod rest;
pub mod state;
pub mod ws_handler;

use crate::{config::ConfigError, error::ApiError};
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Re-export the main handlers to make them easily accessible
// to the binary that builds the web server.
pub use middleware::require_login;
pub use rest::ApiDoc;
pub use state::AppState;
pub use ws_handler::ws_handler;

/// Builds the complete application: API routes, CORS and the Swagger UI.
pub fn app_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let origin = app_state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|_| {
            ConfigError::InvalidValue(
                "ALLOWED_ORIGIN".to_string(),
                app_state.config.allowed_origin.clone(),
            )
        })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // Public routes (no login required)
    let public_routes = Router::new()
        .route("/health", get(rest::health_handler))
        .route("/state", get(rest::get_state_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/ws", get(ws_handler));

    // Protected routes (login required)
    let protected_routes = Router::new()
        .route("/auth/logout", post(auth::logout_handler))
        .route("/navigate", post(rest::navigate_handler))
        .route("/filters", put(rest::update_filters_handler))
        .route("/sources/{kind}/select", post(rest::select_source_handler))
        .route("/sources/{kind}/mentions", get(rest::source_mentions_handler))
        .route("/mentions/urgent", get(rest::urgent_mentions_handler))
        .route(
            "/alert",
            post(rest::show_alert_handler).delete(rest::dismiss_alert_handler),
        )
        .route("/insights", get(rest::insights_handler))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_login,
        ));

    let api_router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())))
}
