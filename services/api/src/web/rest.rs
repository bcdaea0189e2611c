//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI document.

use crate::web::{
    auth::LoginRequest,
    dto::{
        AdminStatsDto, AlertDto, CompanyDto, CountDto, FiltersDto, InsightsDto, LoginErrorsDto,
        MentionDto, MentionListingDto, MetricsDto, PageDto, ReportDto, ReportStatsDto, ScreenDto,
        SourceSummaryDto, TeamMemberDto, UserDto,
    },
    protocol::{parse_source_kind, show_alert_event, FilterUpdate},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use media_monitor_core::{Event, View};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        get_state_handler,
        crate::web::auth::login_handler,
        crate::web::auth::logout_handler,
        navigate_handler,
        update_filters_handler,
        select_source_handler,
        source_mentions_handler,
        urgent_mentions_handler,
        show_alert_handler,
        dismiss_alert_handler,
        insights_handler,
    ),
    components(
        schemas(
            HealthResponse, NavigateRequest, ShowAlertRequest, FilterUpdate, LoginRequest, ScreenDto, LoginErrorsDto,
            UserDto, AlertDto, PageDto, MetricsDto, SourceSummaryDto, FiltersDto, MentionDto,
            MentionListingDto, ReportStatsDto, ReportDto, CountDto, InsightsDto, AdminStatsDto,
            CompanyDto, TeamMemberDto
        )
    ),
    tags(
        (name = "Media Monitor API", description = "API endpoints for the media monitoring dashboard.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
}

/// Switches the active view.
#[derive(Deserialize, ToSchema)]
pub struct NavigateRequest {
    /// `dashboard`, `reports` or `admin`.
    pub view: String,
}

/// Raises a banner that stays until it is closed or replaced.
#[derive(Deserialize, ToSchema)]
pub struct ShowAlertRequest {
    /// `info`, `success` or `error`.
    pub kind: String,
    pub message: String,
}

type HandlerResult<T> = Result<T, (StatusCode, String)>;

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Reports that the service is up.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// The current screen: the login form or the shell with the active page.
#[utoipa::path(
    get,
    path = "/state",
    responses((status = 200, description = "Current screen", body = ScreenDto))
)]
pub async fn get_state_handler(State(app_state): State<Arc<AppState>>) -> Json<ScreenDto> {
    Json(app_state.dashboard.snapshot())
}

/// Switch between the dashboard, reports and admin views.
///
/// Unknown view names leave the current view unchanged.
#[utoipa::path(
    post,
    path = "/navigate",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Screen after navigation", body = ScreenDto),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn navigate_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<NavigateRequest>,
) -> Json<ScreenDto> {
    match View::parse(&req.view) {
        Some(view) => {
            info!(view = view.as_str(), "Navigating");
            Json(app_state.dashboard.dispatch(Event::Navigate(view)))
        }
        None => {
            warn!("Ignoring navigation to unknown view '{}'", req.view);
            Json(app_state.dashboard.snapshot())
        }
    }
}

/// Change the mentions filter controls. Absent fields are left as they are.
#[utoipa::path(
    put,
    path = "/filters",
    request_body = FilterUpdate,
    responses(
        (status = 200, description = "Screen with the filtered mentions", body = ScreenDto),
        (status = 400, description = "Unknown filter value"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn update_filters_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<FilterUpdate>,
) -> HandlerResult<Json<ScreenDto>> {
    let changes = req
        .into_changes()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    Ok(Json(app_state.dashboard.change_filters(changes)))
}

/// Select a row of the sources overview. Shows a transient info banner.
#[utoipa::path(
    post,
    path = "/sources/{kind}/select",
    params(("kind" = String, Path, description = "`press`, `social` or `video`")),
    responses(
        (status = 200, description = "Screen with the info banner", body = ScreenDto),
        (status = 400, description = "Unknown source kind"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn select_source_handler(
    State(app_state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> HandlerResult<Json<ScreenDto>> {
    let kind = parse_source_kind(&kind).map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    Ok(Json(app_state.dashboard.dispatch(Event::SelectSource(kind))))
}

/// The mention feed of one source kind.
#[utoipa::path(
    get,
    path = "/sources/{kind}/mentions",
    params(("kind" = String, Path, description = "`press`, `social` or `video`")),
    responses(
        (status = 200, description = "Mentions from that source kind", body = Vec<MentionDto>),
        (status = 400, description = "Unknown source kind"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn source_mentions_handler(
    State(app_state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> HandlerResult<Json<Vec<MentionDto>>> {
    let kind = parse_source_kind(&kind).map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    Ok(Json(app_state.dashboard.mentions_from(kind)))
}

/// Every mention flagged for immediate review.
#[utoipa::path(
    get,
    path = "/mentions/urgent",
    responses(
        (status = 200, description = "Urgent mentions", body = Vec<MentionDto>),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn urgent_mentions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<Vec<MentionDto>> {
    Json(app_state.dashboard.urgent_mentions())
}

/// Show a banner. It replaces the current one and cancels its auto-dismiss.
#[utoipa::path(
    post,
    path = "/alert",
    request_body = ShowAlertRequest,
    responses(
        (status = 200, description = "Screen with the new banner", body = ScreenDto),
        (status = 400, description = "Unknown alert kind or blank message"),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn show_alert_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<ShowAlertRequest>,
) -> HandlerResult<Json<ScreenDto>> {
    let event = show_alert_event(&req.kind, req.message)
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    Ok(Json(app_state.dashboard.dispatch(event)))
}

/// Close the alert banner. Closing an absent banner is a no-op.
#[utoipa::path(
    delete,
    path = "/alert",
    responses(
        (status = 200, description = "Screen without a banner", body = ScreenDto),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn dismiss_alert_handler(State(app_state): State<Arc<AppState>>) -> Json<ScreenDto> {
    Json(app_state.dashboard.dispatch(Event::DismissAlert))
}

/// Aggregate counts over all mentions in the catalog.
#[utoipa::path(
    get,
    path = "/insights",
    responses(
        (status = 200, description = "Mention counts", body = InsightsDto),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn insights_handler(State(app_state): State<Arc<AppState>>) -> Json<InsightsDto> {
    Json(app_state.dashboard.insights())
}
