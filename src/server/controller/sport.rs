use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::SignedCookieJar;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto},
        sport::{SportDto, SportSelectionDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{sport::SportService, tenant::TenantService},
    },
};

pub static SPORT_TAG: &str = "sport";

/// Get the sports selected by the bound academy
#[utoipa::path(
    get,
    path = "/api/academy/sports",
    tag = SPORT_TAG,
    responses(
        (status = 200, description = "Selected sports", body = Vec<SportDto>),
        (status = 401, description = "No academy bound to the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sports(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, Error> {
    let tenant_service = TenantService::new(&state.db);
    let sport_service = SportService::new(&state.db);

    let (jar, academy_id) = tenant_service.require_academy(&session, jar).await?;
    let sports = sport_service.get_selected(academy_id).await?;

    Ok((jar, Json(sports)))
}

/// Get the sports the bound academy has not selected yet
#[utoipa::path(
    get,
    path = "/api/academy/sports/available",
    tag = SPORT_TAG,
    responses(
        (status = 200, description = "Sports available to select", body = Vec<SportDto>),
        (status = 401, description = "No academy bound to the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_sports(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
) -> Result<impl IntoResponse, Error> {
    let tenant_service = TenantService::new(&state.db);
    let sport_service = SportService::new(&state.db);

    let (jar, academy_id) = tenant_service.require_academy(&session, jar).await?;
    let sports = sport_service.get_available(academy_id).await?;

    Ok((jar, Json(sports)))
}

/// Add sports to the bound academy's selection
///
/// Either every sport is added or none is.
#[utoipa::path(
    post,
    path = "/api/academy/sports",
    tag = SPORT_TAG,
    request_body = SportSelectionDto,
    responses(
        (status = 204, description = "Sports added"),
        (status = 400, description = "Unknown or already selected sports", body = FieldErrorDto),
        (status = 401, description = "No academy bound to the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_sports(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
    Json(payload): Json<SportSelectionDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant_service = TenantService::new(&state.db);
    let sport_service = SportService::new(&state.db);

    let (jar, academy_id) = tenant_service.require_academy(&session, jar).await?;
    sport_service.add(academy_id, &payload.ids).await?;

    Ok((jar, StatusCode::NO_CONTENT))
}

/// Remove sports from the bound academy's selection
#[utoipa::path(
    delete,
    path = "/api/academy/sports",
    tag = SPORT_TAG,
    request_body = SportSelectionDto,
    responses(
        (status = 204, description = "Sports removed"),
        (status = 400, description = "No sports provided", body = FieldErrorDto),
        (status = 401, description = "No academy bound to the session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_sports(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
    Json(payload): Json<SportSelectionDto>,
) -> Result<impl IntoResponse, Error> {
    let tenant_service = TenantService::new(&state.db);
    let sport_service = SportService::new(&state.db);

    let (jar, academy_id) = tenant_service.require_academy(&session, jar).await?;
    sport_service.remove(academy_id, &payload.ids).await?;

    Ok((jar, StatusCode::NO_CONTENT))
}
