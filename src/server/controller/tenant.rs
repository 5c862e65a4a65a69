use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        tenant::{ImpersonationDto, TenantArea, TenantContext},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            tenant::{impersonation::ImpersonationStore, TenantService},
            user::UserService,
        },
    },
};

pub static TENANT_TAG: &str = "tenant";
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
pub struct AreaParams {
    /// Area the context is resolved for, `academy` when omitted
    #[serde(default)]
    pub area: TenantArea,
}

/// Resolve the tenant context of the current session
///
/// Always succeeds: sessions that cannot be bound to a tenant receive a context redirecting to
/// the sign-in route of the requested area.
#[utoipa::path(
    get,
    path = "/api/tenant/context",
    tag = TENANT_TAG,
    params(AreaParams),
    responses(
        (status = 200, description = "Resolved tenant context", body = TenantContext),
    ),
)]
pub async fn get_tenant_context(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
    Query(params): Query<AreaParams>,
) -> impl IntoResponse {
    let tenant_service = TenantService::new(&state.db);

    let (jar, context) = tenant_service.resolve(&session, jar, params.area).await;

    (jar, Json(context))
}

/// Act as another academy for all following requests
///
/// # Responses
/// - 204 (No Content): Impersonation cookie set
/// - 403 (Forbidden): Session is not an admin
/// - 404 (Not Found): Academy does not exist
#[utoipa::path(
    post,
    path = "/api/admin/impersonation",
    tag = ADMIN_TAG,
    request_body = ImpersonationDto,
    responses(
        (status = 204, description = "Impersonation started"),
        (status = 403, description = "Session is not an admin", body = ErrorDto),
        (status = 404, description = "Academy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_impersonation(
    State(state): State<AppState>,
    session: Session,
    jar: SignedCookieJar,
    Json(payload): Json<ImpersonationDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);
    let impersonation_store = ImpersonationStore::new(&state.db);

    let acting = match user_service.get_session_user(&session).await {
        Ok(acting) => acting,
        // Session of a deleted user has been cleared, treat as anonymous
        Err(Error::AuthError(_)) => None,
        Err(err) => return Err(err),
    };

    let jar = impersonation_store
        .set(jar, acting.as_ref(), payload.academy_id)
        .await?;

    Ok((jar, StatusCode::NO_CONTENT))
}

/// Stop acting as another academy
///
/// Safe to call when no impersonation is active.
#[utoipa::path(
    delete,
    path = "/api/admin/impersonation",
    tag = ADMIN_TAG,
    responses(
        (status = 204, description = "Impersonation cleared"),
    ),
)]
pub async fn stop_impersonation(jar: SignedCookieJar) -> impl IntoResponse {
    (ImpersonationStore::clear(jar), StatusCode::NO_CONTENT)
}
