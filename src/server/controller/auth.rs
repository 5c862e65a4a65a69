use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::SignedCookieJar;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, tenant::SIGN_IN_ROUTE},
    server::{
        error::Error,
        model::session::user::SessionUserId,
        service::tenant::impersonation::ImpersonationStore,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs the user out by clearing their session and any impersonation
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to sign-in
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to sign-in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session, jar: SignedCookieJar) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok((
        ImpersonationStore::clear(jar),
        Redirect::temporary(SIGN_IN_ROUTE),
    ))
}
