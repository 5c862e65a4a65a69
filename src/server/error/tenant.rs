use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TenantError {
    #[error("Impersonation requires an authenticated admin session")]
    Unauthorized,
    #[error("Academy ID {0:?} does not exist")]
    AcademyNotFound(i32),
    #[error("Request is not bound to an academy")]
    NoAcademyBound,
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::Unauthorized => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            Self::AcademyNotFound(_) => (StatusCode::NOT_FOUND, "Academy not found".to_string()),
            Self::NoAcademyBound => (
                StatusCode::UNAUTHORIZED,
                "Sign in to an academy to continue".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
