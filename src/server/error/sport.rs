use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// Form field sport selection errors are reported against.
pub const SPORTS_FIELD: &str = "sports";

#[derive(Error, Debug)]
pub enum SportError {
    #[error("No sports were selected")]
    EmptySelection,
    #[error("Sport IDs {0:?} do not exist")]
    UnknownSports(Vec<i32>),
    #[error("Sport IDs {0:?} are already selected by the academy")]
    AlreadySelected(Vec<i32>),
}

impl IntoResponse for SportError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(FieldErrorDto {
                error: self.to_string(),
                field: Some(SPORTS_FIELD.to_string()),
            }),
        )
            .into_response()
    }
}
