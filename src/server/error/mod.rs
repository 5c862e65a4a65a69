//! Error types for the Palaestra server application.
//!
//! Domain-specific error enums (authentication, configuration, tenant resolution, sport
//! selection) are aggregated into [`Error`]. All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod sport;
pub mod tenant;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, sport::SportError, tenant::TenantError,
    },
};

/// Main error type for the Palaestra server application.
///
/// Uses `thiserror`'s `#[from]` attribute so underlying errors convert via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session user validation)
/// - Tenant errors (impersonation authorization, unknown or unbound academy)
/// - Sport selection errors (unknown or duplicate sports)
/// - External library errors (database, sessions, session store)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Tenant error (impersonation authorization, academy lookup, unbound context).
    #[error(transparent)]
    TenantError(#[from] TenantError),
    /// Sport selection error (unknown or already selected sports).
    #[error(transparent)]
    SportError(#[from] SportError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid sport selection
/// - 401 Unauthorized - No academy bound to the request
/// - 403 Forbidden - Impersonation attempted without admin role
/// - 404 Not Found - Missing users or academies
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::TenantError(err) => err.into_response(),
            Self::SportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
