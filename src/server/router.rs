//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/logout` - Sign out and clear any impersonation
/// - `GET /api/tenant/context` - Resolve the tenant context of the session
/// - `POST /api/admin/impersonation` - Start acting as an academy
/// - `DELETE /api/admin/impersonation` - Stop acting as an academy
/// - `GET /api/academy/sports` - Sports selected by the bound academy
/// - `POST /api/academy/sports` - Add sports to the selection
/// - `DELETE /api/academy/sports` - Remove sports from the selection
/// - `GET /api/academy/sports/available` - Sports not selected yet
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Palaestra", description = "Palaestra API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::tenant::TENANT_TAG, description = "Tenant context API routes"),
        (name = controller::tenant::ADMIN_TAG, description = "Admin impersonation API routes"),
        (name = controller::sport::SPORT_TAG, description = "Academy sport selection API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::tenant::get_tenant_context))
        .routes(routes!(
            controller::tenant::start_impersonation,
            controller::tenant::stop_impersonation
        ))
        .routes(routes!(
            controller::sport::get_sports,
            controller::sport::add_sports,
            controller::sport::remove_sports
        ))
        .routes(routes!(controller::sport::get_available_sports))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
