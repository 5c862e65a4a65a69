//! HTTP controller endpoints for the Palaestra web API.
//!
//! Axum handlers for tenant context resolution, admin impersonation, the bound academy's sport
//! selection and sign-out. Controllers resolve the request's tenant through the service layer
//! and return JSON responses documented with utoipa.

pub mod auth;
pub mod sport;
pub mod tenant;
