//! Resolved tenant context as consumed by page and layout shells.

use serde::{Deserialize, Serialize};

/// Sign-in route for the academy console.
pub const SIGN_IN_ROUTE: &str = "/sign-in";
/// Sign-in route for the admin back office.
pub const ADMIN_SIGN_IN_ROUTE: &str = "/admin-sign-in";

/// Area of the application a request is made for; decides the redirect target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TenantArea {
    #[default]
    Academy,
    Admin,
}

impl TenantArea {
    pub fn sign_in_route(self) -> &'static str {
        match self {
            Self::Academy => SIGN_IN_ROUTE,
            Self::Admin => ADMIN_SIGN_IN_ROUTE,
        }
    }
}

/// Review status of an academy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AcademyStatusDto {
    Pending,
    Approved,
    Rejected,
}

/// Render-ready result of resolving the current session against the tenant directory.
///
/// Recomputed on every protected navigation and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TenantContext {
    /// Whether the page must redirect instead of rendering
    pub should_redirect: bool,
    /// Redirect target when `should_redirect` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    /// Academy the request is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academy_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_onboarded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AcademyStatusDto>,
    pub is_admin: bool,
    /// Display name of the impersonated academy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academy_name: Option<String>,
    /// Session no longer maps to any tenant and has been signed out
    #[serde(default)]
    pub force_sign_out: bool,
}

impl TenantContext {
    /// Context redirecting to the sign-in route of `area`.
    pub fn redirect(area: TenantArea) -> Self {
        Self {
            should_redirect: true,
            redirect_to: Some(area.sign_in_route().to_string()),
            ..Default::default()
        }
    }

    /// Whether a tenant-scoped page may render against an academy.
    pub fn bound_academy(&self) -> Option<i32> {
        if self.should_redirect {
            None
        } else {
            self.academy_id
        }
    }
}

/// Academy an admin asks to act as
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ImpersonationDto {
    pub academy_id: i32,
}
