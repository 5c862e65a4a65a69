//! Pure tenant context resolution.
//!
//! Resolution is an ordered table of rules over the gathered inputs; the first rule that
//! applies produces the context. Gathering the inputs (session, impersonation cookie, academy
//! records) is done by [`TenantService`](super::TenantService).

use crate::{
    model::tenant::{TenantArea, TenantContext, ADMIN_SIGN_IN_ROUTE, SIGN_IN_ROUTE},
    server::model::tenant::{AcademyRecord, SessionUser},
};

/// Academy an admin asked to act as, together with its current record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Impersonation {
    pub academy_id: i32,
    /// `None` when the academy no longer exists
    pub target: Option<AcademyRecord>,
}

/// Everything resolution depends on, read fresh for each request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionInput {
    pub session: Option<SessionUser>,
    /// Only ever present for admin sessions
    pub impersonation: Option<Impersonation>,
    /// Academy owned by the session user
    pub own_academy: Option<AcademyRecord>,
}

/// State a request's tenant binding is in, named after the rule that matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenantState {
    Unauthenticated,
    AcademicNoRecord,
    AdminAreaForbidden,
    AdminImpersonating,
    AdminOwnAcademy,
    AdminNoTarget,
    AcademicResolved,
}

struct Rule {
    state: TenantState,
    apply: fn(&ResolutionInput, TenantArea) -> Option<TenantContext>,
}

const RULES: &[Rule] = &[
    Rule {
        state: TenantState::Unauthenticated,
        apply: unauthenticated,
    },
    Rule {
        state: TenantState::AcademicNoRecord,
        apply: academic_no_record,
    },
    Rule {
        state: TenantState::AdminAreaForbidden,
        apply: admin_area_forbidden,
    },
    Rule {
        state: TenantState::AdminImpersonating,
        apply: admin_impersonating,
    },
    Rule {
        state: TenantState::AdminOwnAcademy,
        apply: admin_own_academy,
    },
    Rule {
        state: TenantState::AdminNoTarget,
        apply: admin_no_target,
    },
    Rule {
        state: TenantState::AcademicResolved,
        apply: academic_resolved,
    },
];

/// Resolves the tenant context of a request for the given area.
pub fn resolve(input: &ResolutionInput, area: TenantArea) -> TenantContext {
    evaluate(input, area).1
}

/// State of the first rule matching the input.
pub fn classify(input: &ResolutionInput, area: TenantArea) -> TenantState {
    evaluate(input, area).0
}

fn evaluate(input: &ResolutionInput, area: TenantArea) -> (TenantState, TenantContext) {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(input, area).map(|context| (rule.state, context)))
        // Unauthenticated and the academic and admin rules cover every input
        .unwrap_or_else(|| (TenantState::Unauthenticated, TenantContext::redirect(area)))
}

/// Human readable academy name derived from its slug, e.g. `north-fc_youth` -> `North Fc Youth`.
pub fn display_name(slug: &str) -> String {
    slug.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bound_to(academy: &AcademyRecord, is_admin: bool) -> TenantContext {
    TenantContext {
        should_redirect: false,
        academy_id: Some(academy.id),
        is_onboarded: Some(academy.onboarded),
        status: Some(academy.status.into()),
        is_admin,
        ..Default::default()
    }
}

fn admin(input: &ResolutionInput) -> bool {
    input.session.is_some_and(|user| user.is_admin())
}

fn academic(input: &ResolutionInput) -> bool {
    input.session.is_some_and(|user| !user.is_admin())
}

fn unauthenticated(input: &ResolutionInput, area: TenantArea) -> Option<TenantContext> {
    input
        .session
        .is_none()
        .then(|| TenantContext::redirect(area))
}

fn admin_area_forbidden(input: &ResolutionInput, area: TenantArea) -> Option<TenantContext> {
    (area == TenantArea::Admin && academic(input)).then(|| TenantContext {
        should_redirect: true,
        redirect_to: Some(ADMIN_SIGN_IN_ROUTE.to_string()),
        ..Default::default()
    })
}

fn admin_impersonating(input: &ResolutionInput, _: TenantArea) -> Option<TenantContext> {
    if !admin(input) {
        return None;
    }

    let target = input.impersonation.as_ref()?.target.as_ref()?;

    Some(TenantContext {
        academy_name: Some(display_name(&target.slug)),
        ..bound_to(target, true)
    })
}

fn admin_own_academy(input: &ResolutionInput, _: TenantArea) -> Option<TenantContext> {
    if !admin(input) {
        return None;
    }

    input
        .own_academy
        .as_ref()
        .map(|academy| bound_to(academy, true))
}

fn admin_no_target(input: &ResolutionInput, _: TenantArea) -> Option<TenantContext> {
    admin(input).then(|| TenantContext {
        should_redirect: false,
        is_admin: true,
        ..Default::default()
    })
}

fn academic_no_record(input: &ResolutionInput, _: TenantArea) -> Option<TenantContext> {
    (academic(input) && input.own_academy.is_none()).then(|| TenantContext {
        should_redirect: true,
        redirect_to: Some(SIGN_IN_ROUTE.to_string()),
        force_sign_out: true,
        ..Default::default()
    })
}

fn academic_resolved(input: &ResolutionInput, _: TenantArea) -> Option<TenantContext> {
    if !academic(input) {
        return None;
    }

    input
        .own_academy
        .as_ref()
        .map(|academy| bound_to(academy, false))
}
