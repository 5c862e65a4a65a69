//! Tenant context service.
//!
//! Gathers the inputs of tenant resolution for a request (session user, impersonation cookie
//! and academy records), all read fresh, and runs them through the [`resolver`].

pub mod impersonation;
pub mod resolver;

use axum_extra::extract::cookie::SignedCookieJar;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::tenant::{TenantArea, TenantContext},
    server::{
        data::academy::AcademyRepository,
        error::{auth::AuthError, tenant::TenantError, Error},
        model::tenant::AcademyRecord,
        service::{
            tenant::{
                impersonation::ImpersonationStore,
                resolver::{Impersonation, ResolutionInput},
            },
            user::UserService,
        },
    },
};

pub struct TenantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantService<'a> {
    /// Creates a new instance of [`TenantService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the tenant context of the request.
    ///
    /// Never fails: any error while gathering inputs resolves to the sign-in redirect of the
    /// area. Contexts that force a sign-out, and sessions whose user no longer exists, leave
    /// with a cleared session and no impersonation cookie.
    ///
    /// # Returns
    /// The jar to send back with the response, and the resolved context
    pub async fn resolve(
        &self,
        session: &Session,
        jar: SignedCookieJar,
        area: TenantArea,
    ) -> (SignedCookieJar, TenantContext) {
        match self.gather(session, &jar).await {
            Ok(input) => {
                let context = resolver::resolve(&input, area);

                if context.force_sign_out {
                    tracing::debug!(
                        user_id = ?input.session.map(|user| user.user_id),
                        "Signing out session without academy record"
                    );

                    session.clear().await;

                    return (ImpersonationStore::clear(jar), context);
                }

                (jar, context)
            }
            Err(Error::AuthError(err @ AuthError::UserNotInDatabase(_))) => {
                tracing::debug!("{}", err);

                (ImpersonationStore::clear(jar), TenantContext::redirect(area))
            }
            Err(err) => {
                tracing::error!("Failed to resolve tenant context: {}", err);

                (jar, TenantContext::redirect(area))
            }
        }
    }

    /// Resolves the academy the request acts on.
    ///
    /// # Returns
    /// - `Ok((SignedCookieJar, i32))` - Jar to send back and the bound academy ID
    /// - `Err(Error::TenantError(TenantError::NoAcademyBound))` - Context redirects or has no
    ///   academy bound
    pub async fn require_academy(
        &self,
        session: &Session,
        jar: SignedCookieJar,
    ) -> Result<(SignedCookieJar, i32), Error> {
        let (jar, context) = self.resolve(session, jar, TenantArea::Academy).await;

        match context.bound_academy() {
            Some(academy_id) => Ok((jar, academy_id)),
            None => Err(TenantError::NoAcademyBound.into()),
        }
    }

    async fn gather(
        &self,
        session: &Session,
        jar: &SignedCookieJar,
    ) -> Result<ResolutionInput, Error> {
        let user_service = UserService::new(self.db);
        let Some(user) = user_service.get_session_user(session).await? else {
            return Ok(ResolutionInput::default());
        };

        let academy_repo = AcademyRepository::new(self.db);

        let impersonation = match ImpersonationStore::get(jar, Some(&user)) {
            Some(academy_id) => Some(Impersonation {
                academy_id,
                target: academy_repo
                    .find_by_id(academy_id)
                    .await?
                    .map(AcademyRecord::from),
            }),
            None => None,
        };

        let own_academy = academy_repo
            .find_by_user_id(user.user_id)
            .await?
            .map(AcademyRecord::from);

        Ok(ResolutionInput {
            session: Some(user),
            impersonation,
            own_academy,
        })
    }
}
