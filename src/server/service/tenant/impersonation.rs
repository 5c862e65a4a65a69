//! Admin impersonation override stored in a signed cookie.
//!
//! The cookie carries the decimal ID of the academy an admin acts as. It is only honored for
//! sessions whose current role is admin, so a demoted admin's leftover cookie has no effect.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::development_mode,
    data::academy::AcademyRepository,
    error::{tenant::TenantError, Error},
    model::tenant::SessionUser,
};

pub const IMPERSONATION_COOKIE: &str = "impersonatedAcademyId";

pub struct ImpersonationStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImpersonationStore<'a> {
    /// Creates a new instance of [`ImpersonationStore`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes the acting admin act as `academy_id` for every following request.
    ///
    /// # Returns
    /// - `Ok(SignedCookieJar)` - Jar carrying the impersonation cookie
    /// - `Err(Error::TenantError(TenantError::Unauthorized))` - Acting session is not an admin
    /// - `Err(Error::TenantError(TenantError::AcademyNotFound))` - No academy with that ID
    /// - `Err(Error::DbErr)` - Academy lookup failed
    pub async fn set(
        &self,
        jar: SignedCookieJar,
        acting: Option<&SessionUser>,
        academy_id: i32,
    ) -> Result<SignedCookieJar, Error> {
        let Some(admin) = acting.filter(|user| user.is_admin()) else {
            tracing::debug!(
                user_id = ?acting.map(|user| user.user_id),
                academy_id = %academy_id,
                "Rejected impersonation by non-admin session"
            );

            return Err(TenantError::Unauthorized.into());
        };

        let academy_repo = AcademyRepository::new(self.db);
        if academy_repo.find_by_id(academy_id).await?.is_none() {
            return Err(TenantError::AcademyNotFound(academy_id).into());
        }

        tracing::info!(
            user_id = %admin.user_id,
            academy_id = %academy_id,
            "Admin started impersonating academy"
        );

        let cookie = Cookie::build((IMPERSONATION_COOKIE, academy_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(!development_mode());

        Ok(jar.add(cookie))
    }

    /// Removes the impersonation cookie; a no-op when none is set.
    pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
        jar.remove(Cookie::build(IMPERSONATION_COOKIE).path("/"))
    }

    /// Academy the acting session impersonates, if it is an admin with a valid cookie.
    ///
    /// Cookies whose signature does not verify never reach this point; unparsable values are
    /// treated as absent.
    pub fn get(jar: &SignedCookieJar, acting: Option<&SessionUser>) -> Option<i32> {
        if !acting.is_some_and(|user| user.is_admin()) {
            return None;
        }

        jar.get(IMPERSONATION_COOKIE)
            .and_then(|cookie| cookie.value().parse::<i32>().ok())
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::UserRole;
    use palaestra_test_utils::prelude::*;

    use crate::server::model::tenant::SessionUser;

    fn session_user(id: i32, role: UserRole) -> SessionUser {
        SessionUser::from(factory::mock_user_model(id, role))
    }

    mod set {
        use entity::sea_orm_active_enums::UserRole;
        use palaestra_test_utils::prelude::*;

        use super::session_user;
        use crate::server::{
            error::{tenant::TenantError, Error},
            service::tenant::impersonation::{ImpersonationStore, IMPERSONATION_COOKIE},
        };

        /// Expect a signed, http-only, lax cookie scoped to the whole site
        #[tokio::test]
        async fn writes_cookie_for_admin() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
            let admin = session_user(1, UserRole::Admin);

            let store = ImpersonationStore::new(&test.db);
            let jar = store
                .set(test.cookie_jar(), Some(&admin), academy.id)
                .await
                .unwrap();

            let cookie = jar.get(IMPERSONATION_COOKIE).unwrap();
            assert_eq!(cookie.value(), academy.id.to_string());
            assert_eq!(cookie.path(), Some("/"));
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(
                cookie.same_site(),
                Some(axum_extra::extract::cookie::SameSite::Lax)
            );

            Ok(())
        }

        /// Expect Unauthorized for academic and anonymous sessions
        #[tokio::test]
        async fn rejects_non_admin() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
            let academic = session_user(2, UserRole::Academic);

            let store = ImpersonationStore::new(&test.db);
            let academic_result = store
                .set(test.cookie_jar(), Some(&academic), academy.id)
                .await;
            let anonymous_result = store.set(test.cookie_jar(), None, academy.id).await;

            assert!(matches!(
                academic_result,
                Err(Error::TenantError(TenantError::Unauthorized))
            ));
            assert!(matches!(
                anonymous_result,
                Err(Error::TenantError(TenantError::Unauthorized))
            ));

            Ok(())
        }

        /// Expect AcademyNotFound when the target academy does not exist
        #[tokio::test]
        async fn rejects_unknown_academy() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let admin = session_user(1, UserRole::Admin);

            let store = ImpersonationStore::new(&test.db);
            let result = store.set(test.cookie_jar(), Some(&admin), 42).await;

            assert!(matches!(
                result,
                Err(Error::TenantError(TenantError::AcademyNotFound(42)))
            ));

            Ok(())
        }
    }

    mod get {
        use axum::http::{header, HeaderMap, HeaderValue};
        use axum_extra::extract::cookie::SignedCookieJar;
        use entity::sea_orm_active_enums::UserRole;
        use palaestra_test_utils::prelude::*;

        use super::session_user;
        use crate::server::service::tenant::impersonation::ImpersonationStore;

        /// Expect the impersonated academy for the admin who set it
        #[tokio::test]
        async fn returns_academy_for_admin() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
            let admin = session_user(1, UserRole::Admin);

            let store = ImpersonationStore::new(&test.db);
            let jar = store
                .set(test.cookie_jar(), Some(&admin), academy.id)
                .await
                .unwrap();

            assert_eq!(ImpersonationStore::get(&jar, Some(&admin)), Some(academy.id));

            Ok(())
        }

        /// Expect None for a stale cookie once the session is no longer an admin
        #[tokio::test]
        async fn ignores_cookie_for_demoted_admin() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
            let admin = session_user(1, UserRole::Admin);
            let demoted = session_user(1, UserRole::Academic);

            let store = ImpersonationStore::new(&test.db);
            let jar = store
                .set(test.cookie_jar(), Some(&admin), academy.id)
                .await
                .unwrap();

            assert_eq!(ImpersonationStore::get(&jar, Some(&demoted)), None);
            assert_eq!(ImpersonationStore::get(&jar, None), None);

            Ok(())
        }

        /// Expect None for a cookie that was not signed with the server key
        #[tokio::test]
        async fn ignores_unsigned_cookie() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let admin = session_user(1, UserRole::Admin);
            let mut headers = HeaderMap::new();
            headers.insert(
                header::COOKIE,
                HeaderValue::from_static("impersonatedAcademyId=5"),
            );

            let jar = SignedCookieJar::from_headers(&headers, test.cookie_key.clone());

            assert_eq!(ImpersonationStore::get(&jar, Some(&admin)), None);

            Ok(())
        }
    }

    mod clear {
        use entity::sea_orm_active_enums::UserRole;
        use palaestra_test_utils::prelude::*;

        use super::session_user;
        use crate::server::service::tenant::impersonation::{
            ImpersonationStore, IMPERSONATION_COOKIE,
        };

        /// Expect clearing twice to have the same effect as clearing once
        #[tokio::test]
        async fn is_idempotent() -> Result<(), TestError> {
            let test = test_setup_with_tenant_tables!()?;
            let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
            let admin = session_user(1, UserRole::Admin);

            let store = ImpersonationStore::new(&test.db);
            let jar = store
                .set(test.cookie_jar(), Some(&admin), academy.id)
                .await
                .unwrap();

            let once = ImpersonationStore::clear(jar);
            assert_eq!(ImpersonationStore::get(&once, Some(&admin)), None);

            let twice = ImpersonationStore::clear(once);
            assert_eq!(ImpersonationStore::get(&twice, Some(&admin)), None);
            assert!(twice.get(IMPERSONATION_COOKIE).is_none());

            Ok(())
        }

        /// Expect clearing an empty jar to be a no-op
        #[tokio::test]
        async fn accepts_jar_without_cookie() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let jar = ImpersonationStore::clear(test.cookie_jar());

            assert!(jar.get(IMPERSONATION_COOKIE).is_none());

            Ok(())
        }
    }
}
