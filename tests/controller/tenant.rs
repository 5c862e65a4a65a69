//! Tests for tenant context and admin impersonation endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::SignedCookieJar;
use palaestra::{
    model::{
        api::ErrorDto,
        tenant::{ImpersonationDto, TenantArea, TenantContext},
    },
    server::{
        controller::tenant::{
            get_tenant_context, start_impersonation, stop_impersonation, AreaParams,
        },
        model::{app::AppState, session::user::SessionUserId},
        service::tenant::impersonation::IMPERSONATION_COOKIE,
    },
};

use super::*;

async fn resolve_context(
    test: &TestContext,
    jar: SignedCookieJar,
    area: TenantArea,
) -> TenantContext {
    let resp = get_tenant_context(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        jar,
        Query(AreaParams { area }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    body_json(resp).await
}

mod get_tenant_context {
    use entity::sea_orm_active_enums::{AcademyStatus, UserRole};

    use super::*;
    use palaestra::model::tenant::AcademyStatusDto;

    /// Expect 200 with a redirect to the area's sign-in route for anonymous sessions
    #[tokio::test]
    async fn redirects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;

        let academy = resolve_context(&test, test.cookie_jar(), TenantArea::Academy).await;
        let admin = resolve_context(&test, test.cookie_jar(), TenantArea::Admin).await;

        assert!(academy.should_redirect);
        assert_eq!(academy.redirect_to.as_deref(), Some("/sign-in"));
        assert_eq!(admin.redirect_to.as_deref(), Some("/admin-sign-in"));

        Ok(())
    }

    /// Expect an academic to be bound to their own academy
    #[tokio::test]
    async fn binds_academic_to_own_academy() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_user("coach@palaestra.test", UserRole::Academic)
            .with_academy(0, "north-fc", true, AcademyStatus::Approved)
            .build()
            .await?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let context = resolve_context(&test, test.cookie_jar(), TenantArea::Academy).await;

        assert!(!context.should_redirect);
        assert_eq!(context.academy_id, Some(1));
        assert_eq!(context.is_onboarded, Some(true));
        assert_eq!(context.status, Some(AcademyStatusDto::Approved));
        assert!(!context.is_admin);

        Ok(())
    }

    /// Expect academics to be sent to the admin sign-in when requesting the admin area
    #[tokio::test]
    async fn redirects_academic_from_admin_area() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let (user, _) = test.academy().insert_onboarded_academy("north-fc").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let context = resolve_context(&test, test.cookie_jar(), TenantArea::Admin).await;

        assert!(context.should_redirect);
        assert_eq!(context.redirect_to.as_deref(), Some("/admin-sign-in"));
        assert!(!context.force_sign_out);

        Ok(())
    }

    /// Expect a forced sign-out for an academic whose academy was deleted
    #[tokio::test]
    async fn forces_sign_out_without_academy() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let academic = test.user().insert_academic().await?;
        SessionUserId::insert(&test.session, academic.id).await.unwrap();

        let context = resolve_context(&test, test.cookie_jar(), TenantArea::Academy).await;

        assert!(context.force_sign_out);
        assert_eq!(context.redirect_to.as_deref(), Some("/sign-in"));
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod start_impersonation {
    use super::*;

    /// Expect 204 and a cookie that binds later requests to the target academy
    #[tokio::test]
    async fn binds_admin_to_target_academy() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let admin = test.user().insert_admin().await?;
        let (_, target) = test.academy().insert_onboarded_academy("south-fc").await?;
        SessionUserId::insert(&test.session, admin.id).await.unwrap();

        let result = start_impersonation(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(ImpersonationDto {
                academy_id: target.id,
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(sets_cookie(&resp, IMPERSONATION_COOKIE));

        let jar = jar_from_response(&resp, &test.cookie_key);
        let context = resolve_context(&test, jar, TenantArea::Academy).await;

        assert_eq!(context.academy_id, Some(target.id));
        assert_eq!(context.academy_name.as_deref(), Some("South Fc"));
        assert!(context.is_admin);

        Ok(())
    }

    /// Expect 403 for an academic session
    #[tokio::test]
    async fn forbids_academic() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let (user, _) = test.academy().insert_onboarded_academy("north-fc").await?;
        let (_, target) = test.academy().insert_onboarded_academy("south-fc").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = start_impersonation(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(ImpersonationDto {
                academy_id: target.id,
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(!sets_cookie(&resp, IMPERSONATION_COOKIE));

        Ok(())
    }

    /// Expect 403 for an anonymous session
    #[tokio::test]
    async fn forbids_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let (_, target) = test.academy().insert_onboarded_academy("south-fc").await?;

        let result = start_impersonation(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(ImpersonationDto {
                academy_id: target.id,
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 404 when the academy does not exist
    #[tokio::test]
    async fn rejects_unknown_academy() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let admin = test.user().insert_admin().await?;
        SessionUserId::insert(&test.session, admin.id).await.unwrap();

        let result = start_impersonation(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(ImpersonationDto { academy_id: 42 }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "Academy not found");

        Ok(())
    }
}

mod stop_impersonation {
    use palaestra::{
        server::model::tenant::SessionUser,
        server::service::tenant::impersonation::ImpersonationStore,
    };

    use super::*;

    /// Expect the admin to fall back to their own (absent) binding, also when stopping twice
    #[tokio::test]
    async fn is_idempotent() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let admin = test.user().insert_admin().await?;
        let (_, target) = test.academy().insert_onboarded_academy("south-fc").await?;
        SessionUserId::insert(&test.session, admin.id).await.unwrap();

        let store = ImpersonationStore::new(&test.db);
        let jar = store
            .set(
                test.cookie_jar(),
                Some(&SessionUser::from(admin)),
                target.id,
            )
            .await
            .unwrap();
        let jar = browser_jar(jar, &test.cookie_key);

        let first = stop_impersonation(jar).await.into_response();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert!(sets_cookie(&first, IMPERSONATION_COOKIE));

        let jar = jar_from_response(&first, &test.cookie_key);
        let second = stop_impersonation(jar).await.into_response();
        assert_eq!(second.status(), StatusCode::NO_CONTENT);

        let jar = jar_from_response(&second, &test.cookie_key);
        let context = resolve_context(&test, jar, TenantArea::Admin).await;

        assert!(!context.should_redirect);
        assert!(context.is_admin);
        assert_eq!(context.academy_id, None);

        Ok(())
    }
}
