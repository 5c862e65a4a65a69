//! Tests for the logout endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use palaestra::server::{
    controller::auth::logout,
    model::{session::user::SessionUserId, tenant::SessionUser},
    service::tenant::impersonation::{ImpersonationStore, IMPERSONATION_COOKIE},
};

use super::*;

/// Expect 307 redirect to sign-in with the session and impersonation cleared
#[tokio::test]
async fn clears_session_and_impersonation() -> Result<(), TestError> {
    let test = test_setup_with_tenant_tables!()?;
    let admin = test.user().insert_admin().await?;
    let (_, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let store = ImpersonationStore::new(&test.db);
    let jar = store
        .set(
            test.cookie_jar(),
            Some(&SessionUser::from(admin)),
            academy.id,
        )
        .await
        .unwrap();
    let jar = browser_jar(jar, &test.cookie_key);

    let result = logout(test.session.clone(), jar).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/sign-in")
    );
    assert!(sets_cookie(&resp, IMPERSONATION_COOKIE));

    let jar = jar_from_response(&resp, &test.cookie_key);
    assert!(jar.get(IMPERSONATION_COOKIE).is_none());

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

/// Expect 307 redirect even without session data
#[tokio::test]
async fn redirects_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = logout(test.session.clone(), test.cookie_jar()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
