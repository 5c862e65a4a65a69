//! Tests for the bound academy's sport selection endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use palaestra::{
    model::{
        api::FieldErrorDto,
        sport::{SportDto, SportSelectionDto},
    },
    server::{
        controller::sport::{add_sports, get_available_sports, get_sports, remove_sports},
        model::{app::AppState, session::user::SessionUserId},
    },
};

use super::*;

async fn selected_sports(test: &TestContext) -> Vec<SportDto> {
    let resp = get_sports(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        test.cookie_jar(),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    body_json(resp).await
}

mod get_sports {
    use palaestra::server::{
        model::tenant::SessionUser, service::tenant::impersonation::ImpersonationStore,
    };

    use super::*;

    /// Expect 401 when the session is not bound to an academy
    #[tokio::test]
    async fn rejects_unbound_session() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;

        let result = get_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect only the bound academy's selections
    #[tokio::test]
    async fn returns_bound_academy_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sports = test.sport().insert_sports(&["football", "tennis"]).await?;
        let (user, north) = test.academy().insert_onboarded_academy("north-fc").await?;
        let (_, south) = test.academy().insert_onboarded_academy("south-fc").await?;
        test.sport().select_sport(north.id, sports[0].id).await?;
        test.sport().select_sport(south.id, sports[1].id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let selected = selected_sports(&test).await;

        assert_eq!(
            selected,
            vec![SportDto {
                id: sports[0].id,
                name: "football".to_string()
            }]
        );

        Ok(())
    }

    /// Expect an impersonating admin to see the target academy's selections
    #[tokio::test]
    async fn returns_impersonated_academy_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sport = test.sport().insert_sport("rugby").await?;
        let admin = test.user().insert_admin().await?;
        let (_, target) = test.academy().insert_onboarded_academy("south-fc").await?;
        test.sport().select_sport(target.id, sport.id).await?;
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

        let resp = get_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            jar,
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let selected: Vec<SportDto> = body_json(resp).await;
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "rugby");

        Ok(())
    }
}

mod get_available_sports {
    use super::*;

    /// Expect the catalogue minus the academy's selections
    #[tokio::test]
    async fn excludes_selected_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sports = test
            .sport()
            .insert_sports(&["football", "tennis", "rugby"])
            .await?;
        let (user, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
        test.sport().select_sport(academy.id, sports[1].id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let resp = get_available_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let available: Vec<SportDto> = body_json(resp).await;
        let ids: Vec<i32> = available.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![sports[0].id, sports[2].id]);

        Ok(())
    }
}

mod add_sports {
    use super::*;

    /// Expect 204 and the sports to be selected afterwards
    #[tokio::test]
    async fn selects_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sports = test.sport().insert_sports(&["football", "tennis"]).await?;
        let (user, _) = test.academy().insert_onboarded_academy("north-fc").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = add_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(SportSelectionDto {
                ids: vec![sports[0].id, sports[1].id],
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(selected_sports(&test).await.len(), 2);

        Ok(())
    }

    /// Expect 400 tagged with the sports field and nothing added for unknown sports
    #[tokio::test]
    async fn rejects_unknown_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sport = test.sport().insert_sport("football").await?;
        let (user, _) = test.academy().insert_onboarded_academy("north-fc").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = add_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(SportSelectionDto {
                ids: vec![sport.id, 99],
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: FieldErrorDto = body_json(resp).await;
        assert_eq!(body.field.as_deref(), Some("sports"));
        assert!(selected_sports(&test).await.is_empty());

        Ok(())
    }

    /// Expect 401 when the session is not bound to an academy
    #[tokio::test]
    async fn rejects_unbound_session() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sport = test.sport().insert_sport("football").await?;

        let result = add_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(SportSelectionDto {
                ids: vec![sport.id],
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod remove_sports {
    use super::*;

    /// Expect 204 and the sport to no longer be selected
    #[tokio::test]
    async fn deselects_sports() -> Result<(), TestError> {
        let test = test_setup_with_tenant_tables!()?;
        let sports = test.sport().insert_sports(&["football", "tennis"]).await?;
        let (user, academy) = test.academy().insert_onboarded_academy("north-fc").await?;
        test.sport().select_sport(academy.id, sports[0].id).await?;
        test.sport().select_sport(academy.id, sports[1].id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = remove_sports(
            State(test.to_app_state::<AppState>()),
            test.session.clone(),
            test.cookie_jar(),
            Json(SportSelectionDto {
                ids: vec![sports[1].id],
            }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let selected = selected_sports(&test).await;
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, sports[0].id);

        Ok(())
    }
}
