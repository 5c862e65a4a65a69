use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_ACADEMIC_EMAIL, TEST_ADMIN_EMAIL},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<entity::academy_user::Model, TestError> {
        Ok(
            entity::prelude::AcademyUser::insert(entity::academy_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_admin(&self) -> Result<entity::academy_user::Model, TestError> {
        self.insert_user(TEST_ADMIN_EMAIL, UserRole::Admin).await
    }

    pub async fn insert_academic(&self) -> Result<entity::academy_user::Model, TestError> {
        self.insert_user(TEST_ACADEMIC_EMAIL, UserRole::Academic)
            .await
    }
}
