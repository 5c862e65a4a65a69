use chrono::Utc;
use entity::sea_orm_active_enums::{AcademyStatus, UserRole};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn academy<'a>(&'a self) -> AcademyFixtures<'a> {
        AcademyFixtures { setup: self }
    }
}

pub struct AcademyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AcademyFixtures<'a> {
    pub async fn insert_academy(
        &self,
        user_id: i32,
        slug: &str,
        onboarded: bool,
        status: AcademyStatus,
    ) -> Result<entity::academy::Model, TestError> {
        Ok(
            entity::prelude::Academy::insert(entity::academy::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                slug: ActiveValue::Set(slug.to_string()),
                onboarded: ActiveValue::Set(onboarded),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an academic user owning an approved, onboarded academy.
    ///
    /// The user's email is derived from the slug so several academies can coexist.
    pub async fn insert_onboarded_academy(
        &self,
        slug: &str,
    ) -> Result<(entity::academy_user::Model, entity::academy::Model), TestError> {
        let user = self
            .setup
            .user()
            .insert_user(&format!("{}@palaestra.test", slug), UserRole::Academic)
            .await?;
        let academy = self
            .insert_academy(user.id, slug, true, AcademyStatus::Approved)
            .await?;

        Ok((user, academy))
    }
}
