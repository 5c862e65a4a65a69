use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn sport<'a>(&'a self) -> SportFixtures<'a> {
        SportFixtures { setup: self }
    }
}

pub struct SportFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SportFixtures<'a> {
    pub async fn insert_sport(&self, name: &str) -> Result<entity::sport::Model, TestError> {
        Ok(entity::prelude::Sport::insert(entity::sport::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert one sport per name, returning them in the same order.
    pub async fn insert_sports(
        &self,
        names: &[&str],
    ) -> Result<Vec<entity::sport::Model>, TestError> {
        let mut sports = Vec::with_capacity(names.len());
        for name in names {
            sports.push(self.insert_sport(name).await?);
        }

        Ok(sports)
    }

    pub async fn select_sport(
        &self,
        academy_id: i32,
        sport_id: i32,
    ) -> Result<entity::academy_sport::Model, TestError> {
        Ok(
            entity::prelude::AcademySport::insert(entity::academy_sport::ActiveModel {
                academy_id: ActiveValue::Set(academy_id),
                sport_id: ActiveValue::Set(sport_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
