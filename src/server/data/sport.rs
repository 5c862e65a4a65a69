//! Sport catalogue and per-academy sport selections.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::SportModel;

pub struct SportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SportRepository<'a, C> {
    /// Creates a new instance of [`SportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sports selected by the academy, ordered by sport ID
    pub async fn get_selected(&self, academy_id: i32) -> Result<Vec<SportModel>, DbErr> {
        let selections = entity::prelude::AcademySport::find()
            .filter(entity::academy_sport::Column::AcademyId.eq(academy_id))
            .order_by_asc(entity::academy_sport::Column::SportId)
            .find_also_related(entity::prelude::Sport)
            .all(self.db)
            .await?;

        Ok(selections
            .into_iter()
            .filter_map(|(_, sport)| sport)
            .collect())
    }

    /// Sports of the catalogue the academy has not selected yet, ordered by sport ID
    pub async fn get_available(&self, academy_id: i32) -> Result<Vec<SportModel>, DbErr> {
        let selected_ids = self.get_selected_ids(academy_id).await?;

        entity::prelude::Sport::find()
            .filter(entity::sport::Column::Id.is_not_in(selected_ids))
            .order_by_asc(entity::sport::Column::Id)
            .all(self.db)
            .await
    }

    /// Catalogue entries matching any of the provided IDs
    pub async fn find_by_ids(&self, sport_ids: &[i32]) -> Result<Vec<SportModel>, DbErr> {
        entity::prelude::Sport::find()
            .filter(entity::sport::Column::Id.is_in(sport_ids.to_vec()))
            .order_by_asc(entity::sport::Column::Id)
            .all(self.db)
            .await
    }

    /// Subset of `sport_ids` already selected by the academy
    pub async fn get_selected_ids_among(
        &self,
        academy_id: i32,
        sport_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AcademySport::find()
            .select_only()
            .column(entity::academy_sport::Column::SportId)
            .filter(entity::academy_sport::Column::AcademyId.eq(academy_id))
            .filter(entity::academy_sport::Column::SportId.is_in(sport_ids.to_vec()))
            .order_by_asc(entity::academy_sport::Column::SportId)
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn get_selected_ids(&self, academy_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AcademySport::find()
            .select_only()
            .column(entity::academy_sport::Column::SportId)
            .filter(entity::academy_sport::Column::AcademyId.eq(academy_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Records the academy's selection of each sport in `sport_ids`
    pub async fn insert_selections(&self, academy_id: i32, sport_ids: &[i32]) -> Result<(), DbErr> {
        if sport_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let selections = sport_ids
            .iter()
            .map(|&sport_id| entity::academy_sport::ActiveModel {
                academy_id: ActiveValue::Set(academy_id),
                sport_id: ActiveValue::Set(sport_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::AcademySport::insert_many(selections)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes the academy's selection of each sport in `sport_ids`
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of selections removed; IDs that were not selected are ignored
    pub async fn delete_selections(&self, academy_id: i32, sport_ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademySport::delete_many()
            .filter(entity::academy_sport::Column::AcademyId.eq(academy_id))
            .filter(entity::academy_sport::Column::SportId.is_in(sport_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
