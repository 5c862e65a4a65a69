//! Tenant directory: academy lookups by owner and by id.
//!
//! Records are looked up fresh for every resolution and never cached.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::AcademyModel;

pub struct AcademyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademyRepository<'a, C> {
    /// Creates a new instance of [`AcademyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Academy owned by `user_id`, if any
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<AcademyModel>, DbErr> {
        entity::prelude::Academy::find()
            .filter(entity::academy::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, academy_id: i32) -> Result<Option<AcademyModel>, DbErr> {
        entity::prelude::Academy::find_by_id(academy_id)
            .one(self.db)
            .await
    }
}
