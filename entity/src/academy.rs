use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AcademyStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "academy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub onboarded: bool,
    pub status: AcademyStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academy_user::Entity",
        from = "Column::UserId",
        to = "super::academy_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AcademyUser,
    #[sea_orm(has_many = "super::academy_sport::Entity")]
    AcademySport,
}

impl Related<super::academy_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademyUser.def()
    }
}

impl Related<super::academy_sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademySport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
