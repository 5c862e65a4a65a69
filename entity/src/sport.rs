use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sport")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::academy_sport::Entity")]
    AcademySport,
}

impl Related<super::academy_sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademySport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
