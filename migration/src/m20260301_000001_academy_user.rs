use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademyUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademyUser::Id))
                    .col(string_uniq(AcademyUser::Email))
                    .col(string_len(AcademyUser::Role, 16))
                    .col(timestamp(AcademyUser::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademyUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AcademyUser {
    Table,
    Id,
    Email,
    Role,
    CreatedAt,
}
