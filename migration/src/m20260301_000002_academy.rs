use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_academy_user::AcademyUser;

static FK_ACADEMY_USER_ID: &str = "fk-academy-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Academy::Table)
                    .if_not_exists()
                    .col(pk_auto(Academy::Id))
                    .col(integer_uniq(Academy::UserId))
                    .col(string_uniq(Academy::Slug))
                    .col(boolean(Academy::Onboarded).default(false))
                    .col(string_len(Academy::Status, 16).default("pending"))
                    .col(timestamp(Academy::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACADEMY_USER_ID)
                    .from_tbl(Academy::Table)
                    .from_col(Academy::UserId)
                    .to_tbl(AcademyUser::Table)
                    .to_col(AcademyUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACADEMY_USER_ID)
                    .table(Academy::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Academy::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Academy {
    Table,
    Id,
    UserId,
    Slug,
    Onboarded,
    Status,
    CreatedAt,
}
