use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000002_academy::Academy, m20260301_000003_sport::Sport};

static IDX_ACADEMY_SPORT_PAIR: &str = "idx-academy_sport-academy_id-sport_id";
static FK_ACADEMY_SPORT_ACADEMY_ID: &str = "fk-academy_sport-academy_id";
static FK_ACADEMY_SPORT_SPORT_ID: &str = "fk-academy_sport-sport_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademySport::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademySport::Id))
                    .col(integer(AcademySport::AcademyId))
                    .col(integer(AcademySport::SportId))
                    .col(timestamp(AcademySport::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One selection per academy and sport
        manager
            .create_index(
                Index::create()
                    .name(IDX_ACADEMY_SPORT_PAIR)
                    .table(AcademySport::Table)
                    .col(AcademySport::AcademyId)
                    .col(AcademySport::SportId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACADEMY_SPORT_ACADEMY_ID)
                    .from_tbl(AcademySport::Table)
                    .from_col(AcademySport::AcademyId)
                    .to_tbl(Academy::Table)
                    .to_col(Academy::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACADEMY_SPORT_SPORT_ID)
                    .from_tbl(AcademySport::Table)
                    .from_col(AcademySport::SportId)
                    .to_tbl(Sport::Table)
                    .to_col(Sport::Id)
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
                    .name(FK_ACADEMY_SPORT_SPORT_ID)
                    .table(AcademySport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACADEMY_SPORT_ACADEMY_ID)
                    .table(AcademySport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACADEMY_SPORT_PAIR)
                    .table(AcademySport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AcademySport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AcademySport {
    Table,
    Id,
    AcademyId,
    SportId,
    CreatedAt,
}
