pub use sea_orm_migration::prelude::*;

mod m20260301_000001_academy_user;
mod m20260301_000002_academy;
mod m20260301_000003_sport;
mod m20260301_000004_academy_sport;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_academy_user::Migration),
            Box::new(m20260301_000002_academy::Migration),
            Box::new(m20260301_000003_sport::Migration),
            Box::new(m20260301_000004_academy_sport::Migration),
        ]
    }
}
