//! SeaORM entities for the Palaestra database schema.

pub mod prelude;

pub mod academy;
pub mod academy_sport;
pub mod academy_user;
pub mod sea_orm_active_enums;
pub mod sport;
