//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. They are generic over `ConnectionTrait` so the
//! same repository works on a plain connection or inside a transaction.

pub mod academy;
pub mod sport;
pub mod user;
