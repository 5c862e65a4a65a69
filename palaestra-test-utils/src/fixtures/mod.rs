//! Test fixture modules for database record creation.
//!
//! - `academy` - Academy records owned by users
//! - `factory` - In-memory models that need no database
//! - `sport` - Sport catalogue and academy selections
//! - `user` - Admin and academic user accounts

pub mod academy;
pub mod factory;
pub mod sport;
pub mod user;
