//! Session data models.
//!
//! Type-safe wrappers for the data stored in the tower-sessions session (Redis-backed).

pub mod user;
