//! Server application models and type definitions.
//!
//! Application state, database model type aliases, session data structures and the domain
//! types tenant resolution works on.

pub mod app;
pub mod db;
pub mod session;
pub mod tenant;
