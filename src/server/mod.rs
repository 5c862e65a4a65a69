//! Server application core modules.
//!
//! All server-side functionality of Palaestra: HTTP routing, tenant context resolution with
//! admin impersonation, session handling, database access and the sport selection API backing
//! the client's optimistic store.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
