//! Data transfer objects shared by the server API and the client.

pub mod api;
pub mod sport;
pub mod tenant;
