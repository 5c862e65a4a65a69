pub mod model;
pub mod store;

#[cfg(feature = "server")]
pub mod server;
