#[cfg(feature = "web")]
pub mod api;
