pub mod home;
pub mod not_found;
pub mod sports;

pub use home::Home;
pub use not_found::NotFound;
pub use sports::Sports;
