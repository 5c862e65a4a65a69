pub mod impersonation_banner;
pub mod layout;
pub mod navbar;
pub mod page;

pub use impersonation_banner::ImpersonationBanner;
pub use layout::TenantLayout;
pub use navbar::Navbar;
pub use page::Page;
