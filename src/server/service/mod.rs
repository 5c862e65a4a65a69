//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories for tenant resolution, admin impersonation, session
//! identity and the bound academy's sport selection.

pub mod sport;
pub mod tenant;
pub mod user;
