//! Client-held caches of tenant-scoped collections.
//!
//! Stores are constructed explicitly for the tenant they serve and passed to their consumers;
//! there is no process-wide instance.

pub mod binding;
pub mod optimistic;
pub mod sport;

pub use binding::{ResolutionTicket, TenantBinding};
pub use optimistic::{CollectionApi, OptimisticStore, PendingMutation, StoreEntity};
pub use sport::SportStore;
