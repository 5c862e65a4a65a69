//! Tenant binding of the client for the current navigation.
//!
//! Each navigation resolves the tenant context again. Until that resolution completes nothing is
//! bound, so pages never render against the context of the previous navigation.

use crate::{
    model::tenant::TenantContext,
    store::optimistic::{OptimisticStore, StoreEntity},
};

/// Marker handed out by [`TenantBinding::begin_resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenantBinding {
    context: Option<TenantContext>,
    generation: u64,
}

impl TenantBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start resolving the context of a new navigation, dropping the current one.
    pub fn begin_resolution(&mut self) -> ResolutionTicket {
        self.context = None;
        self.generation += 1;

        ResolutionTicket(self.generation)
    }

    /// Bind the resolved context and rebind `store` to its academy.
    ///
    /// Dropped when a later navigation started resolving since the ticket was issued. Returns
    /// whether the context was applied.
    pub fn complete<T: StoreEntity>(
        &mut self,
        ticket: ResolutionTicket,
        resolved: TenantContext,
        store: &mut OptimisticStore<T>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        store.bind_tenant(resolved.bound_academy());
        self.context = Some(resolved);

        true
    }

    /// Context of the current navigation, `None` while it is being resolved.
    pub fn context(&self) -> Option<&TenantContext> {
        self.context.as_ref()
    }

    /// Whether tenant-scoped pages may render.
    pub fn renders(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| !context.should_redirect)
    }
}
