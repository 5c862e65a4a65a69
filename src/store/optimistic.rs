//! Optimistic cache of a tenant-scoped entity collection.
//!
//! The store keeps two disjoint lists: the active collection (`items`) and the entities still
//! available to add (`candidates`). Mutations follow apply-then-confirm-or-revert: a snapshot is
//! captured, the change is applied synchronously so the UI reflects it in the same tick, and the
//! snapshot is restored wholesale if the server rejects the change.
//!
//! Every mutation is split into a synchronous `begin_*` step returning a [`PendingMutation`] and
//! a synchronous [`OptimisticStore::settle`] step, so callers holding the store behind a UI
//! signal never keep it borrowed across the network call. The `add`, `remove` and `fetch`
//! helpers chain the steps for callers that own the store outright.
//!
//! Two mutations in flight against the same store are not ordered relative to each other; the
//! later rollback can clobber the earlier optimistic state. Callers serialize mutations, e.g. by
//! disabling the triggering control while [`OptimisticStore::is_pending`] is true.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::model::api::FieldErrorDto;

/// A uniquely identified domain item held by an [`OptimisticStore`].
pub trait StoreEntity: Clone {
    fn id(&self) -> i32;
}

/// Server side of a tenant-scoped collection.
///
/// Calls are resolved against whatever tenant the current request context is bound to.
#[allow(async_fn_in_trait)]
pub trait CollectionApi<T> {
    /// Authoritative active collection.
    async fn fetch_items(&self) -> Result<Vec<T>, FieldErrorDto>;
    /// Entities that may still be added.
    async fn fetch_candidates(&self) -> Result<Vec<T>, FieldErrorDto>;
    /// Atomically add the entities with the given ids.
    async fn add(&self, ids: &[i32]) -> Result<(), FieldErrorDto>;
    /// Remove the entities with the given ids.
    async fn remove(&self, ids: &[i32]) -> Result<(), FieldErrorDto>;
}

/// Optimistically applied change awaiting the server's verdict.
///
/// Holds the collections as they were before the change plus the tenant and epoch it was taken
/// under; [`OptimisticStore::settle`] only restores the snapshot while both still match.
#[derive(Debug)]
#[must_use = "a pending mutation must be settled with the server result"]
pub struct PendingMutation<T> {
    tenant: Option<i32>,
    epoch: u64,
    ids: Vec<i32>,
    items: Vec<T>,
    candidates: Vec<T>,
}

impl<T> PendingMutation<T> {
    /// Ids to send to the server; only entities that actually moved are included.
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }
}

/// Marker handed out by [`OptimisticStore::begin_fetch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    tenant: i32,
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptimisticStore<T> {
    tenant: Option<i32>,
    epoch: u64,
    items: Vec<T>,
    candidates: Vec<T>,
    fetched: bool,
    in_flight: usize,
}

impl<T> Default for OptimisticStore<T> {
    fn default() -> Self {
        Self {
            tenant: None,
            epoch: 0,
            items: Vec::new(),
            candidates: Vec::new(),
            fetched: false,
            in_flight: 0,
        }
    }
}

impl<T: StoreEntity> OptimisticStore<T> {
    /// Store not yet bound to any tenant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty, unfetched store bound to `academy_id`.
    pub fn for_tenant(academy_id: i32) -> Self {
        Self {
            tenant: Some(academy_id),
            ..Self::default()
        }
    }

    pub fn tenant(&self) -> Option<i32> {
        self.tenant
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Whether a mutation started in the current epoch has not been settled yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Bind the store to the academy of the current tenant context.
    ///
    /// Switching to a different academy (or to none) discards everything held for the previous
    /// one before returning, so no item of the old tenant is observable afterwards. Returns
    /// whether the binding changed.
    pub fn bind_tenant(&mut self, academy_id: Option<i32>) -> bool {
        if self.tenant == academy_id {
            return false;
        }

        tracing::debug!(
            from = ?self.tenant,
            to = ?academy_id,
            "Tenant changed, discarding store contents"
        );

        *self = Self {
            tenant: academy_id,
            epoch: self.epoch + 1,
            ..Self::default()
        };

        true
    }

    /// Force the next fetch to reload from the server.
    pub fn invalidate(&mut self) {
        self.fetched = false;
    }

    /// Start a fetch, or `None` when already fetched or not bound to a tenant.
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        if self.fetched {
            return None;
        }

        self.tenant.map(|tenant| FetchTicket {
            tenant,
            epoch: self.epoch,
        })
    }

    /// Replace both collections with the server's authoritative lists.
    ///
    /// Dropped when the tenant or epoch changed since the ticket was issued. Applying a fetch
    /// starts a new epoch, so rollback snapshots of mutations still in flight are discarded.
    /// Returns whether the lists were applied.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, items: Vec<T>, candidates: Vec<T>) -> bool {
        if Some(ticket.tenant) != self.tenant || ticket.epoch != self.epoch {
            tracing::debug!(
                tenant = ticket.tenant,
                "Dropping fetch result for an outdated store binding"
            );
            return false;
        }

        let mut seen = HashSet::new();
        self.items = items
            .into_iter()
            .filter(|item| seen.insert(item.id()))
            .collect();
        self.candidates = candidates
            .into_iter()
            .filter(|candidate| seen.insert(candidate.id()))
            .collect();
        self.fetched = true;
        self.epoch += 1;
        self.in_flight = 0;

        true
    }

    /// Optimistically move the candidates whose id is in `ids` into the active collection.
    ///
    /// Requested ids that are not candidates are ignored. Returns `None` when nothing moved, in
    /// which case there is nothing to send to the server.
    pub fn begin_add(&mut self, ids: &[i32]) -> Option<PendingMutation<T>> {
        let requested: HashSet<i32> = ids.iter().copied().collect();
        let (added, remaining): (Vec<T>, Vec<T>) = self
            .candidates
            .iter()
            .cloned()
            .partition(|candidate| requested.contains(&candidate.id()));

        if added.is_empty() {
            return None;
        }

        let pending = self.snapshot(added.iter().map(StoreEntity::id).collect());

        self.items.extend(added);
        self.candidates = remaining;
        self.in_flight += 1;

        Some(pending)
    }

    /// Optimistically return `entities` from the active collection to the candidates.
    ///
    /// Entities not currently in the active collection are ignored. Returns `None` when nothing
    /// moved.
    pub fn begin_remove(&mut self, entities: &[T]) -> Option<PendingMutation<T>> {
        let requested: HashSet<i32> = entities.iter().map(StoreEntity::id).collect();
        let (removed, kept): (Vec<T>, Vec<T>) = self
            .items
            .iter()
            .cloned()
            .partition(|item| requested.contains(&item.id()));

        if removed.is_empty() {
            return None;
        }

        let pending = self.snapshot(removed.iter().map(StoreEntity::id).collect());

        self.items = kept;
        self.candidates.extend(removed);
        self.in_flight += 1;

        Some(pending)
    }

    /// Resolve a pending mutation with the server's result.
    ///
    /// Success keeps the optimistic state as is. Failure restores the snapshot taken by
    /// `begin_*`, unless the store has since been rebound or refetched, and hands the error back
    /// for inline display.
    pub fn settle(
        &mut self,
        pending: PendingMutation<T>,
        result: Result<(), FieldErrorDto>,
    ) -> Result<(), FieldErrorDto> {
        let current = pending.tenant == self.tenant && pending.epoch == self.epoch;
        if current {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let Err(err) = result else {
            return Ok(());
        };

        if current {
            self.items = pending.items;
            self.candidates = pending.candidates;
        } else {
            tracing::debug!(
                ids = ?pending.ids,
                "Mutation failed after the store was rebound, skipping rollback"
            );
        }

        Err(err)
    }

    /// Load both collections unless already fetched for the bound tenant.
    pub async fn fetch<A: CollectionApi<T>>(&mut self, api: &A) -> Result<(), FieldErrorDto> {
        let Some(ticket) = self.begin_fetch() else {
            return Ok(());
        };

        let items = api.fetch_items().await?;
        let candidates = api.fetch_candidates().await?;
        self.apply_fetch(ticket, items, candidates);

        Ok(())
    }

    /// Optimistically add `ids`, rolling back if the server rejects the change.
    pub async fn add<A: CollectionApi<T>>(
        &mut self,
        api: &A,
        ids: &[i32],
    ) -> Result<(), FieldErrorDto> {
        let Some(pending) = self.begin_add(ids) else {
            return Ok(());
        };

        let result = api.add(pending.ids()).await;
        self.settle(pending, result)
    }

    /// Optimistically remove `entities`, rolling back if the server rejects the change.
    pub async fn remove<A: CollectionApi<T>>(
        &mut self,
        api: &A,
        entities: &[T],
    ) -> Result<(), FieldErrorDto> {
        let Some(pending) = self.begin_remove(entities) else {
            return Ok(());
        };

        let result = api.remove(pending.ids()).await;
        self.settle(pending, result)
    }

    /// Active collection and candidates are disjoint and each free of duplicate ids.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .chain(self.candidates.iter())
            .all(|entity| seen.insert(entity.id()))
    }

    fn snapshot(&self, ids: Vec<i32>) -> PendingMutation<T> {
        PendingMutation {
            tenant: self.tenant,
            epoch: self.epoch,
            ids,
            items: self.items.clone(),
            candidates: self.candidates.clone(),
        }
    }
}
