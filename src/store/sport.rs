use crate::{model::sport::SportDto, store::optimistic::{OptimisticStore, StoreEntity}};

/// The bound academy's selected sports, with the remaining catalogue as candidates.
pub type SportStore = OptimisticStore<SportDto>;

impl StoreEntity for SportDto {
    fn id(&self) -> i32 {
        self.id
    }
}
