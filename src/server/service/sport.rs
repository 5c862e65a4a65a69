//! Sport selection service for the bound academy.

use std::collections::BTreeSet;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::sport::SportDto,
    server::{
        data::sport::SportRepository,
        error::{sport::SportError, Error},
        model::db::SportModel,
    },
};

pub struct SportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SportService<'a> {
    /// Creates a new instance of [`SportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sports selected by the academy, ordered by ID
    pub async fn get_selected(&self, academy_id: i32) -> Result<Vec<SportDto>, Error> {
        let sport_repo = SportRepository::new(self.db);

        Ok(into_dtos(sport_repo.get_selected(academy_id).await?))
    }

    /// Sports the academy can still select, ordered by ID
    pub async fn get_available(&self, academy_id: i32) -> Result<Vec<SportDto>, Error> {
        let sport_repo = SportRepository::new(self.db);

        Ok(into_dtos(sport_repo.get_available(academy_id).await?))
    }

    /// Adds sports to the academy's selection.
    ///
    /// All sports are added or none: validation and insertion run in a single transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Every sport was added
    /// - `Err(Error::SportError(SportError::EmptySelection))` - No sport IDs were provided
    /// - `Err(Error::SportError(SportError::UnknownSports))` - Some IDs are not in the catalogue
    /// - `Err(Error::SportError(SportError::AlreadySelected))` - Some sports are already selected
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, academy_id: i32, sport_ids: &[i32]) -> Result<(), Error> {
        let sport_ids = unique(sport_ids)?;

        let txn = self.db.begin().await?;
        let sport_repo = SportRepository::new(&txn);

        let known: BTreeSet<i32> = sport_repo
            .find_by_ids(&sport_ids)
            .await?
            .into_iter()
            .map(|sport| sport.id)
            .collect();
        let unknown: Vec<i32> = sport_ids
            .iter()
            .copied()
            .filter(|id| !known.contains(id))
            .collect();
        if !unknown.is_empty() {
            return Err(SportError::UnknownSports(unknown).into());
        }

        let already_selected = sport_repo
            .get_selected_ids_among(academy_id, &sport_ids)
            .await?;
        if !already_selected.is_empty() {
            return Err(SportError::AlreadySelected(already_selected).into());
        }

        sport_repo.insert_selections(academy_id, &sport_ids).await?;
        txn.commit().await?;

        tracing::debug!(academy_id = %academy_id, sport_ids = ?sport_ids, "Added sports");

        Ok(())
    }

    /// Removes sports from the academy's selection.
    ///
    /// IDs that are not selected are ignored, so repeating a removal succeeds.
    pub async fn remove(&self, academy_id: i32, sport_ids: &[i32]) -> Result<(), Error> {
        let sport_ids = unique(sport_ids)?;

        let sport_repo = SportRepository::new(self.db);
        let removed = sport_repo.delete_selections(academy_id, &sport_ids).await?;

        tracing::debug!(
            academy_id = %academy_id,
            sport_ids = ?sport_ids,
            removed = %removed,
            "Removed sports"
        );

        Ok(())
    }
}

fn unique(sport_ids: &[i32]) -> Result<Vec<i32>, SportError> {
    if sport_ids.is_empty() {
        return Err(SportError::EmptySelection);
    }

    Ok(sport_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect())
}

fn into_dtos(sports: Vec<SportModel>) -> Vec<SportDto> {
    sports
        .into_iter()
        .map(|sport| SportDto {
            id: sport.id,
            name: sport.name,
        })
        .collect()
}
