//! Pet store service
//!
//! Orchestrates pet creation and queries over the repository port. Only the
//! storable species (dog, cat, bird) may be persisted; sharks and lions can
//! be constructed but are rejected here before anything touches storage.

use std::sync::Arc;

use crate::domain::entities::{Animal, NewPet, Pet, Species};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// Service for managing pets
pub struct PetService<R>
where
    R: PetRepository,
{
    pets: Arc<R>,
}

impl<R> PetService<R>
where
    R: PetRepository,
{
    pub fn new(pets: Arc<R>) -> Self {
        Self { pets }
    }

    /// Store an animal as a pet.
    ///
    /// Fails with [`DomainError::SpeciesNotStorable`] when the species is not
    /// in the storable subset. Either the record is stored with a fresh id or
    /// nothing is stored at all.
    pub async fn create_pet(&self, animal: &Animal) -> Result<Pet, DomainError> {
        if !animal.species().is_storable() {
            let err = DomainError::SpeciesNotStorable {
                species: animal.species().to_string(),
                allowed: Species::storable_names(),
            };
            tracing::error!("{}", err);
            return Err(err);
        }

        self.pets.create(&NewPet::from(animal)).await
    }

    /// Every stored pet.
    ///
    /// A storage failure degrades to an empty list; the error is logged but
    /// not surfaced to the caller.
    pub async fn get_all_pets(&self) -> Vec<Pet> {
        match self.pets.find_all().await {
            Ok(pets) => pets,
            Err(e) => {
                tracing::error!("failed to fetch pets: {}", e);
                Vec::new()
            }
        }
    }

    /// A single pet by id; absent when missing or on storage failure
    /// (same lossy convention as [`get_all_pets`](Self::get_all_pets)).
    pub async fn get_pet(&self, id: i32) -> Option<Pet> {
        match self.pets.find_by_id(id).await {
            Ok(pet) => pet,
            Err(e) => {
                tracing::error!("failed to fetch pet {}: {}", id, e);
                None
            }
        }
    }

    /// The pet with the greatest age, ties broken toward the lowest id.
    /// Fails with [`DomainError::EmptyStore`] when nothing has been stored;
    /// storage failures propagate.
    pub async fn get_oldest_pet(&self) -> Result<Pet, DomainError> {
        self.pets
            .find_oldest()
            .await?
            .ok_or(DomainError::EmptyStore)
    }
}
