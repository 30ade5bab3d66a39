//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewPet, Pet};
use crate::domain::ports::PetRepository;
use crate::error::DomainError;

/// In-memory implementation of PetRepository
#[derive(Default)]
pub struct InMemoryPetRepository {
    pets: Arc<RwLock<Vec<Pet>>>,
    next_id: Arc<RwLock<i32>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        let repo = Self::default();
        *repo.should_fail.write().unwrap() = true;
        repo
    }

    /// Pre-populate with a pet for testing; keeps assigned ids ahead of
    /// the seeded ones
    pub fn with_pet(self, pet: Pet) -> Self {
        {
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(pet.id);

            let mut pets = self.pets.write().unwrap();
            pets.push(pet);
        }
        self
    }

    /// Number of stored pets (for asserting nothing was added)
    pub fn count(&self) -> usize {
        self.pets.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            Err(DomainError::Database("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError> {
        self.check_failure()?;

        let id = {
            let mut n = self.next_id.write().unwrap();
            *n += 1;
            *n
        };

        let pet = Pet {
            id,
            name: pet.name.clone(),
            age: pet.age,
            species: pet.species,
        };

        let mut pets = self.pets.write().unwrap();
        pets.push(pet.clone());
        Ok(pet)
    }

    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        self.check_failure()?;

        Ok(self.pets.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DomainError> {
        self.check_failure()?;

        let pets = self.pets.read().unwrap();
        Ok(pets.iter().find(|p| p.id == id).cloned())
    }

    async fn find_oldest(&self) -> Result<Option<Pet>, DomainError> {
        self.check_failure()?;

        let pets = self.pets.read().unwrap();
        let mut sorted: Vec<Pet> = pets.clone();
        sorted.sort_by(|a, b| b.age.cmp(&a.age).then(a.id.cmp(&b.id)));
        Ok(sorted.into_iter().next())
    }
}
