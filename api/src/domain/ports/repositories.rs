//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewPet, Pet};
use crate::error::DomainError;

/// Repository for Pet records
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Persist a new pet and return it with its store-assigned id
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError>;

    /// Fetch every stored pet
    async fn find_all(&self) -> Result<Vec<Pet>, DomainError>;

    /// Fetch a pet by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DomainError>;

    /// Fetch the pet with the greatest age; ties break toward the lowest id
    async fn find_oldest(&self) -> Result<Option<Pet>, DomainError>;
}
