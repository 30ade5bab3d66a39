//! PostgreSQL adapter for PetRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{NewPet, Pet, Species};
use crate::domain::ports::PetRepository;
use crate::entity::pets;
use crate::error::DomainError;

/// PostgreSQL implementation of PetRepository
pub struct PostgresPetRepository {
    db: DatabaseConnection,
}

impl PostgresPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PostgresPetRepository {
    async fn create(&self, pet: &NewPet) -> Result<Pet, DomainError> {
        let model = pets::ActiveModel {
            name: Set(pet.name.clone()),
            age: Set(pet.age),
            species: Set(pet.species.code()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        let results = pets::Entity::find()
            .order_by_asc(pets::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DomainError> {
        let result = pets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_oldest(&self) -> Result<Option<Pet>, DomainError> {
        let result = pets::Entity::find()
            .order_by_desc(pets::Column::Age)
            .order_by_asc(pets::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<pets::Model> for Pet {
    fn from(model: pets::Model) -> Self {
        Pet {
            id: model.id,
            name: model.name,
            age: model.age,
            // Stored rows only carry codes from the storable subset
            species: Species::from_code(model.species).unwrap_or(Species::Dog),
        }
    }
}
