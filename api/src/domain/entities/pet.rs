//! Pet record
//!
//! A persisted animal with a store-assigned identifier. Records are created
//! only through the pet service after validation and never mutated.

use serde::Serialize;

use crate::domain::entities::{Animal, Species};

/// A pet as stored by the pet store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub species: Species,
}

/// Data needed to store a new pet
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub age: i32,
    pub species: Species,
}

impl From<&Animal> for NewPet {
    fn from(animal: &Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            age: animal.age(),
            species: animal.species(),
        }
    }
}
