//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Animal, Pet, Species};

/// Create a test animal with default values (a storable dog)
pub fn test_animal() -> Animal {
    Animal::new("Fido", 5, "dog").expect("known species")
}

/// Create a test animal of a specific species
pub fn test_animal_of(species_name: &str) -> Animal {
    Animal::new("Test", 3, species_name).expect("known species")
}

/// Create a test pet with a specific id and age
pub fn test_pet(id: i32, age: i32) -> Pet {
    Pet {
        id,
        name: format!("pet-{}", id),
        age,
        species: Species::Dog,
    }
}
