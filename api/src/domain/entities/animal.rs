//! Animal value
//!
//! An in-memory animal with a name, an age, and a species, independent of
//! persistence. Per-species behavior is a total match over [`Species`]
//! rather than a type hierarchy, so a missing variant fails the build.

use crate::domain::entities::Species;
use crate::error::DomainError;

/// An animal constructed from request data. Immutable after construction:
/// the species always matches the name it was requested with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    age: i32,
    species: Species,
}

impl Animal {
    /// Build an animal from a species name, matched case-insensitively
    /// against the five known species. Unknown names fail with
    /// [`DomainError::InvalidSpecies`].
    pub fn new(
        name: impl Into<String>,
        age: i32,
        species_name: &str,
    ) -> Result<Self, DomainError> {
        let species: Species = species_name.parse()?;

        Ok(Self {
            name: name.into(),
            age,
            species,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// What this animal says
    #[allow(dead_code)]
    pub fn speak(&self) -> &'static str {
        match self.species {
            Species::Dog => "Woof!",
            Species::Cat => "Meow!",
            Species::Bird => "Chirp chirp!",
            Species::Shark => "I'm a shark! I don't speak!",
            Species::Lion => "Roar!",
        }
    }

    /// What this animal is up to
    #[allow(dead_code)]
    pub fn activity(&self) -> &'static str {
        match self.species {
            Species::Dog => "I'm playing and barking!",
            Species::Cat => "I'm playing and meowing!",
            Species::Bird => "I'm flying and chirping!",
            Species::Shark => "I'm swimming and eating fish!",
            Species::Lion => "I'm roaring and eating meat!",
        }
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is a {} year old {}.",
            self.name, self.age, self.species
        )
    }
}
