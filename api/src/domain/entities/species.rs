//! Species registry
//!
//! The closed set of animal kinds the system recognizes, with their stable
//! integer codes and the subset eligible for storage as pets.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An animal species known to the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Shark,
    Lion,
}

impl Species {
    /// Species that may be stored as pets
    pub const STORABLE: [Species; 3] = [Species::Dog, Species::Cat, Species::Bird];

    /// Stable integer code used in the database and on the wire
    pub fn code(self) -> i32 {
        match self {
            Species::Dog => 1,
            Species::Cat => 2,
            Species::Bird => 3,
            Species::Shark => 4,
            Species::Lion => 5,
        }
    }

    /// Look up a species by its integer code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Species::Dog),
            2 => Some(Species::Cat),
            3 => Some(Species::Bird),
            4 => Some(Species::Shark),
            5 => Some(Species::Lion),
            _ => None,
        }
    }

    /// Whether this species may be stored as a pet
    pub fn is_storable(self) -> bool {
        matches!(self, Species::Dog | Species::Cat | Species::Bird)
    }

    /// Whether an integer code belongs to the storable subset.
    /// Total over all integers; unknown codes are simply not storable.
    #[allow(dead_code)]
    pub fn code_is_storable(code: i32) -> bool {
        Species::from_code(code).is_some_and(Species::is_storable)
    }

    /// The storable subset rendered for error messages
    pub fn storable_names() -> String {
        Species::STORABLE
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Dog => write!(f, "dog"),
            Species::Cat => write!(f, "cat"),
            Species::Bird => write!(f, "bird"),
            Species::Shark => write!(f, "shark"),
            Species::Lion => write!(f, "lion"),
        }
    }
}

impl std::str::FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            "bird" => Ok(Species::Bird),
            "shark" => Ok(Species::Shark),
            "lion" => Ok(Species::Lion),
            _ => Err(DomainError::InvalidSpecies(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Species::Dog.code(), 1);
        assert_eq!(Species::Cat.code(), 2);
        assert_eq!(Species::Bird.code(), 3);
        assert_eq!(Species::Shark.code(), 4);
        assert_eq!(Species::Lion.code(), 5);
    }

    #[test]
    fn from_code_round_trips() {
        for species in [
            Species::Dog,
            Species::Cat,
            Species::Bird,
            Species::Shark,
            Species::Lion,
        ] {
            assert_eq!(Species::from_code(species.code()), Some(species));
        }
    }

    #[test]
    fn from_code_unknown() {
        assert_eq!(Species::from_code(0), None);
        assert_eq!(Species::from_code(6), None);
        assert_eq!(Species::from_code(-1), None);
    }

    #[test]
    fn storable_subset() {
        assert!(Species::Dog.is_storable());
        assert!(Species::Cat.is_storable());
        assert!(Species::Bird.is_storable());
        assert!(!Species::Shark.is_storable());
        assert!(!Species::Lion.is_storable());
    }

    #[test]
    fn code_is_storable_total_over_integers() {
        assert!(Species::code_is_storable(1));
        assert!(Species::code_is_storable(2));
        assert!(Species::code_is_storable(3));
        assert!(!Species::code_is_storable(4));
        assert!(!Species::code_is_storable(5));
        // Unknown codes are not storable, not an error
        assert!(!Species::code_is_storable(0));
        assert!(!Species::code_is_storable(42));
        assert!(!Species::code_is_storable(-7));
    }

    #[test]
    fn from_str_case_insensitive() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("DOG".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("Cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("bIrD".parse::<Species>().unwrap(), Species::Bird);
        assert_eq!("SHARK".parse::<Species>().unwrap(), Species::Shark);
        assert_eq!("Lion".parse::<Species>().unwrap(), Species::Lion);
    }

    #[test]
    fn from_str_unknown_names_input() {
        let err = "dragon".parse::<Species>().unwrap_err();
        assert!(err.to_string().contains("dragon"));
    }

    #[test]
    fn storable_names_lists_all_pets() {
        assert_eq!(Species::storable_names(), "dog, cat, bird");
    }
}
