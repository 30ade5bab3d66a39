//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod pet_service;
pub mod validation;

pub use pet_service::PetService;
pub use validation::{validate_pet_request, PetFields};
