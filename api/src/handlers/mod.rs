//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod pets;

pub use pets::{create_pet, get_oldest_pet, get_pet, list_pets};
