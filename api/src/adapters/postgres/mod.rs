//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod pet_repo;

pub use pet_repo::PostgresPetRepository;
