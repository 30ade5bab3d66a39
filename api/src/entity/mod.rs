//! SeaORM entities
//!
//! Database table models, separate from the domain entities in `domain`.

pub mod pets;
