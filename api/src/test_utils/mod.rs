//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository mirrors the PostgreSQL adapter's observable
//! behavior (monotonic ids, oldest-by-age with lowest-id tie-break) so the
//! service tests exercise the same contracts the real adapter honors.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
