//! Testing utilities and fixtures
//!
//! Sample record sets and builders shared by unit tests, integration tests
//! and benchmarks.

pub mod fixtures;
pub mod helpers;

pub use fixtures::builders::{EmployeeBuilder, OrderBuilder, ProjectBuilder};
pub use fixtures::Fixtures;
