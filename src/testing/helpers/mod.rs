//! Test helper functions and utilities

pub mod assertions;

pub use assertions::*;
