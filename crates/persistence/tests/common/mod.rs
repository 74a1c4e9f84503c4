//! Test infrastructure for the persistence layer.
//!
//! Record builders and page assertions shared by the integration tests.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
