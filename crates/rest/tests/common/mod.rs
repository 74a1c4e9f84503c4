//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over a seeded in-memory backend
//! - [`assertions`] - Response body assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
