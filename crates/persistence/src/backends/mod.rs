//! Repository implementations.
//!
//! # Available Backends
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | Memory | [`memory`] | Read-only vector seeded at start-up |

pub mod memory;
