//! # Corsair Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Scripted world fixture implementing every engine-facing trait
//! - Recording action sink and mission lifecycle log
//! - Fixed-point fixture helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod scenario;

/// Re-export proptest for convenience.
pub use proptest;
