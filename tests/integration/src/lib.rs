//! Integration test utilities for chirp
//!
//! This crate provides an in-memory entity store implementing every
//! repository trait, with injectable failures and latency, and fixtures
//! that wire it into a `ServiceContext` driven by a fixed clock.

pub mod fixtures;

pub use fixtures::*;
pub use memory::{Fault, MemoryStore};
