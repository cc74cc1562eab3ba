//! Integration test utilities for the credential service
//!
//! This crate provides helpers for wiring configuration, stores, and the
//! service together the way an embedding application would.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
