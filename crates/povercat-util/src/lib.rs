//! Shared utilities for povercat.
//!
//! This crate provides the cross-cutting concerns used by the other povercat
//! crates: the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
