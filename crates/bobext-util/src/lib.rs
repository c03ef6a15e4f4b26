//! Shared utilities for bobext.
//!
//! This crate provides the cross-cutting pieces used by the other bobext
//! crates: the unified error type, order-preserving deduplication and
//! helpers for splitting search-path lists.

pub mod errors;
pub mod fs;

pub use fs::uniq;
