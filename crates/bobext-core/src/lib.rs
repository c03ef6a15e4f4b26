//! Core types for bobext.
//!
//! This crate defines how search roots are derived: the per-OS platform
//! policy (default prefixes, include and library directories, library file
//! naming), user search configuration from `bobext.toml` and environment
//! variables, and the requirements-file loader.
//!
//! Everything here is synchronous and free of global state.

/// Name of the configuration file looked up by build scripts.
pub const CONFIG_FILE_NAME: &str = "bobext.toml";

pub mod config;
pub mod platform;
pub mod requirements;
