//! Application-level utilities for the hashgen CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Config path resolution

mod context;
mod resolver;

pub use context::AppContext;
