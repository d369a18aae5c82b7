//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying derived
//! digests in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{digests_json, watch_event_json};
pub use text::{field_value, render_digests, render_watch_event};
