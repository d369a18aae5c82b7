//! # Hashgen Core
//!
//! Core library for hashgen - deterministic, shareable identifiers derived
//! from a passphrase and an optional salt.
//!
//! This crate holds the derivation logic independent of any presentation
//! layer. Nothing is stored or transmitted; every derivation is recomputed
//! from scratch.
//!
//! ## Architecture
//!
//! - **primitive**: Hash primitive trait, algorithms, startup self test
//! - **canonical**: `passphrase|salt` canonical input
//! - **encoding**: Hex, trimmed base-64, and mod-62 alphanumeric encodings
//! - **deriver**: The (passphrase, salt) -> three strings transform
//! - **session**: Idle/Computed recompute-on-edit state machine
//! - **latest**: Async latest-wins runner for interactive front ends

pub mod canonical;
pub mod deriver;
pub mod encoding;
pub mod error;
pub mod latest;
pub mod primitive;
pub mod session;

pub use canonical::DerivationInput;
pub use deriver::{Deriver, Digests};
pub use error::{HashgenError, Result};
pub use latest::{LatestDeriver, Snapshot};
pub use primitive::{probe, Algorithm, HashPrimitive};
pub use session::{Session, SessionState, Transition};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
