//! Recompute-on-edit session.
//!
//! Two states: `Idle` (no input, outputs empty) and `Computed` (outputs
//! populated as a consistent triple). Every edit recomputes from scratch; the
//! only retained value is the last triple.

use crate::canonical::DerivationInput;
use crate::deriver::{Deriver, Digests};

/// Current state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Computed(Digests),
}

/// What an edit did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Idle (both fields still empty)
    StayedIdle,
    /// Idle -> Computed
    Computed,
    /// Computed -> Computed
    Recomputed,
    /// Computed -> Idle (both fields became empty)
    Cleared,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StayedIdle => "idle",
            Self::Computed => "computed",
            Self::Recomputed => "recomputed",
            Self::Cleared => "cleared",
        }
    }
}

/// A single interactive session over one deriver.
#[derive(Debug, Clone, Default)]
pub struct Session {
    deriver: Deriver,
    state: SessionState,
}

impl Session {
    pub fn new(deriver: Deriver) -> Self {
        Self {
            deriver,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Last computed triple, or the empty triple while idle.
    pub fn digests(&self) -> Digests {
        match &self.state {
            SessionState::Idle => Digests::empty(),
            SessionState::Computed(digests) => digests.clone(),
        }
    }

    /// Apply an edit by deriving synchronously.
    pub fn update(&mut self, passphrase: &str, salt: &str) -> Transition {
        let digests = self.deriver.derive_pair(passphrase, salt);
        self.apply(digests)
    }

    /// Apply an edit for input that was derived elsewhere (e.g. by the async
    /// runner).
    pub fn apply(&mut self, digests: Digests) -> Transition {
        let was_idle = matches!(self.state, SessionState::Idle);
        let transition = match (was_idle, digests.is_empty()) {
            (true, true) => Transition::StayedIdle,
            (true, false) => Transition::Computed,
            (false, false) => Transition::Recomputed,
            (false, true) => Transition::Cleared,
        };

        self.state = if digests.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Computed(digests)
        };
        tracing::trace!(transition = transition.as_str(), "session updated");
        transition
    }

    /// Apply an edit expressed as a [`DerivationInput`].
    pub fn update_input(&mut self, input: &DerivationInput) -> Transition {
        let digests = self.deriver.derive(input);
        self.apply(digests)
    }
}
