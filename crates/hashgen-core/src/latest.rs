//! Latest-wins asynchronous derivation.
//!
//! Each submitted edit gets a strictly increasing generation number. The
//! previous in-flight task is aborted, and a finished task only publishes if
//! its generation is still the newest one submitted. A superseded result is
//! dropped silently, so the published snapshot always corresponds to the
//! latest (passphrase, salt) pair once it settles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::canonical::DerivationInput;
use crate::deriver::{Deriver, Digests};

/// A published result together with the generation that produced it.
///
/// Generation 0 is the initial empty snapshot before any submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub digests: Digests,
}

/// Runs derivations on the tokio runtime, keeping only the newest result.
pub struct LatestDeriver {
    deriver: Deriver,
    latest: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Snapshot>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl LatestDeriver {
    pub fn new(deriver: Deriver) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self {
            deriver,
            latest: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
            in_flight: Mutex::new(None),
        }
    }

    /// Submit an edit and return its generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, input: DerivationInput) -> u64 {
        // Held across generation assignment and spawn so in-flight handles are
        // replaced in generation order.
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let deriver = self.deriver.clone();
        let latest = Arc::clone(&self.latest);
        let tx = Arc::clone(&self.tx);

        let handle = tokio::spawn(async move {
            tokio::task::yield_now().await;
            if latest.load(Ordering::SeqCst) != generation {
                tracing::trace!(generation, "superseded before start");
                return;
            }

            let digests = deriver.derive(&input);
            tokio::task::yield_now().await;

            if !publish(&tx, &latest, generation, digests) {
                tracing::trace!(generation, "superseded result discarded");
            }
        });

        if let Some(previous) = in_flight.replace(handle) {
            previous.abort();
        }
        tracing::debug!(generation, "derivation submitted");
        generation
    }

    /// Convenience wrapper over [`LatestDeriver::submit`].
    pub fn submit_pair(&self, passphrase: &str, salt: &str) -> u64 {
        self.submit(DerivationInput::new(passphrase, salt))
    }

    /// Generation of the most recent submission.
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Currently published snapshot (may lag the latest submission).
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// True while the published snapshot is older than the latest submission.
    pub fn is_pending(&self) -> bool {
        self.tx.borrow().generation < self.latest_generation()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Wait until the snapshot for the latest submission is published.
    pub async fn settle(&self) -> Snapshot {
        let mut rx = self.tx.subscribe();
        loop {
            let target = self.latest_generation();
            {
                let current = rx.borrow_and_update();
                if current.generation >= target {
                    return current.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.snapshot();
            }
        }
    }
}

impl Drop for LatestDeriver {
    fn drop(&mut self) {
        let in_flight = self
            .in_flight
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
    }
}

/// Publish `digests` only if `generation` is still the newest submission and
/// newer than what is already published.
fn publish(
    tx: &watch::Sender<Snapshot>,
    latest: &AtomicU64,
    generation: u64,
    digests: Digests,
) -> bool {
    tx.send_if_modified(|snapshot| {
        if latest.load(Ordering::SeqCst) != generation || snapshot.generation >= generation {
            return false;
        }
        *snapshot = Snapshot {
            generation,
            digests,
        };
        true
    })
}
