use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use hashgen_core::primitive::Sha256Primitive;
use hashgen_core::{Deriver, HashPrimitive, LatestDeriver, Session, Transition};

/// SHA-256 that stalls on inputs starting with "slow".
struct SlowPrimitive;

impl HashPrimitive for SlowPrimitive {
    fn name(&self) -> &'static str {
        "slow-sha256"
    }

    fn digest_len(&self) -> usize {
        32
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        if data.starts_with(b"slow") {
            sleep(Duration::from_millis(50));
        }
        Sha256Primitive.hash(data)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_earlier_result_never_overwrites_newer() {
    let deriver = Deriver::new(Arc::new(SlowPrimitive));
    let runner = LatestDeriver::new(deriver.clone());

    runner.submit_pair("slow-first", "");
    let second = runner.submit_pair("fast", "");

    let snapshot = runner.settle().await;
    assert_eq!(snapshot.generation, second);
    assert_eq!(snapshot.digests, deriver.derive_pair("fast", ""));

    // Give the stalled task time to finish; it must not publish.
    tokio::time::sleep(Duration::from_millis(120)).await;
    let after = runner.snapshot();
    assert_eq!(after.generation, second);
    assert_eq!(after.digests, deriver.derive_pair("fast", ""));
    assert_ne!(after.digests, deriver.derive_pair("slow-first", ""));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_burst_of_edits_settles_on_last() {
    let deriver = Deriver::sha256();
    let runner = LatestDeriver::new(deriver.clone());

    let mut typed = String::new();
    let mut last = 0;
    for c in "correct horse battery staple".chars() {
        typed.push(c);
        last = runner.submit_pair(&typed, "salt");
    }

    let snapshot = runner.settle().await;
    assert_eq!(snapshot.generation, last);
    assert_eq!(snapshot.digests, deriver.derive_pair(&typed, "salt"));
    assert!(!runner.is_pending());
}

#[tokio::test]
async fn test_subscribers_only_see_increasing_generations() {
    let runner = LatestDeriver::new(Deriver::sha256());
    let mut rx = runner.subscribe();

    runner.submit_pair("a", "");
    let first = runner.settle().await;
    runner.submit_pair("ab", "");
    let second = runner.settle().await;

    assert!(second.generation > first.generation);
    rx.changed().await.expect("sender should be alive");
    assert_eq!(rx.borrow_and_update().generation, second.generation);
}

#[tokio::test]
async fn test_clearing_both_fields_publishes_empty_and_session_goes_idle() {
    let runner = LatestDeriver::new(Deriver::sha256());
    let mut session = Session::default();

    runner.submit_pair("hello", "world");
    let computed = runner.settle().await;
    assert_eq!(session.apply(computed.digests), Transition::Computed);

    runner.submit_pair("", "");
    let cleared = runner.settle().await;
    assert!(cleared.digests.is_empty());
    assert_eq!(session.apply(cleared.digests), Transition::Cleared);
}
