//! JSON output formatting for digests.

use hashgen_core::{Digests, Transition};

/// Convert a derived triple to JSON for output.
pub fn digests_json(digests: &Digests, algorithm: &str) -> serde_json::Value {
    serde_json::json!({
        "algorithm": algorithm,
        "empty": digests.is_empty(),
        "short_alnum": digests.short_alnum,
        "encoded_trimmed": digests.encoded_trimmed,
        "full_hex": digests.full_hex,
    })
}

/// One `watch` event as a JSON line.
pub fn watch_event_json(
    generation: u64,
    transition: Transition,
    digests: &Digests,
    algorithm: &str,
) -> serde_json::Value {
    let mut value = digests_json(digests, algorithm);
    value["generation"] = serde_json::json!(generation);
    value["state"] = serde_json::json!(transition.as_str());
    value
}
