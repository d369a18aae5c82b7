use hashgen_core::{probe, Algorithm, DerivationInput, Deriver, Digests};

fn sha256_deriver() -> Deriver {
    Deriver::new(probe(Algorithm::Sha256).expect("sha256 should pass its self test"))
}

#[test]
fn test_hello_world_pinned_vector() {
    let digests = sha256_deriver().derive_pair("hello", "world");
    assert_eq!(
        digests,
        Digests {
            full_hex: "55a3db6314a88ae7f97bdbc9133e215f32ee5c93a84d600a5a003ccd9d82c305"
                .to_string(),
            encoded_trimmed: "VaPbYxSoiuf5e9vJEz4hXzLu".to_string(),
            short_alnum: "Ex7d5HIImkWgH12w".to_string(),
        }
    );
}

#[test]
fn test_encoded_output_is_prefix_of_hex_digest_base64() {
    // The trimmed base-64 and the hex output come from the same primary digest.
    let digests = sha256_deriver().derive_pair("hello", "world");
    let bytes = hex::decode(&digests.full_hex).expect("hex should decode");
    use base64::Engine;
    let full = base64::engine::general_purpose::STANDARD.encode(bytes);
    assert!(full.starts_with(&digests.encoded_trimmed));
}

#[test]
fn test_determinism() {
    let deriver = sha256_deriver();
    let input = DerivationInput::new("correct horse", "battery staple");
    let first = deriver.derive(&input);
    for _ in 0..5 {
        assert_eq!(deriver.derive(&input), first);
    }
    assert_eq!(Deriver::sha256().derive(&input), first);
}

#[test]
fn test_empty_input_identity() {
    let digests = sha256_deriver().derive(&DerivationInput::new("", ""));
    assert!(digests.full_hex.is_empty());
    assert!(digests.encoded_trimmed.is_empty());
    assert!(digests.short_alnum.is_empty());
}

#[test]
fn test_single_character_edits_change_everything() {
    let deriver = sha256_deriver();
    let abc = deriver.derive_pair("abc", "");
    let abd = deriver.derive_pair("abd", "");
    assert_eq!(
        abc.full_hex,
        "39674985912ef8498ad99f2df9524c7ad24a9785f1cab66cd50e0c1f82988e25"
    );
    assert_eq!(
        abd.full_hex,
        "a46e0cfc3bc173c4fd42275624564fe78cc9d9c8911a4c6da58995eea8a50095"
    );
    assert_eq!(abc.short_alnum, "01n03Uw6ESc9gvvi");
    assert_eq!(abd.short_alnum, "5aTapNfYz3I8kLQd");

    let salted = deriver.derive_pair("abc", "x");
    assert_ne!(salted.full_hex, abc.full_hex);
    assert_ne!(salted.short_alnum, abc.short_alnum);
}

#[test]
fn test_split_point_vectors() {
    let deriver = sha256_deriver();
    let left = deriver.derive_pair("ab", "c");
    let right = deriver.derive_pair("a", "bc");
    assert!(left.full_hex.starts_with("cdb8a990"));
    assert!(right.full_hex.starts_with("47490949"));
    assert_eq!(left.encoded_trimmed, "zbipkEz8xm5yNCYXSIeCW5/I");
    assert_eq!(right.short_alnum, "e9caWp3IhbbbR7vW");
}

#[test]
fn test_separator_collision_is_preserved() {
    let deriver = sha256_deriver();
    assert_eq!(
        deriver.derive_pair("a|b", "c"),
        deriver.derive_pair("a", "b|c")
    );
}

#[test]
fn test_unicode_input_uses_utf8_bytes() {
    let digests = sha256_deriver().derive_pair("pässwörd", "\u{1F9C2}");
    assert_eq!(
        digests.full_hex,
        "1634eb7b01bb3410c8f01876262538225e3dc40978687e1da0a26e9d9702733d"
    );
    assert_eq!(digests.encoded_trimmed, "FjTrewG7NBDI8Bh2JiU4Il49");
    assert_eq!(digests.short_alnum, "AqtWxO75vjhEJEck");
}

#[test]
fn test_long_input() {
    let passphrase = "p".repeat(100_000);
    let digests = sha256_deriver().derive_pair(&passphrase, "salt");
    assert_eq!(digests.full_hex.len(), 64);
    assert_eq!(digests.encoded_trimmed.len(), 24);
    assert_eq!(digests.short_alnum.len(), 16);
}
