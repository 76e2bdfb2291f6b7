use shroud_core::{AlphabetRegistry, Shroud, derive_rng};

#[test]
fn all_alphabets_roundtrip_in_both_key_regimes() {
    let registry = AlphabetRegistry::builtin();
    for spec in registry.entries() {
        let alphabet = registry.get(spec.name).expect("builtin alphabet");
        let key_len = alphabet.len() * 2;
        for (regime, text_len) in [("short-text", key_len / 2 + 3), ("long-text", key_len * 2)] {
            let label = format!("matrix::{}::{}", spec.name, regime);
            let mut rng = derive_rng(label.as_bytes());
            let key = alphabet.token_with_rng(key_len, &mut rng);
            let text = alphabet.token_with_rng(text_len, &mut rng);

            let mut cipher = Shroud::new(spec.name, &key).expect("cipher");

            let (ciphertext, signature) = cipher.encode_signed(&text).expect("encode");
            assert_eq!(
                ciphertext.chars().count(),
                text_len,
                "{label}: plain encode must preserve length"
            );
            assert_eq!(
                cipher.decode(&ciphertext).expect("decode"),
                text,
                "{label}: decode must restore the text"
            );
            assert!(cipher.verify(&signature), "{label}: signature must verify");

            let target = text_len * 3;
            let (padded, signature) = cipher
                .wencode_signed_with_rng(&text, target, &mut rng)
                .expect("wencode");
            assert_eq!(
                padded.chars().count(),
                target,
                "{label}: padded length must be exact"
            );
            assert_eq!(
                cipher.wdecode(&padded).expect("wdecode"),
                text,
                "{label}: wdecode must restore the text"
            );
            assert!(
                cipher.verify(&signature),
                "{label}: padded signature must verify"
            );
        }
    }
}

#[test]
fn shifted_key_never_matches_the_signature() {
    let registry = AlphabetRegistry::builtin();
    for spec in registry.entries() {
        let alphabet = registry.get(spec.name).expect("builtin alphabet");
        let radix = alphabet.len();
        let label = format!("shifted::{}", spec.name);
        let mut rng = derive_rng(label.as_bytes());
        let key = alphabet.token_with_rng(radix / 2 + 1, &mut rng);
        let text = alphabet.token_with_rng(radix + 5, &mut rng);

        let mut sender = Shroud::new(spec.name, &key).expect("cipher");
        let (ciphertext, signature) = sender.encode_signed(&text).expect("encode");

        // every key symbol moved one position, so every output symbol moves too
        let shifted: String = key
            .chars()
            .map(|symbol| {
                let position = alphabet.position(symbol).expect("key symbol");
                alphabet.symbols()[(position + 1) % radix]
            })
            .collect();
        let mut receiver = Shroud::new(spec.name, &shifted).expect("cipher");
        let decoded = receiver.decode(&ciphertext).expect("decode");
        assert_ne!(decoded, text, "{label}: wrong key must not recover the text");
        assert!(
            !receiver.verify(&signature),
            "{label}: signature must not verify under the wrong key"
        );
    }
}

#[test]
fn wdecode_without_envelope_yields_empty_across_alphabets() {
    // an index-zero key makes the reverse pass the identity, and the table
    // itself is duplicate free, so the marker scan can never find a pair
    let registry = AlphabetRegistry::builtin();
    for spec in registry.entries() {
        let alphabet = registry.get(spec.name).expect("builtin alphabet");
        let key: String = alphabet.symbols()[..1].iter().collect();
        let text: String = alphabet.symbols().iter().collect();
        let mut cipher = Shroud::new(spec.name, &key).expect("cipher");
        assert_eq!(
            cipher.wdecode(&text).expect("wdecode"),
            "",
            "unexpected payload for '{}'",
            spec.name
        );
    }
}
