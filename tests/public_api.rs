//! End-to-end tests of the public cipher surface.
//!
//! These pin down the engine's documented behavior: deterministic
//! ECB-equivalent output, the silent zero-padding of non-aligned input,
//! key avalanche, and the failure taxonomy.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rondel::{decrypt, encrypt, generate_key, CipherError, Key, KEY_BYTES};

fn key_from(bytes: [u8; KEY_BYTES]) -> String {
    Key::from(bytes).to_transport()
}

#[test]
fn generated_key_is_transport_encoded_16_bytes() {
    let key = generate_key().unwrap();
    assert_eq!(STANDARD.decode(&key).unwrap().len(), KEY_BYTES);
}

#[test]
fn zero_key_testblok_round_trip() {
    let key = key_from([0u8; KEY_BYTES]);
    let ciphertext = encrypt("TESTBLOK", &key).unwrap();
    assert_eq!(decrypt(&ciphertext, &key).unwrap(), "TESTBLOK");
}

#[test]
fn aligned_input_round_trips_exactly() {
    let key = generate_key().unwrap();
    // 16 bytes of UTF-8, two whole blocks, no NULs
    let plaintext = "A 16 byte note!!";
    assert_eq!(plaintext.len() % 8, 0, "fixture must stay block-aligned");
    assert_eq!(decrypt(&encrypt(plaintext, &key).unwrap(), &key).unwrap(), plaintext);
}

#[test]
fn non_aligned_input_comes_back_nul_padded() {
    let key = generate_key().unwrap();
    let plaintext = "hello"; // 5 bytes
    let recovered = decrypt(&encrypt(plaintext, &key).unwrap(), &key).unwrap();
    assert_eq!(recovered, "hello\0\0\0");
    assert_eq!(recovered.len(), plaintext.len() + (8 - plaintext.len() % 8));
}

#[test]
fn multibyte_utf8_survives_the_round_trip() {
    let key = generate_key().unwrap();
    let plaintext = "ноты 🗒"; // 13 bytes, pads to 16
    let recovered = decrypt(&encrypt(plaintext, &key).unwrap(), &key).unwrap();
    assert_eq!(recovered.trim_end_matches('\0'), plaintext);
    assert_eq!(recovered.len(), plaintext.len() + 3);
}

#[test]
fn encryption_is_deterministic() {
    let key = key_from([0x42; KEY_BYTES]);
    assert_eq!(
        encrypt("same note, same key", &key).unwrap(),
        encrypt("same note, same key", &key).unwrap()
    );
}

#[test]
fn identical_blocks_leak_identical_ciphertext() {
    let key = generate_key().unwrap();
    let ciphertext = encrypt("TESTBLOKTESTBLOK", &key).unwrap();
    let bytes = STANDARD.decode(&ciphertext).unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytes[..8], bytes[8..]);
}

#[test]
fn key_avalanche_over_many_trials() {
    let mut rng = StdRng::seed_from_u64(0xA7A1A);
    let plaintext = "TESTBLOKTESTBLOKTESTBLOK"; // three identical blocks

    for _ in 0..64 {
        let mut bytes = [0u8; KEY_BYTES];
        rng.fill(&mut bytes);
        let base = STANDARD
            .decode(encrypt(plaintext, &key_from(bytes)).unwrap())
            .unwrap();

        let bit = rng.gen_range(0..KEY_BYTES * 8);
        bytes[bit / 8] ^= 1 << (bit % 8);
        let flipped = STANDARD
            .decode(encrypt(plaintext, &key_from(bytes)).unwrap())
            .unwrap();

        for (i, (a, b)) in base.chunks(8).zip(flipped.chunks(8)).enumerate() {
            assert_ne!(a, b, "block {i} unchanged after a single key bit flip");
        }
    }
}

#[test]
fn random_text_round_trips_under_random_keys() {
    let mut rng = StdRng::seed_from_u64(0xB10C5);
    for _ in 0..50 {
        let mut bytes = [0u8; KEY_BYTES];
        rng.fill(&mut bytes);
        let key = key_from(bytes);

        let len = rng.gen_range(0..200);
        let plaintext: String = (0..len).map(|_| rng.gen_range('a'..='z')).collect();

        let recovered = decrypt(&encrypt(&plaintext, &key).unwrap(), &key).unwrap();
        assert_eq!(recovered.trim_end_matches('\0'), plaintext);
    }
}

#[test]
fn invalid_ciphertext_encoding_is_a_decode_error() {
    let key = generate_key().unwrap();
    assert!(matches!(
        decrypt("not-valid-encoding!", &key),
        Err(CipherError::Decode)
    ));
}

#[test]
fn misaligned_ciphertext_is_a_decode_error() {
    let key = generate_key().unwrap();
    let four_bytes = STANDARD.encode([0u8; 4]);
    assert!(matches!(
        decrypt(&four_bytes, &key),
        Err(CipherError::Decode)
    ));
}

#[test]
fn short_key_is_a_key_format_error() {
    assert!(matches!(
        encrypt("x", "short"),
        Err(CipherError::KeyFormat)
    ));
    assert!(matches!(
        decrypt("", "short"),
        Err(CipherError::KeyFormat)
    ));
}

#[test]
fn username_as_key_is_a_key_format_error() {
    // The surrounding service historically passed usernames straight
    // through as key material; the engine rejects that at the boundary.
    assert!(matches!(
        encrypt("note body", "alice"),
        Err(CipherError::KeyFormat)
    ));
}
