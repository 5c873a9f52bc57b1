//! End-to-end tests of the engine facade through the public crates

use std::sync::Arc;
use std::thread;

use lockbox_algorithms::{base64, Cbc, LegacyAes256};
use lockbox_api::Error;
use lockbox_engine::{
    generate_random_bytes, generate_salt, BlockTransform, Engine, EngineConfig, KeyMaterial,
};
use lockbox_tests::vectors::{
    DERIVED_PASSWORD_1000, HELLO_DERIVED, HELLO_FIXED, HELLO_FIXED_FIPS197, SIXTEEN_A_FIXED,
    VAULT_ENTRY_FIXED,
};
use lockbox_tests::{counting, counting_material, init_tracing, seeded_rng, unhex};

#[test]
fn legacy_engine_matches_recorded_vectors() {
    init_tracing();
    let engine = Engine::with_material(EngineConfig::legacy(), counting_material()).unwrap();

    assert_eq!(engine.encrypt("Hello World").unwrap(), HELLO_FIXED);
    assert_eq!(engine.encrypt(&"A".repeat(16)).unwrap(), SIXTEEN_A_FIXED);
    assert_eq!(engine.decrypt(SIXTEEN_A_FIXED).unwrap(), "A".repeat(16));
    assert_eq!(engine.decrypt(VAULT_ENTRY_FIXED).unwrap(), "vault entry");
}

#[test]
fn legacy_engine_agrees_with_primitives() {
    let engine = Engine::with_material(EngineConfig::legacy(), counting_material()).unwrap();
    let sealed = base64::decode(&engine.encrypt("vault entry").unwrap()).unwrap();

    let cipher = LegacyAes256::new(&counting::<32>()).unwrap();
    let expected = Cbc::new(&cipher, &counting::<16>())
        .unwrap()
        .encrypt_padded(b"vault entry")
        .unwrap();
    assert_eq!(sealed, expected);
    assert_eq!(sealed, base64::decode(VAULT_ENTRY_FIXED).unwrap());
}

#[test]
fn fips197_engine_reads_only_its_own_output() {
    let config = EngineConfig::legacy().with_transform(BlockTransform::Fips197);
    let fips = Engine::with_material(config, counting_material()).unwrap();
    let legacy = Engine::with_material(EngineConfig::legacy(), counting_material()).unwrap();

    assert_eq!(fips.encrypt("Hello World").unwrap(), HELLO_FIXED_FIPS197);
    assert_eq!(fips.decrypt(HELLO_FIXED_FIPS197).unwrap(), "Hello World");
    assert!(fips.decrypt(HELLO_FIXED).is_err());
    assert!(legacy.decrypt(HELLO_FIXED_FIPS197).is_err());
}

#[test]
fn password_derivation_end_to_end() {
    init_tracing();
    let salt = counting::<16>();

    let material = KeyMaterial::derive(b"password", &salt, 1000).unwrap();
    let derived = unhex(DERIVED_PASSWORD_1000);
    assert_eq!(material.key().as_slice(), &derived[..32]);
    assert_eq!(material.iv().as_slice(), &derived[32..]);

    let mut engine = Engine::new(EngineConfig::legacy().with_kdf_iterations(1000));
    engine.derive_from_password("password", &salt).unwrap();
    assert_eq!(engine.encrypt("Hello World").unwrap(), HELLO_DERIVED);
    assert_eq!(engine.decrypt(HELLO_DERIVED).unwrap(), "Hello World");
}

#[test]
fn different_passwords_or_salts_give_different_keys() {
    let salt = counting::<16>();
    let a = KeyMaterial::derive(b"password", &salt, 100).unwrap();
    let b = KeyMaterial::derive(b"passwore", &salt, 100).unwrap();
    let c = KeyMaterial::derive(b"password", &[0xff; 16], 100).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, KeyMaterial::derive(b"password", &salt, 100).unwrap());
}

#[test]
fn per_message_engines_share_material() {
    let mut rng = seeded_rng(7);
    let material = KeyMaterial::generate_with(&mut rng);

    let writer = Engine::with_material(EngineConfig::default(), material.clone()).unwrap();
    let reader = Engine::with_material(EngineConfig::default(), material).unwrap();

    let sealed = writer.encrypt("shared secret").unwrap();
    assert_eq!(reader.decrypt(&sealed).unwrap(), "shared secret");
}

#[test]
fn iv_policies_do_not_interoperate() {
    let fixed = Engine::with_material(EngineConfig::legacy(), counting_material()).unwrap();
    let per_message =
        Engine::with_material(EngineConfig::default(), counting_material()).unwrap();

    // "Hello World" under a fixed IV is a single block, too short to carry an IV
    assert_eq!(
        per_message.decrypt(HELLO_FIXED),
        Err(Error::DecryptionFailed { context: "decrypt" })
    );

    let sealed = per_message.encrypt("Hello World").unwrap();
    assert_ne!(fixed.decrypt(&sealed).ok().as_deref(), Some("Hello World"));
}

#[test]
fn shared_engine_across_threads() {
    let engine =
        Arc::new(Engine::with_material(EngineConfig::default(), counting_material()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let text = format!("entry {i}");
                let sealed = engine.encrypt(&text).unwrap();
                assert_eq!(engine.decrypt(&sealed).unwrap(), text);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn random_helpers() {
    assert_eq!(generate_random_bytes(48).unwrap().len(), 48);
    assert!(generate_random_bytes(0).unwrap().is_empty());
    assert_ne!(generate_salt().unwrap(), generate_salt().unwrap());
}

#[test]
fn error_messages_do_not_leak_input() {
    let engine = Engine::with_material(EngineConfig::legacy(), counting_material()).unwrap();
    let err = engine.decrypt("c2VjcmV0IGlucHV0").unwrap_err();
    let message = err.to_string();
    assert!(!message.contains("c2VjcmV0"));
    assert_eq!(err, Error::DecryptionFailed { context: "decrypt" });
}
