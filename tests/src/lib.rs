//! Shared helpers for the lockbox integration tests and benchmarks


use lockbox_engine::KeyMaterial;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber
///
/// Honors `RUST_LOG`; output goes through the test harness capture.
/// Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `N` bytes counting up from zero
pub fn counting<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    for (i, b) in out.iter_mut().enumerate() {
        *b = i as u8;
    }
    out
}

/// Key `00..1f` with IV `00..0f`
pub fn counting_material() -> KeyMaterial {
    KeyMaterial::new(counting::<32>(), counting::<16>())
}

/// Deterministic CSPRNG for reproducible key material
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a hex literal
///
/// # Panics
///
/// Panics on malformed hex; only meant for literals in tests.
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex literal {s:?}: {e}"))
}
