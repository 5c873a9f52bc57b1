//! Key file provisioning against a temporary directory

use std::fs;

use lockbox_engine::store::{IV_FILE_NAME, KEY_FILE_NAME};
use lockbox_engine::{Engine, EngineConfig, Error, KeyMaterial, KeyStore};
use lockbox_tests::{counting_material, init_tracing, seeded_rng};
use tempfile::tempdir;

#[test]
fn missing_files_load_as_none() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    assert!(!store.key_path().exists());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn default_file_names() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    assert_eq!(store.key_path(), dir.path().join(KEY_FILE_NAME));
    assert_eq!(store.iv_path(), dir.path().join(IV_FILE_NAME));
    assert_eq!(KEY_FILE_NAME, "aes_key.bin");
    assert_eq!(IV_FILE_NAME, "aes_iv.bin");
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    let material = KeyMaterial::generate_with(&mut seeded_rng(1));

    store.save(&material).unwrap();
    assert!(store.key_path().is_file());
    assert!(store.iv_path().is_file());
    assert_eq!(fs::read(store.key_path()).unwrap().len(), 32);
    assert_eq!(fs::read(store.iv_path()).unwrap().len(), 16);
    assert_eq!(store.load().unwrap(), Some(material));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path().join("nested").join("keys"));
    store.save(&counting_material()).unwrap();
    assert_eq!(store.load().unwrap(), Some(counting_material()));
}

#[cfg(unix)]
#[test]
fn saved_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    store.save(&counting_material()).unwrap();

    let mode = fs::metadata(store.key_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn truncated_files_load_as_none() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());

    fs::write(store.key_path(), [7u8; 31]).unwrap();
    fs::write(store.iv_path(), [7u8; 16]).unwrap();
    assert_eq!(store.load().unwrap(), None);

    fs::write(store.key_path(), [7u8; 32]).unwrap();
    fs::write(store.iv_path(), [7u8; 15]).unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn trailing_bytes_are_ignored() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());

    let mut key = vec![0x11u8; 32];
    key.extend_from_slice(b"trailing");
    fs::write(store.key_path(), &key).unwrap();
    fs::write(store.iv_path(), [0x22u8; 20]).unwrap();

    assert_eq!(
        store.load().unwrap(),
        Some(KeyMaterial::new([0x11; 32], [0x22; 16]))
    );
}

#[test]
fn load_or_generate_persists_across_engines() {
    init_tracing();
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());

    let mut first = Engine::new(EngineConfig::default());
    first.load_or_generate(&store).unwrap();
    assert!(store.key_path().is_file() && store.iv_path().is_file());
    let sealed = first.encrypt("remember me").unwrap();

    let mut second = Engine::new(EngineConfig::default());
    second.load_or_generate(&store).unwrap();
    assert_eq!(second.material().unwrap(), first.material().unwrap());
    assert_eq!(second.decrypt(&sealed).unwrap(), "remember me");
}

#[test]
fn load_or_generate_replaces_truncated_files() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    fs::write(store.key_path(), [1u8; 10]).unwrap();

    let material = store.load_or_generate().unwrap();
    assert_eq!(store.load().unwrap(), Some(material));
}

#[test]
fn clear_removes_files() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    store.save(&counting_material()).unwrap();

    store.clear().unwrap();
    assert!(!store.key_path().exists());
    assert!(!store.iv_path().exists());
    assert_eq!(store.load().unwrap(), None);

    // already gone
    store.clear().unwrap();
}

#[test]
fn explicit_paths() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path().join("k"), dir.path().join("v"));
    store.save(&counting_material()).unwrap();
    assert!(dir.path().join("k").is_file());
    assert!(dir.path().join("v").is_file());
}

#[test]
fn failed_save_keeps_previous_pair() {
    init_tracing();
    let dir = tempdir().unwrap();
    let key_path = dir.path().join("key");
    let old = KeyMaterial::generate_with(&mut seeded_rng(2));
    KeyStore::new(&key_path, dir.path().join("iv"))
        .save(&old)
        .unwrap();

    // the IV's parent is a regular file, so its directory cannot be created
    fs::write(dir.path().join("blocker"), b"not a directory").unwrap();
    let broken = KeyStore::new(&key_path, dir.path().join("blocker").join("iv"));
    let new = KeyMaterial::generate_with(&mut seeded_rng(3));

    assert!(matches!(broken.save(&new), Err(Error::KeyStore { .. })));
    assert_eq!(fs::read(&key_path).unwrap(), old.key().as_slice());

    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["blocker", "iv", "key"]);
}

#[test]
fn save_replaces_existing_pair() {
    let dir = tempdir().unwrap();
    let store = KeyStore::in_dir(dir.path());
    store.save(&KeyMaterial::generate_with(&mut seeded_rng(4))).unwrap();

    let replacement = KeyMaterial::generate_with(&mut seeded_rng(5));
    store.save(&replacement).unwrap();
    assert_eq!(store.load().unwrap(), Some(replacement));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}
