//! Serializable passthrough: bincode blobs stored as base64 strings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use typedprefs::{
    CorruptBlobPolicy, MemoryStore, Prefs, PrefsConfig, PrefsError, PrimitiveStore, Recovery,
    Vector3,
};

use crate::test_utils::{setup_prefs, RecordingObserver};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct SaveGame {
    slot: u8,
    player: String,
    position: Vector3,
    inventory: BTreeMap<String, u32>,
}

fn save_game() -> SaveGame {
    let mut inventory = BTreeMap::new();
    inventory.insert("potion".to_string(), 3);
    inventory.insert("key".to_string(), 1);
    SaveGame {
        slot: 2,
        player: "ada".to_string(),
        position: Vector3::new(10.0, 0.5, -4.25),
        inventory,
    }
}

#[test]
fn test_round_trip() {
    let prefs = setup_prefs();
    prefs.set_serializable("save", &save_game()).unwrap();

    assert_eq!(
        prefs.get_serializable("save", SaveGame::default()).unwrap(),
        save_game()
    );
}

#[test]
fn test_stored_as_base64_string() {
    let prefs = setup_prefs();
    prefs.set_serializable("save", &save_game()).unwrap();

    let raw = prefs.store().get_string("save", "");
    assert!(!raw.is_empty());
    assert!(raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
}

#[test]
fn test_unsized_values() {
    let prefs = setup_prefs();
    prefs.set_serializable("tags", &["a", "b"][..]).unwrap();

    assert_eq!(
        prefs
            .get_serializable("tags", Vec::<String>::new())
            .unwrap(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_absent_returns_default_without_decoding() {
    let prefs = setup_prefs();
    assert_eq!(
        prefs.get_serializable("save", save_game()).unwrap(),
        save_game()
    );

    prefs.store().set_string("save", "");
    assert_eq!(
        prefs.get_serializable("save", save_game()).unwrap(),
        save_game()
    );
}

#[test]
fn test_corrupt_blob_propagates() {
    let prefs = setup_prefs();
    assert_eq!(prefs.blob_policy(), CorruptBlobPolicy::Propagate);
    prefs.store().set_string("save", "(1.000, 2.000)");

    let err = prefs
        .get_serializable("save", SaveGame::default())
        .unwrap_err();
    assert!(matches!(err, PrefsError::CorruptBlob { .. }));
    assert!(err.to_string().contains("\"save\""));
    assert!(prefs.has_key("save"));
}

#[test]
fn test_corrupt_blob_self_heal() {
    let observer = Arc::new(RecordingObserver::default());
    let prefs = Prefs::with_config(
        Arc::new(MemoryStore::new()),
        &PrefsConfig::new().blob_policy(CorruptBlobPolicy::SelfHeal),
    )
    .with_observer(observer.clone());
    prefs.store().set_string("save", "@@@@");

    assert_eq!(
        prefs.get_serializable("save", save_game()).unwrap(),
        save_game()
    );
    assert!(!prefs.has_key("save"));

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].raw, "@@@@");
    assert_eq!(events[0].recovery, Recovery::KeyDeleted);
}

#[test]
fn test_blob_and_typed_paths_are_independent() {
    let prefs = setup_prefs();
    prefs.set_serializable("pos", &Vector3::new(1.0, 2.0, 3.0)).unwrap();

    // The typed path sees a non-tuple string and purges it
    assert_eq!(prefs.get("pos", Vector3::ZERO), Vector3::ZERO);
    assert!(!prefs.has_key("pos"));
}
