//! Malformed stored strings are deleted and the caller's default returned

use typedprefs::{
    PrimitiveStore, Quaternion, Recovery, Resolution, Vector2, Vector2Int, Vector3, Vector3Int,
    Vector4,
};

use crate::test_utils::{setup_observed, setup_prefs, Quality};

#[test]
fn test_garbage_vector3_is_purged() {
    let prefs = setup_prefs();
    prefs.store().set_string("pos", "garbage");

    assert_eq!(prefs.get("pos", Vector3::ZERO), Vector3::ZERO);
    assert!(!prefs.has_key("pos"));
}

#[test]
fn test_caller_default_not_zero_on_malformed() {
    let prefs = setup_prefs();
    prefs.store().set_string("pos", "(1, 2");

    let fallback = Vector3::new(5.0, 5.0, 5.0);
    assert_eq!(prefs.get("pos", fallback), fallback);
}

#[test]
fn test_malformed_read_is_idempotent() {
    let (prefs, observer) = setup_observed();
    prefs.store().set_string("res", "1920 by 1080");

    let fallback = Resolution::new(640, 480, 60);
    assert_eq!(prefs.get("res", fallback), fallback);
    assert!(!prefs.has_key("res"));
    assert_eq!(prefs.get("res", fallback), fallback);
    assert!(!prefs.has_key("res"));

    // Only the first read saw bad data
    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].key, "res");
    assert_eq!(events[0].type_name, "Resolution");
    assert_eq!(events[0].raw, "1920 by 1080");
    assert_eq!(events[0].recovery, Recovery::KeyDeleted);
}

#[test]
fn test_every_string_type_self_heals() {
    let prefs = setup_prefs();
    let keys = ["v2", "v2i", "v3", "v3i", "v4", "quat", "res", "quality"];
    for key in keys {
        prefs.store().set_string(key, "not a value");
    }

    assert_eq!(prefs.get("v2", Vector2::ZERO), Vector2::ZERO);
    assert_eq!(prefs.get("v2i", Vector2Int::ZERO), Vector2Int::ZERO);
    assert_eq!(prefs.get("v3", Vector3::ZERO), Vector3::ZERO);
    assert_eq!(prefs.get("v3i", Vector3Int::ZERO), Vector3Int::ZERO);
    assert_eq!(prefs.get("v4", Vector4::ZERO), Vector4::ZERO);
    assert_eq!(prefs.get("quat", Quaternion::IDENTITY), Quaternion::IDENTITY);
    assert_eq!(prefs.get("res", Resolution::default()), Resolution::default());
    assert_eq!(prefs.get("quality", Quality::High), Quality::High);

    for key in keys {
        assert!(!prefs.has_key(key), "{key} should have been deleted");
    }
}

#[test]
fn test_wrong_arity_is_malformed() {
    let prefs = setup_prefs();
    prefs.set("v", Vector3::new(1.0, 2.0, 3.0));

    // A 3-tuple read as a 2-tuple does not parse
    assert_eq!(prefs.get("v", Vector2::ZERO), Vector2::ZERO);
    assert!(!prefs.has_key("v"));
}

#[test]
fn test_comma_decimal_input_is_malformed() {
    let prefs = setup_prefs();
    prefs.store().set_string("v", "(1,5, 2,5)");

    assert_eq!(prefs.get("v", Vector2::ZERO), Vector2::ZERO);
    assert!(!prefs.has_key("v"));
}

#[test]
fn test_out_of_range_int_is_purged() {
    let prefs = setup_prefs();
    prefs.store().set_string("cell", "(4294967296, 0)");

    assert_eq!(prefs.get("cell", Vector2Int::new(1, 1)), Vector2Int::new(1, 1));
    assert!(!prefs.has_key("cell"));
}

#[test]
fn test_native_kinds_never_purged() {
    let prefs = setup_prefs();
    prefs.store().set_string("lives", "three");

    assert_eq!(prefs.get("lives", 3i32), 3);
    assert!(prefs.has_key("lives"));
}
