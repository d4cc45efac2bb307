//! Property tests across the facade

use proptest::prelude::*;

use typedprefs::{PrimitiveStore, Resolution, Vector2, Vector3Int, Vector4};

use crate::test_utils::{setup_prefs, Quality};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3
}

proptest! {
    #[test]
    fn prop_vector4_round_trip(
        x in -1.0e5f32..1.0e5,
        y in -1.0e5f32..1.0e5,
        z in -1.0e5f32..1.0e5,
        w in -1.0e5f32..1.0e5,
    ) {
        let prefs = setup_prefs();
        prefs.set("v", Vector4::new(x, y, z, w));
        let back = prefs.get("v", Vector4::ZERO);
        prop_assert!(close(back.x, x) && close(back.y, y));
        prop_assert!(close(back.z, z) && close(back.w, w));
    }

    #[test]
    fn prop_resolution_round_trip(width: u32, height: u32, rate: u32) {
        let prefs = setup_prefs();
        let res = Resolution::new(width, height, rate);
        prefs.set("res", res);
        prop_assert_eq!(prefs.get("res", Resolution::default()), res);
    }

    #[test]
    fn prop_vector3_int_round_trip(x: i32, y: i32, z: i32) {
        let prefs = setup_prefs();
        prefs.set("v", Vector3Int::new(x, y, z));
        prop_assert_eq!(prefs.get("v", Vector3Int::ZERO), Vector3Int::new(x, y, z));
    }

    /// Any stored string either decodes (and keeps decoding the same way)
    /// or is removed on the first read
    #[test]
    fn prop_arbitrary_strings_settle(raw in "\\PC{0,40}") {
        let prefs = setup_prefs();
        prefs.store().set_string("v", &raw);

        let fallback = Vector2::new(7.0, 7.0);
        let first = prefs.get("v", fallback);
        if prefs.has_key("v") {
            prop_assert_eq!(prefs.get("v", fallback), first);
        } else {
            prop_assert_eq!(first, fallback);
            prop_assert_eq!(prefs.get("v", fallback), fallback);
        }
    }

    #[test]
    fn prop_enum_strings_never_panic(raw in "[A-Za-z]{1,10} [A-Za-z]{1,10}") {
        let prefs = setup_prefs();
        prefs.store().set_string("q", &raw);
        let _ = prefs.get("q", Quality::Medium);
    }
}
