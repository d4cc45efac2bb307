//! Enum storage and the type-confusion guard

use typedprefs::{PrefEnum, PrimitiveStore, Recovery};

use crate::test_utils::{setup_observed, setup_prefs, Language, Quality};

#[test]
fn test_enum_round_trip() {
    let prefs = setup_prefs();
    prefs.set("quality", Quality::High);

    assert_eq!(prefs.store().get_string("quality", ""), "Quality High");
    assert_eq!(prefs.get("quality", Quality::Low), Quality::High);
}

#[test]
fn test_every_member_round_trips() {
    let prefs = setup_prefs();
    for &lang in Language::variants() {
        prefs.set("lang", lang);
        assert_eq!(prefs.get("lang", Language::default()), lang);
    }
}

#[test]
fn test_member_name_case_insensitive() {
    let prefs = setup_prefs();
    prefs.store().set_string("lang", "Language JAPANESE");

    assert_eq!(prefs.get("lang", Language::English), Language::Japanese);
}

#[test]
fn test_type_confusion_keeps_key() {
    let (prefs, observer) = setup_observed();
    prefs.set("setting", Language::French);

    assert_eq!(prefs.get("setting", Quality::Low), Quality::Low);

    // Stored value untouched and still readable as its real type
    assert!(prefs.has_key("setting"));
    assert_eq!(prefs.store().get_string("setting", ""), "Language French");
    assert_eq!(prefs.get("setting", Language::English), Language::French);

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].type_name, "Quality");
    assert_eq!(events[0].recovery, Recovery::KeyPreserved);
}

#[test]
fn test_unknown_member_is_purged() {
    let prefs = setup_prefs();
    prefs.store().set_string("quality", "Quality Ultra");

    assert_eq!(prefs.get("quality", Quality::Medium), Quality::Medium);
    assert!(!prefs.has_key("quality"));
}

#[test]
fn test_enum_grammar_mismatch_is_purged() {
    let prefs = setup_prefs();
    prefs.store().set_string("quality", "Quality: High");

    assert_eq!(prefs.get("quality", Quality::Low), Quality::Low);
    assert!(!prefs.has_key("quality"));
}

#[test]
fn test_unregistered_enum_is_silent() {
    typedprefs::pref_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        enum Theme {
            #[default]
            Light,
            Dark,
        }
    }

    let prefs = setup_prefs();
    prefs.set("theme", Theme::Dark);
    assert!(!prefs.has_key("theme"));

    prefs.store().set_string("theme", "Theme Dark");
    assert_eq!(prefs.get("theme", Theme::Dark), Theme::Light);

    assert!(prefs.add_enum::<Theme>());
    assert_eq!(prefs.get("theme", Theme::Light), Theme::Dark);
}
