//! typedprefs: typed preferences over a primitive key-value store
//!
//! Store vectors, quaternions, resolutions, enums and serde values under
//! string keys in a store that only knows ints, floats and strings.
//!
//! ```
//! use typedprefs::{Prefs, PrimitiveStore, Resolution, Vector3};
//!
//! let prefs = Prefs::in_memory();
//! prefs.set("spawn", Vector3::new(1.0, 2.5, -3.0));
//! prefs.set("display", Resolution::new(1920, 1080, 60));
//!
//! assert_eq!(prefs.store().get_string("spawn", ""), "(1.000, 2.500, -3.000)");
//! assert_eq!(prefs.get("display", Resolution::default()).width, 1920);
//! ```
//!
//! # Crates
//!
//! - `prefs-core`: value types and the `pref_enum!` macro
//! - `prefs-storage`: the `PrimitiveStore` trait and `MemoryStore`
//! - `prefs-codec`: string grammars
//! - `prefs-engine`: provider registry and the `Prefs` facade

pub mod types;

pub use types::*;
