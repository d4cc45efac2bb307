//! Enum preferences
//!
//! Enums are stored by name as `"<TypeName> <MemberName>"`. Rust has no
//! runtime reflection over enums, so a type opts in by implementing
//! [`PrefEnum`], usually through the [`pref_enum!`](crate::pref_enum) macro.
//!
//! # Example
//!
//! ```
//! use prefs_core::{pref_enum, PrefEnum};
//!
//! pref_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
//!     pub enum Quality {
//!         Low,
//!         #[default]
//!         Medium,
//!         High,
//!     }
//! }
//!
//! assert_eq!(Quality::TYPE_NAME, "Quality");
//! assert_eq!(Quality::High.variant_name(), "High");
//! assert_eq!(Quality::from_variant_name("high"), Some(Quality::High));
//! ```

/// An enum that can be stored by type name and member name
pub trait PrefEnum: Sized + Copy + 'static {
    /// Type name written in front of the member name
    ///
    /// Must be a Rust identifier (a letter or `_`, then word characters);
    /// `pref_enum!` uses the enum's own name.
    const TYPE_NAME: &'static str;

    /// Name of this member
    fn variant_name(&self) -> &'static str;

    /// Look up a member by name, ignoring ASCII case
    fn from_variant_name(name: &str) -> Option<Self>;

    /// All members in declaration order
    fn variants() -> &'static [Self];
}

/// Declare an enum and implement [`PrefEnum`] for it
///
/// Attributes on the enum and its variants pass through unchanged, so derive
/// `Clone`, `Copy` (required by `PrefEnum`) and `Default` (required by
/// `Prefs::get`) as needed. Only fieldless variants are supported.
#[macro_export]
macro_rules! pref_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $disc:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(= $disc)?
            ),+
        }

        impl $crate::PrefEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn from_variant_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case(stringify!($variant)) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }
    };
}
