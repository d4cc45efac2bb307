//! Providers registered on every `Prefs`
//!
//! - `i32`, `f32`, `String`: native store kinds
//! - `bool`: stored as int, `1` for true and `0` for false; any non-zero int
//!   reads as true
//! - vectors, `Quaternion`, `Resolution`: string codecs from `prefs-codec`
//!
//! Enums are not built in; each enum type is registered with
//! `Prefs::add_enum`.

use prefs_core::{Quaternion, Resolution, Vector2, Vector2Int, Vector3, Vector3Int, Vector4};

use crate::registry::ProviderRegistry;

pub(crate) fn register_builtins(registry: &ProviderRegistry) {
    registry.add_provider::<i32, _, _>(
        |ctx, key, default| ctx.store().get_int(key, default),
        |ctx, key, value| ctx.store().set_int(key, *value),
    );
    registry.add_provider::<bool, _, _>(
        |ctx, key, default| ctx.store().get_int(key, i32::from(default)) != 0,
        |ctx, key, value| ctx.store().set_int(key, i32::from(*value)),
    );
    registry.add_provider::<f32, _, _>(
        |ctx, key, default| ctx.store().get_float(key, default),
        |ctx, key, value| ctx.store().set_float(key, *value),
    );
    registry.add_provider::<String, _, _>(
        |ctx, key, default| ctx.store().string(key).unwrap_or(default),
        |ctx, key, value| ctx.store().set_string(key, value),
    );

    registry.add_string_codec::<Vector2>();
    registry.add_string_codec::<Vector2Int>();
    registry.add_string_codec::<Vector3>();
    registry.add_string_codec::<Vector3Int>();
    registry.add_string_codec::<Vector4>();
    registry.add_string_codec::<Quaternion>();
    registry.add_string_codec::<Resolution>();

    tracing::debug!(providers = registry.len(), "Registered built-in providers");
}
