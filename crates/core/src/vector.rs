//! Vector and quaternion value types
//!
//! Float-bearing types use `f32` components, integer types use `i32`.
//! `Default` is the zero value for every type, including `Quaternion`
//! (use [`Quaternion::IDENTITY`] for the identity rotation).

use serde::{Deserialize, Serialize};

/// 2D float vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D integer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector2Int {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl Vector2Int {
    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new vector
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 3D float vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 3D integer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector3Int {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl Vector3Int {
    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new vector
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// 4D float vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vector4 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new vector
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

/// Rotation quaternion
///
/// Components are stored as given; no normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W (scalar) component
    pub w: f32,
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector2Int> for Vector2 {
    fn from(v: Vector2Int) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Vector3Int> for Vector3 {
    fn from(v: Vector3Int) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }
}
