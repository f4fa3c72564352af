//! # Double-Precision Vector Module
//!
//! This module provides `Vector3d`, a three-component `f64` vector value type
//! that mirrors the semantics of a single-precision 3D vector while carrying
//! extended precision through geometry and physics calculations.
//!
//! ## Value Semantics
//!
//! `Vector3d` is a plain `Copy` value:
//! - Three public `f64` fields, no hidden state
//! - Every operation returns a new vector, nothing is mutated in place
//! - Construction performs no validation, so NaN and ±Infinity are legal
//!   component values
//!
//! ## IEEE-754 Behaviour
//!
//! Degenerate inputs are never guarded. Division by zero, normalizing a
//! zero-length vector and the square root of a negative component all produce
//! Infinity or NaN exactly as the underlying `f64` arithmetic does. This keeps
//! results bit-for-bit comparable with single-precision pipelines running the
//! same formulas.
//!
//! ## Submodules
//!
//! - `arithmetic`: operators and their named counterparts
//! - `geometry`: dot/cross products, lengths, interpolation, clamping
//! - `transform`: matrix and quaternion application
//! - `convert`: single/double precision conversions and buffer export
//! - `predicates`: approximate equality and NaN/Infinity detection
//!
//! ## Examples
//!
//! ```rust
//! use vector3d::Vector3d;
//!
//! let a = Vector3d::new(1.0, 2.0, 3.0);
//! let b = Vector3d::splat(2.0);
//!
//! assert_eq!(a + b, Vector3d::new(3.0, 4.0, 5.0));
//! assert_eq!(a.dot(&b), 12.0);
//! assert_eq!(a.to_string(), "<1, 2, 3>");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod arithmetic;
mod convert;
mod geometry;
mod predicates;
mod transform;

/// Three-dimensional double-precision vector
///
/// Equality is exact IEEE comparison of each component: a vector holding NaN
/// is never equal to anything, itself included, and `+0.0` equals `-0.0`.
/// Use [`Vector3d::approximately_equals`] for tolerance-based comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3d {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3d {
    /// The vector (0, 0, 0).
    pub const ZERO: Self = Self::splat(0.0);

    /// The vector (1, 1, 1).
    pub const ONE: Self = Self::splat(1.0);

    /// The vector (1, 0, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// The vector (0, 1, 0).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The vector (0, 0, 1).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// let v = Vector3d::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d { x, y, z }
    }

    /// Creates a vector whose three components all equal `value`
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Vector3d::new(value, value, value)
    }

    /// Returns the components as `[x, y, z]`
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vector3d {
    fn default() -> Self {
        Self::ZERO
    }
}

// Signed zeros compare equal, so they must hash alike.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Vector3d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.z).hash(state);
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
