//! Approximate equality and special-value detection.

use super::Vector3d;

impl Vector3d {
    /// Returns true if `other` lies strictly within `epsilon` of this vector
    ///
    /// The tolerance is compared against the Euclidean distance between the
    /// two points, not per axis. Anything convertible into a `Vector3d` is
    /// accepted, so a single-precision vector can be compared directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// assert!(Vector3d::ZERO.approximately_equals(Vector3d::UNIT_X, 1.1));
    /// assert!(!Vector3d::ZERO.approximately_equals(Vector3d::UNIT_X, 1.0));
    /// ```
    pub fn approximately_equals(&self, other: impl Into<Vector3d>, epsilon: f64) -> bool {
        self.distance(&other.into()) < epsilon
    }

    /// Returns true if any component is NaN
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if any component is positive or negative infinity
    pub fn has_infinity(&self) -> bool {
        self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite()
    }
}
