//! Geometric operations: products, lengths, interpolation and clamping.

use super::Vector3d;

impl Vector3d {
    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// assert_eq!(Vector3d::UNIT_X.dot(&Vector3d::UNIT_Y), 0.0);
    /// assert_eq!(Vector3d::new(1.0, 2.0, 3.0).dot(&Vector3d::new(4.0, 5.0, 6.0)), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Vector3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// assert_eq!(Vector3d::UNIT_X.cross(&Vector3d::UNIT_Y), Vector3d::UNIT_Z);
    /// ```
    #[inline]
    pub fn cross(&self, other: &Vector3d) -> Vector3d {
        Vector3d::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length. Cheaper than [`length`](Self::length) when only
    /// relative magnitudes matter.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance between two points
    #[inline]
    pub fn distance(&self, other: &Vector3d) -> f64 {
        (*self - *other).length()
    }

    /// Squared Euclidean distance between two points
    #[inline]
    pub fn distance_squared(&self, other: &Vector3d) -> f64 {
        (*self - *other).length_squared()
    }

    /// Returns a vector with the same direction and a length of 1
    ///
    /// A zero-length input is not special-cased: the division yields NaN
    /// components (0/0), or Infinity when a component is nonzero but the
    /// length underflows to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// let unit = Vector3d::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3d::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Vector3d::ZERO.normalize().has_nan());
    /// ```
    #[inline]
    pub fn normalize(&self) -> Vector3d {
        *self / self.length()
    }

    /// Component-wise minimum
    ///
    /// Each component is chosen with a strict `<`. When the comparison fails,
    /// including whenever either side is NaN, the component of `other` wins.
    pub fn min(&self, other: &Vector3d) -> Vector3d {
        Vector3d::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
            if self.z < other.z { self.z } else { other.z },
        )
    }

    /// Component-wise maximum
    ///
    /// Same tie-break as [`min`](Self::min): a failed `>` picks `other`.
    pub fn max(&self, other: &Vector3d) -> Vector3d {
        Vector3d::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
            if self.z > other.z { self.z } else { other.z },
        )
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(&self) -> Vector3d {
        Vector3d::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise square root. Negative components become NaN.
    #[inline]
    pub fn sqrt(&self) -> Vector3d {
        Vector3d::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Reflects this vector off a surface with the given normal
    ///
    /// `normal` is used as given and should already be unit length.
    pub fn reflect(&self, normal: &Vector3d) -> Vector3d {
        *self - *normal * self.dot(normal) * 2.0
    }

    /// Restricts each component to `[min, max]`
    ///
    /// The upper bound is applied before the lower bound, so a component whose
    /// `min` exceeds its `max` ends up at `min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// let v = Vector3d::new(0.0, 2.0, 7.0);
    /// let clamped = v.clamp(&Vector3d::new(1.0, 2.0, 3.0), &Vector3d::new(4.0, 5.0, 6.0));
    /// assert_eq!(clamped, Vector3d::new(1.0, 2.0, 6.0));
    /// ```
    pub fn clamp(&self, min: &Vector3d, max: &Vector3d) -> Vector3d {
        fn clamp_component(value: f64, min: f64, max: f64) -> f64 {
            let value = if value > max { max } else { value };
            if value < min {
                min
            } else {
                value
            }
        }

        Vector3d::new(
            clamp_component(self.x, min.x, max.x),
            clamp_component(self.y, min.y, max.y),
            clamp_component(self.z, min.z, max.z),
        )
    }

    /// Linear interpolation `self + (end - self) * amount`
    ///
    /// `amount` is not restricted to `[0, 1]`; values outside extrapolate.
    pub fn lerp(&self, end: &Vector3d, amount: f64) -> Vector3d {
        Vector3d::new(
            self.x + (end.x - self.x) * amount,
            self.y + (end.y - self.y) * amount,
            self.z + (end.z - self.z) * amount,
        )
    }
}
