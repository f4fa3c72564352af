//! Component-wise arithmetic.
//!
//! The named associated functions are the canonical operations; the operator
//! impls are sugar layered on top of them. Division never checks for zero.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::Vector3d;

impl Vector3d {
    /// Adds two vectors together.
    #[inline]
    pub fn add(left: Vector3d, right: Vector3d) -> Vector3d {
        Vector3d::new(left.x + right.x, left.y + right.y, left.z + right.z)
    }

    /// Subtracts `right` from `left`.
    #[inline]
    pub fn subtract(left: Vector3d, right: Vector3d) -> Vector3d {
        Vector3d::new(left.x - right.x, left.y - right.y, left.z - right.z)
    }

    /// Component-wise product of two vectors.
    #[inline]
    pub fn multiply(left: Vector3d, right: Vector3d) -> Vector3d {
        Vector3d::new(left.x * right.x, left.y * right.y, left.z * right.z)
    }

    /// Scales a vector uniformly.
    #[inline]
    pub fn multiply_scalar(vector: Vector3d, scalar: f64) -> Vector3d {
        Vector3d::new(vector.x * scalar, vector.y * scalar, vector.z * scalar)
    }

    /// Component-wise quotient of two vectors.
    #[inline]
    pub fn divide(left: Vector3d, right: Vector3d) -> Vector3d {
        Vector3d::new(left.x / right.x, left.y / right.y, left.z / right.z)
    }

    /// Divides every component by `divisor`.
    #[inline]
    pub fn divide_scalar(vector: Vector3d, divisor: f64) -> Vector3d {
        Vector3d::new(vector.x / divisor, vector.y / divisor, vector.z / divisor)
    }

    /// Flips the sign of every component.
    #[inline]
    pub fn negate(value: Vector3d) -> Vector3d {
        Vector3d::new(-value.x, -value.y, -value.z)
    }
}

impl Add for Vector3d {
    type Output = Vector3d;

    fn add(self, other: Vector3d) -> Vector3d {
        Vector3d::add(self, other)
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;

    fn sub(self, other: Vector3d) -> Vector3d {
        Vector3d::subtract(self, other)
    }
}

impl Mul for Vector3d {
    type Output = Vector3d;

    fn mul(self, other: Vector3d) -> Vector3d {
        Vector3d::multiply(self, other)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, scalar: f64) -> Vector3d {
        Vector3d::multiply_scalar(self, scalar)
    }
}

impl Mul<Vector3d> for f64 {
    type Output = Vector3d;

    fn mul(self, vector: Vector3d) -> Vector3d {
        Vector3d::multiply_scalar(vector, self)
    }
}

impl Div for Vector3d {
    type Output = Vector3d;

    fn div(self, other: Vector3d) -> Vector3d {
        Vector3d::divide(self, other)
    }
}

impl Div<f64> for Vector3d {
    type Output = Vector3d;

    fn div(self, scalar: f64) -> Vector3d {
        Vector3d::divide_scalar(self, scalar)
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::negate(self)
    }
}

impl AddAssign for Vector3d {
    fn add_assign(&mut self, other: Vector3d) {
        *self = *self + other;
    }
}

impl SubAssign for Vector3d {
    fn sub_assign(&mut self, other: Vector3d) {
        *self = *self - other;
    }
}

impl MulAssign<f64> for Vector3d {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl DivAssign<f64> for Vector3d {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

// Additive identity
impl Zero for Vector3d {
    fn zero() -> Self {
        Vector3d::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Vector3d::ZERO
    }
}

// Multiplicative identity for the component-wise product
impl One for Vector3d {
    fn one() -> Self {
        Vector3d::ONE
    }
}
