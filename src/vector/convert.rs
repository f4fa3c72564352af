//! Precision conversions and buffer export.
//!
//! Widening from `f32` is a `From` impl because it can never lose
//! information. Narrowing is only available through the explicitly named
//! [`Vector3d::to_f32_lossy`] so precision loss is visible at the call site.

use log::debug;
use nalgebra::Vector3;

use super::Vector3d;
use crate::errors::{invalid_arg, Result, Vector3dError};

impl Vector3d {
    /// Narrows to a single-precision vector, rounding each component to `f32`
    ///
    /// Values beyond the `f32` range become ±Infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// let v = Vector3d::new(0.1, 0.2, 0.3);
    /// let narrow = v.to_f32_lossy();
    /// assert_eq!(narrow.x, 0.1f32);
    /// ```
    pub fn to_f32_lossy(&self) -> Vector3<f32> {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Copies `x`, `y`, `z` into `target` starting at `offset`
    ///
    /// # Errors
    ///
    /// - [`Vector3dError::InvalidArgument`] if `target` is `None`
    /// - [`Vector3dError::OutOfRange`] if `offset` is negative or not below the
    ///   buffer length
    /// - [`Vector3dError::InvalidArgument`] if fewer than three slots remain
    ///   after `offset`
    ///
    /// The buffer is untouched unless all checks pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3d;
    ///
    /// let mut buffer = [0.0; 4];
    /// Vector3d::new(1.0, 2.0, 3.0).copy_to(Some(&mut buffer[..]), 1).unwrap();
    /// assert_eq!(buffer, [0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn copy_to(&self, target: Option<&mut [f64]>, offset: isize) -> Result<()> {
        match target {
            Some(buffer) => self.copy_to_slice(buffer, offset),
            None => {
                debug!("copy_to rejected: no target buffer");
                Err(invalid_arg("target", "buffer is absent"))
            }
        }
    }

    /// Copies `x`, `y`, `z` into a buffer that is known to exist
    ///
    /// Same checks as [`copy_to`](Self::copy_to) minus the absent-buffer case.
    pub fn copy_to_slice(&self, target: &mut [f64], offset: isize) -> Result<()> {
        let len = target.len();

        let start = match usize::try_from(offset) {
            Ok(start) if start < len => start,
            _ => {
                debug!("copy_to rejected: offset {} outside buffer of length {}", offset, len);
                return Err(Vector3dError::OutOfRange { offset, len });
            }
        };

        if len - start < 3 {
            debug!(
                "copy_to rejected: {} slots remain after offset {}, need 3",
                len - start,
                start
            );
            return Err(invalid_arg(
                "target",
                format!("only {} slots remain after offset {}", len - start, start),
            ));
        }

        target[start..start + 3].copy_from_slice(&self.to_array());
        Ok(())
    }
}

impl From<Vector3<f32>> for Vector3d {
    fn from(vec: Vector3<f32>) -> Self {
        Vector3d::new(f64::from(vec.x), f64::from(vec.y), f64::from(vec.z))
    }
}

impl From<Vector3<f64>> for Vector3d {
    fn from(vec: Vector3<f64>) -> Self {
        Vector3d::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3d> for Vector3<f64> {
    fn from(vec: Vector3d) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3d::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_widen_is_exact() {
        let narrow = Vector3::new(0.1f32, -3.4e38, f32::MIN_POSITIVE);
        let wide = Vector3d::from(narrow);
        assert_eq!(wide.x, f64::from(0.1f32));
        assert_eq!(wide.y, f64::from(-3.4e38f32));
        assert_eq!(wide.z, f64::from(f32::MIN_POSITIVE));

        // Widening then narrowing is the identity
        assert_eq!(wide.to_f32_lossy(), narrow);
    }

    #[test]
    fn test_narrow_rounds_and_overflows() {
        let v = Vector3d::new(0.1, 1e300, -1e300);
        let narrow = v.to_f32_lossy();
        assert_eq!(narrow.x, 0.1f32);
        assert_eq!(narrow.y, f32::INFINITY);
        assert_eq!(narrow.z, f32::NEG_INFINITY);
        assert!((f64::from(narrow.x) - v.x).abs() < 1e-3);
    }

    #[test]
    fn test_nalgebra_f64_interop() {
        let v = Vector3d::new(1.0, 2.0, 3.0);
        let na: Vector3<f64> = v.into();
        assert_eq!(na, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3d::from(na), v);
        assert_eq!(Vector3d::from([1.0, 2.0, 3.0]), v);
    }

    #[test]
    fn test_copy_to_with_offset() {
        let v = Vector3d::new(1.0, 2.0, 3.0);
        let mut buffer = [9.0; 4];
        v.copy_to(Some(&mut buffer[..]), 1).unwrap();
        assert_eq!(buffer, [9.0, 1.0, 2.0, 3.0]);

        let mut exact = [0.0; 3];
        v.copy_to_slice(&mut exact, 0).unwrap();
        assert_eq!(exact, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_copy_to_absent_buffer() {
        let v = Vector3d::new(1.0, 2.0, 3.0);
        let err = v.copy_to(None, 0).unwrap_err();
        assert!(matches!(err, Vector3dError::InvalidArgument { name: "target", .. }));
    }

    #[rstest]
    #[case(3, -1)]
    #[case(3, 3)]
    #[case(3, 4)]
    #[case(0, 0)]
    #[case(5, isize::MIN)]
    fn test_copy_to_out_of_range(#[case] len: usize, #[case] offset: isize) {
        let v = Vector3d::new(1.0, 2.0, 3.0);
        let mut buffer = vec![0.0; len];
        let err = v.copy_to(Some(buffer.as_mut_slice()), offset).unwrap_err();
        assert_eq!(err, Vector3dError::OutOfRange { offset, len });
        assert!(buffer.iter().all(|&slot| slot == 0.0));
    }

    #[rstest]
    #[case(2, 0)]
    #[case(4, 2)]
    #[case(10, 8)]
    fn test_copy_to_insufficient_capacity(#[case] len: usize, #[case] offset: isize) {
        let v = Vector3d::new(1.0, 2.0, 3.0);
        let mut buffer = vec![0.0; len];
        let err = v.copy_to_slice(&mut buffer, offset).unwrap_err();
        assert!(matches!(err, Vector3dError::InvalidArgument { name: "target", .. }));
        // Validation happens before any write
        assert!(buffer.iter().all(|&slot| slot == 0.0));
    }
}
