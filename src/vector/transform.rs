//! Matrix and quaternion transformations.
//!
//! The collaborator types are single-precision nalgebra values. Matrices use
//! the row-vector convention: element `(r, c)` of the `Matrix4<f32>` plays the
//! role of `M{r+1}{c+1}` in a row-major affine matrix, and the translation
//! lives in row 3. Note this is the transpose of nalgebra's own homogeneous
//! layout, so a matrix built with e.g. `Matrix4::new_translation` must be
//! transposed before it is passed here.

use nalgebra::{Matrix4, Quaternion};

use super::Vector3d;

impl Vector3d {
    /// Transforms a position by an affine matrix
    ///
    /// The position is a row vector pre-multiplying the matrix:
    ///
    /// ```text
    /// result_i = x * m[0][i] + y * m[1][i] + z * m[2][i] + m[3][i]
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Matrix4;
    /// use vector3d::Vector3d;
    ///
    /// let mut m = Matrix4::<f32>::identity();
    /// m[(3, 0)] = 10.0;
    ///
    /// let moved = Vector3d::new(1.0, 2.0, 3.0).transform(&m);
    /// assert_eq!(moved, Vector3d::new(11.0, 2.0, 3.0));
    /// ```
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Vector3d {
        let translation = Vector3d::new(
            f64::from(matrix[(3, 0)]),
            f64::from(matrix[(3, 1)]),
            f64::from(matrix[(3, 2)]),
        );
        self.transform_normal(matrix) + translation
    }

    /// Transforms a normal by the linear part of an affine matrix
    ///
    /// The translation row is ignored. No inverse-transpose is applied, so the
    /// result is only a correct normal for matrices without non-uniform scale
    /// or shear.
    pub fn transform_normal(&self, matrix: &Matrix4<f32>) -> Vector3d {
        let m = |row: usize, col: usize| f64::from(matrix[(row, col)]);

        Vector3d::new(
            self.x * m(0, 0) + self.y * m(1, 0) + self.z * m(2, 0),
            self.x * m(0, 1) + self.y * m(1, 1) + self.z * m(2, 1),
            self.x * m(0, 2) + self.y * m(1, 2) + self.z * m(2, 2),
        )
    }

    /// Rotates this vector by a quaternion
    ///
    /// The rotation coefficients are computed from the quaternion's `f32`
    /// components in single precision and only then widened. The vector keeps
    /// double precision but the rotation itself does not gain any.
    ///
    /// Unit quaternions can be passed directly since `UnitQuaternion<f32>`
    /// dereferences to `Quaternion<f32>`.
    pub fn rotate(&self, rotation: &Quaternion<f32>) -> Vector3d {
        let (qx, qy, qz, qw) = (rotation.i, rotation.j, rotation.k, rotation.w);

        let x2 = qx + qx;
        let y2 = qy + qy;
        let z2 = qz + qz;

        let wx2 = qw * x2;
        let wy2 = qw * y2;
        let wz2 = qw * z2;
        let xx2 = qx * x2;
        let xy2 = qx * y2;
        let xz2 = qx * z2;
        let yy2 = qy * y2;
        let yz2 = qy * z2;
        let zz2 = qz * z2;

        let r = |coefficient: f32| f64::from(coefficient);

        Vector3d::new(
            self.x * r(1.0 - yy2 - zz2) + self.y * r(xy2 - wz2) + self.z * r(xz2 + wy2),
            self.x * r(xy2 + wz2) + self.y * r(1.0 - xx2 - zz2) + self.z * r(yz2 - wx2),
            self.x * r(xz2 - wy2) + self.y * r(yz2 + wx2) + self.z * r(1.0 - xx2 - yy2),
        )
    }
}
