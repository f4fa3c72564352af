//! Vector3d: a double-precision 3D vector value type
//!
//! This crate provides `Vector3d`, a three-component `f64` vector mirroring
//! the operation set of a single-precision 3D vector. It is meant for geometry
//! and physics code that needs more accuracy than `f32` while still exchanging
//! data with `f32`-based nalgebra pipelines.
//!
//! # Interoperability
//!
//! - `nalgebra::Vector3<f32>` widens into `Vector3d` losslessly via `From`
//! - `Vector3d::to_f32_lossy` narrows explicitly
//! - `nalgebra::Matrix4<f32>` and `nalgebra::Quaternion<f32>` drive the
//!   transformation operations
//!
//! # Usage
//!
//! ```rust
//! use vector3d::nalgebra::Vector3;
//! use vector3d::Vector3d;
//!
//! let velocity: Vector3d = Vector3::new(1.0f32, 2.0, 2.0).into();
//! assert_eq!(velocity.length(), 3.0);
//!
//! let direction = velocity.normalize();
//! assert!(direction.approximately_equals(Vector3d::new(1.0, 2.0, 2.0) / 3.0, 1e-12));
//!
//! let back_to_f32 = direction.to_f32_lossy();
//! assert!((back_to_f32.norm() - 1.0).abs() < 1e-6);
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for `Vector3d`

pub mod errors;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, Vector3dError};
pub use vector::Vector3d;

// Callers should build collaborator types against the same nalgebra version
pub use nalgebra;
