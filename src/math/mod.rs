//! Vector, matrix and quaternion math for the geometry pipeline.

pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use matrix::{Mat2, Mat3, Mat4, Matrix};
pub use quaternion::Quaternion;
pub use vector::{Vec2, Vec3, Vec4, Vector};
