//! Square matrices using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v * M`
//! - Elements are stored row-major, flat index `row * N + col`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! # Example
//! ```ignore
//! let world_view = world * view;           // world applied first
//! let p = world_view.transform_point(v);   // transform the vertex
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use super::vector::Vec3;

/// NxN matrix stored as `data[row][col]`, contiguous in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const N: usize> {
    data: [[f32; N]; N],
}

pub type Mat2 = Matrix<2>;
pub type Mat3 = Matrix<3>;
pub type Mat4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    pub const fn new(data: [[f32; N]; N]) -> Self {
        Self { data }
    }

    pub fn zero() -> Self {
        Self::new([[0.0; N]; N])
    }

    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.data[i][i] = 1.0;
        }
        m
    }

    pub fn transpose(&self) -> Self {
        let mut m = Self::zero();
        for row in 0..N {
            for col in 0..N {
                m.data[col][row] = self.data[row][col];
            }
        }
        m
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Uniform scale matrix.
    pub fn scale(s: f32) -> Self {
        Self::scale_xyz(s, s, s)
    }

    pub fn scale_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last row (row-vector convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a view matrix with left-handed coordinate system.
    ///
    /// The camera basis vectors occupy the columns of the upper 3x3 block, so
    /// a row-vector point times this matrix yields its coordinates along
    /// right, up and forward. The last row holds the eye translation.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The up direction of the world.
    pub fn look_at_lh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        Self::new([
            [right.x(), up.x(), forward.x(), 0.0],
            [right.y(), up.y(), forward.y(), 0.0],
            [right.z(), up.z(), forward.z(), 0.0],
            [-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0],
        ])
    }

    /// Creates a left-handed perspective matrix from a vertical field of view.
    ///
    /// View-space Z in `[z_near, z_far]` maps to `[0, 1]` after the divide by
    /// W, which this matrix sets to the view-space Z.
    pub fn perspective_fov_lh(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        // cot(x) = tan(PI/2 - x)
        let h = (std::f32::consts::FRAC_PI_2 - fov_y / 2.0).tan();
        let w = h * aspect_ratio;
        let depth = z_far - z_near;

        Self::new([
            [w, 0.0, 0.0, 0.0],
            [0.0, h, 0.0, 0.0],
            [0.0, 0.0, z_far / depth, 1.0],
            [0.0, 0.0, -z_near * z_far / depth, 0.0],
        ])
    }

    /// Transforms a point, treated as `(x, y, z, 1)`.
    ///
    /// The result is divided by W only when W is neither 0 nor 1.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        let (vx, vy, vz) = (v.x(), v.y(), v.z());
        let x = vx * m[0][0] + vy * m[1][0] + vz * m[2][0] + m[3][0];
        let y = vx * m[0][1] + vy * m[1][1] + vz * m[2][1] + m[3][1];
        let z = vx * m[0][2] + vy * m[1][2] + vz * m[2][2] + m[3][2];
        let w = vx * m[0][3] + vy * m[1][3] + vz * m[2][3] + m[3][3];

        if w != 0.0 && w != 1.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Transforms a direction by the upper-left 3x3 block, ignoring translation.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        let (vx, vy, vz) = (v.x(), v.y(), v.z());
        Vec3::new(
            vx * m[0][0] + vy * m[1][0] + vz * m[2][0],
            vx * m[0][1] + vy * m[1][1] + vz * m[2][1],
            vx * m[0][2] + vy * m[1][2] + vz * m[2][2],
        )
    }
}

/// Flat row-major access: `m[row * N + col]`.
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index / N][index % N]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index / N][index % N]
    }
}

/// Matrix multiplication: `C[i][k] = sum_j A[i][j] * B[j][k]`.
///
/// With row vectors, `v * (A * B)` applies A first, then B.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            for k in 0..N {
                result.data[i][k] = (0..N).map(|j| self.data[i][j] * rhs.data[j][k]).sum();
            }
        }
        result
    }
}

impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.data.map(|row| row.map(|x| x * rhs)))
    }
}

impl<const N: usize> Mul<Matrix<N>> for f32 {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Matrix<N> {
        rhs * self
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}
