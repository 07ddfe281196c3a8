//! Fixed-size vectors of `f32` scalars.
//!
//! [`Vector<N>`] is a plain value type over `[f32; N]`. The aliases [`Vec2`],
//! [`Vec3`] and [`Vec4`] cover the sizes the pipeline uses.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize> {
    scalars: [f32; N],
}

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    pub const ZERO: Self = Self { scalars: [0.0; N] };

    pub const fn from_array(scalars: [f32; N]) -> Self {
        Self { scalars }
    }

    pub fn as_array(&self) -> &[f32; N] {
        &self.scalars
    }

    /// Euclidean norm.
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero-length vector is returned unchanged: its scale factor is taken
    /// as 1 instead of `1/0`. Callers that build bases from possibly
    /// degenerate input (look-at with `eye == target`, collapsed faces) rely
    /// on this never producing NaN.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        let factor = if length == 0.0 { 1.0 } else { 1.0 / length };
        *self * factor
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.scalars
            .iter()
            .zip(other.scalars.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut scalars = [0.0; N];
        for (i, out) in scalars.iter_mut().enumerate() {
            *out = f(self.scalars[i], other.scalars[i]);
        }
        Self { scalars }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            scalars: self.scalars.map(f),
        }
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { scalars: [x, y] }
    }

    pub fn x(&self) -> f32 {
        self.scalars[0]
    }

    pub fn y(&self) -> f32 {
        self.scalars[1]
    }
}

impl Vec3 {
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { scalars: [x, y, z] }
    }

    pub fn x(&self) -> f32 {
        self.scalars[0]
    }

    pub fn y(&self) -> f32 {
        self.scalars[1]
    }

    pub fn z(&self) -> f32 {
        self.scalars[2]
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.scalars;
        let [bx, by, bz] = other.scalars;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            scalars: [x, y, z, w],
        }
    }

    /// Create a point (w=1) from a Vec3.
    pub const fn point(v: Vec3) -> Self {
        let [x, y, z] = v.scalars;
        Self::new(x, y, z, 1.0)
    }

    pub fn w(&self) -> f32 {
        self.scalars[3]
    }

    /// Convert to Vec3, discarding w.
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.scalars[0], self.scalars[1], self.scalars[2])
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.scalars[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.scalars[index]
    }
}

/// Component-wise addition of two vectors.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

/// Component-wise subtraction of two vectors.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

/// Scalar multiplication of a vector.
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, scalar) in self.scalars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{scalar}")?;
        }
        Ok(())
    }
}

impl From<Vec3> for Vec4 {
    /// Convert Vec3 to Vec4 as a point (w=1).
    fn from(v: Vec3) -> Self {
        Self::point(v)
    }
}
