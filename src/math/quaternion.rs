//! Rotation quaternions.
//!
//! A [`Quaternion`] stores a vector part `v` and a scalar part `s`. The
//! Hamilton product `a * b` composes rotations so that `b` is applied first,
//! then `a`, matching how [`Quaternion::to_rotation_matrix`] is ordered for
//! row vectors: `(a * b).to_rotation_matrix() == b.to_rotation_matrix() * a.to_rotation_matrix()`.

use std::fmt;
use std::ops::Mul;

use super::matrix::Mat4;
use super::vector::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub v: Vec3,
    pub s: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        v: Vec3::ZERO,
        s: 1.0,
    };

    pub const fn new(v: Vec3, s: f32) -> Self {
        Self { v, s }
    }

    /// Rotation by `rad` radians about `axis`, which must already be normalized.
    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Self {
        let (sin, cos) = (rad / 2.0).sin_cos();
        Self::new(axis * sin, cos)
    }

    pub fn magnitude(&self) -> f32 {
        (self.v.dot(self.v) + self.s * self.s).sqrt()
    }

    /// Rescales to unit magnitude. Same zero policy as [`Vec3::normalize`].
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        let factor = if magnitude == 0.0 { 1.0 } else { 1.0 / magnitude };
        Self::new(self.v * factor, self.s * factor)
    }

    /// Converts a unit quaternion to a rotation matrix for row vectors.
    pub fn to_rotation_matrix(&self) -> Mat4 {
        let (x, y, z, w) = (self.v.x(), self.v.y(), self.v.z(), self.s);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let xw = x * w;
        let yw = y * w;
        let zw = z * w;

        Mat4::new([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + zw), 2.0 * (xz - yw), 0.0],
            [2.0 * (xy - zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + xw), 0.0],
            [2.0 * (xz + yw), 2.0 * (yz - xw), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            rhs.v * self.s + self.v * rhs.s + self.v.cross(rhs.v),
            self.s * rhs.s - self.v.dot(rhs.v),
        )
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}], {}", self.v, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        for i in 0..3 {
            assert_relative_eq!(a[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn y_axis_quaternion_matches_rotation_y() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        for theta in [0.0, FRAC_PI_4, FRAC_PI_2, PI] {
            let q = Quaternion::from_axis_angle(Vec3::UNIT_Y, theta);
            let via_quaternion = q.to_rotation_matrix().transform_point(point);
            let via_matrix = Mat4::rotation_y(theta).transform_point(point);
            assert_vec_eq(via_quaternion, via_matrix);
        }
    }

    #[test]
    fn x_and_z_axes_match_their_matrices() {
        let point = Vec3::new(-2.0, 0.5, 1.0);
        let theta = 0.7;
        let qx = Quaternion::from_axis_angle(Vec3::UNIT_X, theta);
        let qz = Quaternion::from_axis_angle(Vec3::UNIT_Z, theta);
        assert_vec_eq(
            qx.to_rotation_matrix().transform_point(point),
            Mat4::rotation_x(theta).transform_point(point),
        );
        assert_vec_eq(
            qz.to_rotation_matrix().transform_point(point),
            Mat4::rotation_z(theta).transform_point(point),
        );
    }

    #[test]
    fn product_applies_right_operand_first() {
        let qx = Quaternion::from_axis_angle(Vec3::UNIT_X, 0.3);
        let qy = Quaternion::from_axis_angle(Vec3::UNIT_Y, 1.1);
        let composed = (qy * qx).to_rotation_matrix();
        let chained = Mat4::rotation_x(0.3) * Mat4::rotation_y(1.1);
        for i in 0..16 {
            assert_relative_eq!(composed[i], chained[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn unit_product_stays_unit() {
        let a = Quaternion::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.9);
        let b = Quaternion::from_axis_angle(Vec3::UNIT_Z, -2.4);
        assert_relative_eq!((a * b).magnitude(), 1.0, epsilon = 1e-6);
        let scaled = Quaternion::new(Vec3::new(0.0, 3.0, 0.0), 4.0);
        assert_relative_eq!(scaled.normalize().magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(scaled.normalize().s, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quaternion::from_axis_angle(Vec3::UNIT_Y, 0.5);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY.to_rotation_matrix(), Mat4::identity());
    }
}
