//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the perspective
//! projection (FOV, aspect ratio, near/far planes) and builds the matrix the
//! engine multiplies onto the view transform.

use crate::math::Mat4;

/// Vertical field of view of the reference viewer, in radians.
pub const DEFAULT_FOV_Y: f32 = 0.78;
pub const DEFAULT_Z_NEAR: f32 = 0.01;
pub const DEFAULT_Z_FAR: f32 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > z_near, "invalid depth range");
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on viewport resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the left-handed perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_fov_lh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(45.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_y(), FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn matrix_scales_x_by_aspect() {
        let proj = Projection::new(DEFAULT_FOV_Y, 2.0, DEFAULT_Z_NEAR, DEFAULT_Z_FAR);
        let m = proj.matrix();
        assert_relative_eq!(m.get(0, 0), m.get(1, 1) * 2.0, epsilon = 1e-6);
        assert_eq!(m.get(2, 3), 1.0);
    }

    #[test]
    fn set_aspect_ratio_rebuilds_matrix() {
        let mut proj = Projection::new(DEFAULT_FOV_Y, 1.0, DEFAULT_Z_NEAR, DEFAULT_Z_FAR);
        let before = proj.matrix();
        proj.set_aspect_ratio(4.0 / 3.0);
        assert_ne!(proj.matrix(), before);
        assert_relative_eq!(proj.aspect_ratio(), 4.0 / 3.0);
    }
}
