//! Look-at camera.
//!
//! The camera is plain data: an eye position, a target and a zoom factor that
//! scales projected coordinates into window pixels. Input handlers mutate it
//! between frames; the engine only reads it while rendering.

use crate::math::{Mat4, Vec3};

/// Fraction by which one zoom step grows or shrinks the zoom factor.
pub const ZOOM_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Pixels per projected unit when mapping to the window.
    pub zoom_factor: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(15.0, 15.0, 15.0), Vec3::new(-1.0, -1.0, -1.0), 1280.0)
    }
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, zoom_factor: f32) -> Self {
        Self {
            eye,
            target,
            zoom_factor,
        }
    }

    /// Grows the zoom factor by [`ZOOM_STEP`] (scroll up).
    pub fn zoom_in(&mut self) {
        self.zoom_factor += self.zoom_factor * ZOOM_STEP;
    }

    /// Shrinks the zoom factor by [`ZOOM_STEP`] (scroll down).
    pub fn zoom_out(&mut self) {
        self.zoom_factor -= self.zoom_factor * ZOOM_STEP;
    }

    /// Left-handed view matrix with world +Y as up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, Vec3::UP)
    }
}
