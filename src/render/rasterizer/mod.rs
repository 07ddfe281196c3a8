//! Depth-tested line drawing and triangle filling.
//!
//! Primitives arrive in window space: integer pixel coordinates (Y down),
//! the projected depth used by the depth test, and a per-vertex color. Every
//! fragment goes through [`FrameBuffer::draw_point`].

mod line;
mod scanline;

pub use line::draw_line;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::colors::Color;

/// A projected vertex mapped to window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    pub x: i32,
    pub y: i32,
    pub z: f32,
    pub color: Color,
}

impl ScreenVertex {
    pub const fn new(x: i32, y: i32, z: f32, color: Color) -> Self {
        Self { x, y, z, color }
    }
}

/// A triangle ready for rasterization in window space.
pub type ScreenTriangle = [ScreenVertex; 3];

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how a triangle is filled into the frame buffer, with
/// color and depth interpolated from the vertices.
pub trait Rasterizer {
    fn fill_triangle(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer);
}
