//! Scanline-based Gouraud triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in window space)
//! 2. **Decompose** the triangle into a flat-bottom and/or a flat-top part
//! 3. **Rasterize** each scanline between a left and a right edge
//!
//! # Triangle Decomposition
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//!
//!   General triangle      Flat-bottom (top) + Flat-top (bottom)
//! ```
//!
//! The split is decided by exact Y equality of the integer vertex rows. The
//! split point lies on the long edge v0 -> v2 and carries the depth and color
//! interpolated there, so both halves share one boundary.
//!
//! # Gouraud Shading
//!
//! Depth and color are interpolated along the left and right edges by
//! scanline progress, then across each span by X progress. Every pixel is
//! submitted to the depth test.

use super::{Rasterizer, ScreenTriangle, ScreenVertex};
use crate::colors::{lerp_rgb, Color};
use crate::render::framebuffer::FrameBuffer;

/// Interpolated attributes at one point of an edge or span.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    x: f32,
    y: i32,
    z: f32,
    rgb: [f32; 3],
}

impl Sample {
    fn lerp(&self, other: &Self, t: f32) -> (f32, f32, [f32; 3]) {
        (
            self.x + (other.x - self.x) * t,
            self.z + (other.z - self.z) * t,
            lerp_rgb(self.rgb, other.rgb, t),
        )
    }
}

impl From<ScreenVertex> for Sample {
    fn from(v: ScreenVertex) -> Self {
        Self {
            x: v.x as f32,
            y: v.y,
            z: v.z,
            rgb: v.color.to_rgb_f32(),
        }
    }
}

/// An edge walked one scanline at a time from `top` down to `bottom`.
#[derive(Clone, Copy, Debug)]
struct Edge {
    top: Sample,
    bottom: Sample,
}

impl Edge {
    fn new(top: Sample, bottom: Sample) -> Self {
        debug_assert!(top.y < bottom.y, "edge must span at least one scanline");
        Self { top, bottom }
    }

    /// Attributes where the edge crosses scanline `y`.
    ///
    /// Evaluated from the edge's end points rather than accumulated, so the
    /// last scanline lands exactly on `bottom`.
    fn at(&self, y: i32) -> Sample {
        // Rows may sit anywhere in the i32 range; widen before subtracting.
        let t = (y as f64 - self.top.y as f64) / (self.bottom.y as f64 - self.top.y as f64);
        let t = t as f32;
        let (x, z, rgb) = self.top.lerp(&self.bottom, t);
        Sample { x, y, z, rgb }
    }
}

/// Scanline-based triangle rasterizer with Gouraud shading.
///
/// Input vertices may be in any order and any position; rows and columns
/// outside the frame buffer are skipped before any interpolation work.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate (ascending: top to bottom).
    fn sort_vertices(mut v: ScreenTriangle) -> ScreenTriangle {
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        if v[2].y < v[1].y {
            v.swap(1, 2);
        }
        if v[1].y < v[0].y {
            v.swap(0, 1);
        }
        v
    }

    /// Fills scanlines `y_start..=y_end` between two edges.
    fn fill_rows(buffer: &mut FrameBuffer, a: Edge, b: Edge, y_start: i32, y_end: i32) {
        let y_start = y_start.max(0);
        let y_end = y_end.min(buffer.height() as i32 - 1);
        for y in y_start..=y_end {
            Self::draw_span(buffer, a.at(y), b.at(y));
        }
    }

    /// Fills one horizontal span, interpolating depth and color across X.
    fn draw_span(buffer: &mut FrameBuffer, a: Sample, b: Sample) {
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
        let width = right.x - left.x;

        let x_start = (left.x.ceil() as i32).max(0);
        let x_end = (right.x.floor() as i32).min(buffer.width() as i32 - 1);

        for x in x_start..=x_end {
            let t = if width > 0.0 {
                (x as f32 - left.x) / width
            } else {
                0.0
            };
            let (_, z, rgb) = left.lerp(&right, t);
            buffer.draw_point(x, left.y, z, Color::from_rgb_f32(rgb));
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Fills a triangle using the scanline algorithm.
    ///
    /// - `v0.y == v2.y`: zero height, drawn as a single span between the
    ///   outermost vertices
    /// - `v0.y == v1.y`: flat-top, edges v0 -> v2 and v1 -> v2
    /// - `v1.y == v2.y`: flat-bottom, edges v0 -> v1 and v0 -> v2
    /// - otherwise: flat-bottom rows `v0.y..=v1.y`, then flat-top rows
    ///   `v1.y+1..=v2.y` sharing the split point on v0 -> v2
    fn fill_triangle(&self, triangle: &ScreenTriangle, buffer: &mut FrameBuffer) {
        let [v0, v1, v2] = Self::sort_vertices(*triangle).map(Sample::from);

        if v0.y == v2.y {
            let mut row = [v0, v1, v2];
            row.sort_by(|a, b| a.x.total_cmp(&b.x));
            if (0..buffer.height() as i32).contains(&v0.y) {
                Self::draw_span(buffer, row[0], row[2]);
            }
            return;
        }

        if v0.y == v1.y {
            Self::fill_rows(buffer, Edge::new(v0, v2), Edge::new(v1, v2), v0.y, v2.y);
        } else if v1.y == v2.y {
            Self::fill_rows(buffer, Edge::new(v0, v1), Edge::new(v0, v2), v0.y, v2.y);
        } else {
            let split = Edge::new(v0, v2).at(v1.y);
            Self::fill_rows(buffer, Edge::new(v0, v1), Edge::new(v0, split), v0.y, v1.y);
            Self::fill_rows(buffer, Edge::new(v1, v2), Edge::new(split, v2), v1.y + 1, v2.y);
        }
    }
}
