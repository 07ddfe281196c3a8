//! Color and depth buffers.
//!
//! The depth buffer stores the projected Z of the nearest fragment written so
//! far. Smaller values are closer to the camera and every frame starts from
//! positive infinity.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use thiserror::Error;

use crate::colors::Color;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Owns a `width * height` color buffer of packed `0xRRGGBBAA` pixels and a
/// depth buffer of the same size.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create buffers cleared to `background` and infinite depth.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![background.pack(); size],
            depth_buffer: vec![f32::INFINITY; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset colors to `background` and depths to infinitely far.
    ///
    /// Must run before any drawing in a frame.
    pub fn clear(&mut self, background: Color) {
        self.color_buffer.fill(background.pack());
        self.depth_buffer.fill(f32::INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `z` is strictly smaller than the stored
    /// depth, so on a tie the first writer wins. Out-of-bounds coordinates
    /// are silently ignored.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32, z: f32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            if z < self.depth_buffer[idx] {
                self.depth_buffer[idx] = z;
                self.color_buffer[idx] = color.pack();
            }
        }
    }

    /// Set a pixel without depth testing.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color.pack();
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| Color::unpack(self.color_buffer[idx]))
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Packed pixels, row by row from the top.
    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let c = Color::unpack(self.color_buffer[(y * self.width + x) as usize]);
            Rgba([c.r, c.g, c.b, c.a])
        })
    }

    /// Writes the color buffer as a PNG (format chosen from the extension).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        self.to_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_write_wins() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        fb.draw_point(1, 1, 2.0, Color::RED);
        fb.draw_point(1, 1, 1.0, Color::GREEN);
        assert_eq!(fb.depth_at(1, 1), Some(1.0));
        assert_eq!(fb.get_pixel(1, 1), Some(Color::GREEN));
    }

    #[test]
    fn farther_write_is_rejected() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        fb.draw_point(1, 1, 1.0, Color::RED);
        fb.draw_point(1, 1, 2.0, Color::GREEN);
        assert_eq!(fb.depth_at(1, 1), Some(1.0));
        assert_eq!(fb.get_pixel(1, 1), Some(Color::RED));
    }

    #[test]
    fn equal_depth_keeps_first_writer() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        fb.draw_point(2, 3, 0.5, Color::RED);
        fb.draw_point(2, 3, 0.5, Color::BLUE);
        assert_eq!(fb.get_pixel(2, 3), Some(Color::RED));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        fb.draw_point(-1, 0, 0.0, Color::RED);
        fb.draw_point(4, 0, 0.0, Color::RED);
        fb.draw_point(0, 4, 0.0, Color::RED);
        assert!(fb.color_buffer().iter().all(|&p| p == Color::BLACK.pack()));
        assert_eq!(fb.get_pixel(4, 0), None);
    }

    #[test]
    fn clear_resets_depth() {
        let mut fb = FrameBuffer::new(2, 2, Color::BLACK);
        fb.draw_point(0, 0, 0.1, Color::RED);
        fb.clear(Color::WHITE);
        assert_eq!(fb.depth_at(0, 0), Some(f32::INFINITY));
        assert_eq!(fb.get_pixel(0, 0), Some(Color::WHITE));
        fb.draw_point(0, 0, 100.0, Color::RED);
        assert_eq!(fb.get_pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn pixels_are_stored_row_major() {
        let mut fb = FrameBuffer::new(5, 3, Color::BLACK);
        fb.set_pixel(4, 2, Color::RED);
        fb.set_pixel(0, 1, Color::BLUE);
        assert_eq!(fb.color_buffer().len(), 15);
        assert_eq!(fb.color_buffer()[14], Color::RED.pack());
        assert_eq!(fb.color_buffer()[5], Color::BLUE.pack());
    }

    #[test]
    fn image_matches_buffer() {
        let mut fb = FrameBuffer::new(3, 2, Color::BLACK);
        fb.set_pixel(2, 1, Color::new(1, 2, 3, 4));
        let img = fb.to_image();
        assert_eq!(img.get_pixel(2, 1), &Rgba([1, 2, 3, 4]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
