//! Render configuration.
//!
//! [`RenderConfig`] gathers everything the [`Engine`](crate::Engine) needs to
//! set up a frame. Defaults reproduce the reference viewer; setters return
//! `&mut Self` for chaining:
//!
//! ```ignore
//! let mut config = RenderConfig::default();
//! config.set_size(320, 240).set_render_mode(RenderMode::Wireframe);
//! ```

use log::LevelFilter;

use crate::colors::{self, Color};
use crate::engine::RenderMode;
use crate::projection::{Projection, DEFAULT_FOV_Y, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub render_mode: RenderMode,
    pub show_axes: bool,
    pub show_grid: bool,
    pub backface_culling: bool,
    pub log_level: LevelFilter,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: colors::BACKGROUND,
            fov_y: DEFAULT_FOV_Y,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            render_mode: RenderMode::default(),
            show_axes: true,
            show_grid: true,
            backface_culling: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Projection built from the field of view, depth range and viewport size.
    pub fn projection(&self) -> Projection {
        Projection::new(self.fov_y, self.aspect_ratio(), self.z_near, self.z_far)
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn set_background(&mut self, background: Color) -> &mut Self {
        self.background = background;
        self
    }

    pub fn set_depth_range(&mut self, z_near: f32, z_far: f32) -> &mut Self {
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    pub fn set_fov_y(&mut self, fov_y: f32) -> &mut Self {
        self.fov_y = fov_y;
        self
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) -> &mut Self {
        self.render_mode = mode;
        self
    }

    /// Toggle both scene overlays: world axes and ground grid.
    pub fn set_overlays(&mut self, enabled: bool) -> &mut Self {
        self.show_axes = enabled;
        self.show_grid = enabled;
        self
    }

    pub fn set_backface_culling(&mut self, enabled: bool) -> &mut Self {
        self.backface_culling = enabled;
        self
    }

    pub fn set_log_level(&mut self, level: LevelFilter) -> &mut Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_reference_viewer() {
        let config = RenderConfig::default();
        assert_eq!(config.background.pack(), 0xfafad2ff);
        assert_relative_eq!(config.fov_y, 0.78);
        assert_relative_eq!(config.z_near, 0.01);
        assert_relative_eq!(config.z_far, 25.0);
        assert!(!config.backface_culling);
    }

    #[test]
    fn setters_chain() {
        let mut config = RenderConfig::new();
        config
            .set_size(320, 160)
            .set_overlays(false)
            .set_render_mode(RenderMode::Wireframe);
        assert_eq!((config.width, config.height), (320, 160));
        assert!(!config.show_axes && !config.show_grid);
        assert_eq!(config.render_mode, RenderMode::Wireframe);
        assert_relative_eq!(config.projection().aspect_ratio(), 2.0);
    }
}
