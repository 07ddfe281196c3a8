//! Core rendering engine.
//!
//! The [`Engine`] owns the per-frame state: color and depth buffers, camera,
//! projection and configuration. [`Engine::render`] runs one pass:
//!
//! 1. clear both buffers
//! 2. build `view * projection` from a snapshot of the camera
//! 3. draw the world axes and ground grid (if enabled)
//! 4. for each mesh, transform vertices by `world * view * projection`, map
//!    them to window pixels and rasterize the faces
//!
//! The pass is synchronous and only writes the engine's own buffers.

use std::fmt;

use crate::camera::Camera;
use crate::colors::{self, Color};
use crate::config::RenderConfig;
use crate::math::{Mat4, Vec3};
use crate::mesh::TriangleMesh;
use crate::projection::Projection;
use crate::render::{draw_line, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex};

/// Depth bias so wireframes render slightly in front of filled triangles.
const WIREFRAME_DEPTH_BIAS: f32 = 0.0001;

/// Number of grid cells along each side of the ground grid.
const GRID_SIZE: i32 = 8;
const GRID_STEP: f32 = 1.0;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Triangle edges only.
    Wireframe,
    /// Gouraud-filled triangles.
    #[default]
    Filled,
    /// Filled triangles with edges on top.
    FilledWireframe,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::FilledWireframe => write!(f, "FilledWireframe"),
        }
    }
}

/// What one call to [`Engine::render`] drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces_drawn: usize,
    pub faces_culled: usize,
    pub lines_drawn: usize,
}

pub struct Engine {
    config: RenderConfig,
    buffer: FrameBuffer,
    projection: Projection,
    rasterizer: ScanlineRasterizer,
    camera: Camera,
}

impl Engine {
    pub fn new(config: RenderConfig) -> Self {
        log::debug!(
            "engine {}x{} mode={} culling={}",
            config.width,
            config.height,
            config.render_mode,
            config.backface_culling
        );
        Self {
            buffer: FrameBuffer::new(config.width, config.height, config.background),
            projection: config.projection(),
            rasterizer: ScanlineRasterizer::new(),
            camera: Camera::default(),
            config,
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.config.render_mode
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera access for input handlers. Call between frames only.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.set_size(width, height);
        self.buffer = FrameBuffer::new(width, height, self.config.background);
        self.projection.set_aspect_ratio(self.config.aspect_ratio());
    }

    /// The color and depth buffers as left by the last render pass.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.camera.view_matrix() * self.projection.matrix()
    }

    /// Maps a projected X coordinate to a window column.
    #[inline]
    pub fn map_x_to_win(&self, x: f32) -> i32 {
        let width = self.buffer.width() as f32;
        let aspect = width / self.buffer.height() as f32;
        (x * self.camera.zoom_factor / aspect + width / 2.0) as i32
    }

    /// Maps a projected Y coordinate to a window row. Y grows downwards.
    #[inline]
    pub fn map_y_to_win(&self, y: f32) -> i32 {
        (-y * self.camera.zoom_factor + self.buffer.height() as f32 / 2.0) as i32
    }

    /// Transforms a point and maps it to window space.
    fn project(&self, point: Vec3, transform: &Mat4, color: Color) -> ScreenVertex {
        let p = transform.transform_point(point);
        ScreenVertex::new(self.map_x_to_win(p.x()), self.map_y_to_win(p.y()), p.z(), color)
    }

    fn line(&mut self, from: Vec3, to: Vec3, transform: &Mat4, color: Color) {
        let a = self.project(from, transform, color);
        let b = self.project(to, transform, color);
        draw_line(&mut self.buffer, a, b);
    }

    /// Renders one frame of `meshes` into the frame buffer.
    pub fn render(&mut self, meshes: &[TriangleMesh]) -> FrameStats {
        self.buffer.clear(self.config.background);

        let view_projection = self.view_projection_matrix();
        let mut stats = FrameStats::default();

        if self.config.show_axes {
            stats.lines_drawn += self.render_axes(&view_projection);
        }
        if self.config.show_grid {
            stats.lines_drawn += self.render_grid(&view_projection);
        }
        for mesh in meshes {
            self.render_mesh(mesh, &view_projection, &mut stats);
        }

        log::trace!(
            "frame: {} faces drawn, {} culled, {} lines",
            stats.faces_drawn,
            stats.faces_culled,
            stats.lines_drawn
        );
        stats
    }

    fn render_mesh(&mut self, mesh: &TriangleMesh, view_projection: &Mat4, stats: &mut FrameStats) {
        let world = mesh.world_matrix();
        let transform = world * *view_projection;
        let eye = self.camera.eye;
        let (draw_filled, draw_wireframe) = match self.config.render_mode {
            RenderMode::Wireframe => (false, true),
            RenderMode::Filled => (true, false),
            RenderMode::FilledWireframe => (true, true),
        };

        for face in mesh.faces() {
            let vertices = mesh.face_vertices(face);

            if self.config.backface_culling {
                let normal = world.transform_vector(face.normal);
                let to_eye = eye - world.transform_point(vertices[0].pos);
                if normal.dot(to_eye) < 0.0 {
                    stats.faces_culled += 1;
                    continue;
                }
            }

            let screen = vertices.map(|v| self.project(v.pos, &transform, v.color));

            if draw_filled {
                self.rasterizer.fill_triangle(&screen, &mut self.buffer);
            }
            if draw_wireframe {
                for i in 0..3 {
                    let mut a = screen[i];
                    let mut b = screen[(i + 1) % 3];
                    a.color = colors::WIREFRAME;
                    b.color = colors::WIREFRAME;
                    a.z -= WIREFRAME_DEPTH_BIAS;
                    b.z -= WIREFRAME_DEPTH_BIAS;
                    draw_line(&mut self.buffer, a, b);
                }
                stats.lines_drawn += 3;
            }
            stats.faces_drawn += 1;
        }
    }

    /// Unit-length X, Y and Z axes from the origin.
    fn render_axes(&mut self, view_projection: &Mat4) -> usize {
        let axes = [
            (Vec3::UNIT_X, colors::AXIS_X),
            (Vec3::UNIT_Y, colors::AXIS_Y),
            (Vec3::UNIT_Z, colors::AXIS_Z),
        ];
        for (axis, color) in axes {
            self.line(Vec3::ZERO, axis, view_projection, color);
        }
        axes.len()
    }

    /// Ground grid in the XZ plane, centred on the origin.
    fn render_grid(&mut self, view_projection: &Mat4) -> usize {
        let half = GRID_SIZE as f32 / 2.0 * GRID_STEP;
        let extent = GRID_SIZE as f32 * GRID_STEP;
        for n in 0..=GRID_SIZE {
            let offset = n as f32 * GRID_STEP;
            self.line(
                Vec3::new(half, 0.0, half - offset),
                Vec3::new(half - extent, 0.0, half - offset),
                view_projection,
                colors::GRID,
            );
            self.line(
                Vec3::new(half - offset, 0.0, half),
                Vec3::new(half - offset, 0.0, half - extent),
                view_projection,
                colors::GRID,
            );
        }
        2 * (GRID_SIZE as usize + 1)
    }
}
