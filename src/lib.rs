//! A CPU-based software 3D rendering pipeline.
//!
//! Triangle meshes are transformed by `world * view * projection`, mapped to
//! window pixels and rasterized with Gouraud shading into an owned color and
//! depth buffer. No GPU and no windowing: the frame ends up in a
//! [`FrameBuffer`](render::FrameBuffer) that can be saved as a PNG.
//!
//! # Quick Start
//!
//! ```ignore
//! use gouraud::prelude::*;
//!
//! let mut engine = Engine::new(RenderConfig::default());
//! let stats = engine.render(&[TriangleMesh::cube(2.0)]);
//! engine.frame_buffer().save("frame.png")?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod loader;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use colors::Color;
pub use config::RenderConfig;
pub use engine::{Engine, FrameStats, RenderMode};
pub use loader::{load_obj, LoadError};
pub use mesh::{Face, TriangleMesh, Vertex};
pub use projection::Projection;
pub use render::{ExportError, FrameBuffer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use gouraud::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::colors::Color;
    pub use crate::mesh::{TriangleMesh, Vertex};

    // Engine
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Engine, FrameStats, RenderMode};
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::{Mat4, Quaternion, Vec2, Vec3, Vec4};

    // Rendering
    pub use crate::render::{draw_line, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex};
}
