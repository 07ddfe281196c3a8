//! Low-level rendering primitives: the frame buffer and the rasterizers that
//! draw into it.

mod framebuffer;
mod rasterizer;

pub use framebuffer::{ExportError, FrameBuffer};
pub use rasterizer::{draw_line, Rasterizer, ScanlineRasterizer, ScreenTriangle, ScreenVertex};
