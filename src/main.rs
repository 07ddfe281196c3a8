use std::path::PathBuf;

use anyhow::{Context, Result};
use gouraud::prelude::*;
use simplelog::TermLogger;

const DEFAULT_OUTPUT: &str = "frame.png";

fn main() -> Result<()> {
    let config = RenderConfig::default();

    TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let scene = [TriangleMesh::triangle()];
    let mut engine = Engine::new(config).with_camera(Camera::default());

    log::info!(
        "Rendering {} mesh(es) at {}x{} ({})",
        scene.len(),
        engine.config().width,
        engine.config().height,
        engine.render_mode()
    );
    let stats = engine.render(&scene);
    log::info!(
        "Drew {} face(s), culled {}, {} line(s)",
        stats.faces_drawn,
        stats.faces_culled,
        stats.lines_drawn
    );

    engine
        .frame_buffer()
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("Saved {}", output.display());

    Ok(())
}
