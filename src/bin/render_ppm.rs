//! Single-frame file export.
//!
//! Renders one frame from the configured pose and writes it as a binary PPM
//! (or a raw packed-pixel dump with `--format raw-argb|raw-abgr`).
//!
//! ```text
//! render-ppm [--config level.json] [--out out.ppm] [--format ppm] [--gradient] [--gaze]
//! ```

use anyhow::{Context, Result};
use log::info;

use tile_raycaster::cli::parse_export_args;
use tile_raycaster::config::AppConfig;
use tile_raycaster::export::FileSink;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let export = parse_export_args(&args)?;

    let mut config = AppConfig::resolve(export.config.as_deref())?;
    config.screen.gradient |= export.gradient;
    config.camera.show_gaze |= export.gaze;

    let mut scene = config.build_scene()?;
    let stats = scene.render_frame();
    info!(
        "rendered {}x{}: {} of {} columns hit a wall",
        config.screen.width, config.screen.height, stats.wall_hits, stats.columns
    );

    let mut sink = FileSink::new(&export.out, export.format);
    scene
        .present(&mut sink)
        .with_context(|| format!("failed to write {}", export.out.display()))?;
    info!("wrote {}", export.out.display());
    Ok(())
}
