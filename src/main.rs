//! Interactive raycaster (default binary).
//!
//! Renders the scene every frame and presents it in the terminal through
//! crossterm, two framebuffer rows per text row. Keys: `w`/`s` or arrows move,
//! `a`/`d` or arrows turn, `q`/`Esc` quits.

use std::fs::OpenOptions;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{error, info};

use tile_raycaster::cli::parse_run_args;
use tile_raycaster::config::AppConfig;
use tile_raycaster::core::Scene;
use tile_raycaster::input::drain_pending;
use tile_raycaster::term::TerminalRenderer;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let run_args = parse_run_args(&args)?;
    let config = AppConfig::resolve(run_args.config.as_deref())?;

    init_logging(&config.log_path)?;
    info!("starting tile-raycaster, config {:?}", run_args.config);

    // A malformed map stops here, before the terminal is taken over.
    let mut scene = config.build_scene()?;
    let frame_budget = Duration::from_millis(config.input.frame_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut scene, frame_budget);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("render loop failed: {:#}", e);
    }
    info!("exiting after {} frames", scene.frame_count());
    result
}

fn init_logging(path: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, scene: &mut Scene, frame_budget: Duration) -> Result<()> {
    let mut skipped: u64 = 0;

    while scene.is_running() {
        let frame_start = Instant::now();

        drain_pending(|action| scene.queue_action(action))?;

        let stats = scene.render_frame();
        let pose = scene.pose();
        term.set_status(format!(
            " x {:.2}  y {:.2}  angle {:.2}  hits {}/{}  frame {}  skipped {} | w/s move  a/d turn  q quit",
            pose.x, pose.y, pose.angle, stats.wall_hits, stats.columns, stats.frame, skipped
        ));

        // A failed frame is already logged by the scene; skip it and go on.
        if scene.present(&mut *term).is_err() {
            skipped += 1;
        }

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}
