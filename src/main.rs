//! Sparkle Wand entry point
//!
//! Drives the animation against the in-memory scene; an orbiting
//! pointer script stands in for a human moving the mouse.

use anyhow::Result;
use glam::Vec2;

use sparkle_wand::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use sparkle_wand::surface::PointerScript;
use sparkle_wand::{
    Animator, AnimatorConfig, SceneSurface, StopToken, SurfaceError, run_until_stopped,
};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Sparkle Wand starting...");

    let size = Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    let surface = SceneSurface::with_script(
        size,
        PointerScript::Orbit {
            center: size * 0.5,
            radius: Vec2::new(size.x * 0.3, size.y * 0.25),
            step: 0.02,
        },
    );
    let mut animator = Animator::new(surface, AnimatorConfig::default())?;
    log::info!(
        "scene {}x{}, wand chasing an orbiting pointer",
        size.x,
        size.y
    );

    // Enter stops the loop; the token turns that into an orderly exit
    let token = StopToken::new();
    let stop = token.clone();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        stop.stop();
    });
    log::info!("press Enter to stop");

    match run_until_stopped(&mut animator, &token) {
        Ok(()) => {}
        Err(SurfaceError::Closed) => log::info!("surface closed, shutting down"),
        Err(e) => return Err(e.into()),
    }

    log::info!(
        "done: {} frames, {} sparkles still in the trail",
        animator.frame,
        animator.sparkle_count()
    );
    Ok(())
}
