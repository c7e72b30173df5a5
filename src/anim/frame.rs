//! Frame orchestration and the cancellable loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::state::Animator;
use crate::surface::{Surface, SurfaceResult};

/// Advance one animation frame.
///
/// Fixed order: track the pointer, drift every live sparkle (oldest
/// first), spawn a fresh sparkle at the wand tip, retire dead ones,
/// then present. The sparkle spawned this frame starts drifting on the
/// next one.
pub fn advance_frame<S: Surface>(animator: &mut Animator<S>) -> SurfaceResult<()> {
    animator.position_wand()?;

    let velocity = animator.config.sparkle_velocity;
    let ids: Vec<_> = animator.sparkles().collect();
    for id in ids {
        animator.advance_sparkle(id, velocity)?;
    }

    let radius = animator.config.sparkle_radius;
    let color = animator.config.sparkle_color;
    animator.spawn_sparkle(radius, color)?;

    animator.retire_sparkles()?;

    let delay = animator.config.frame_delay;
    animator.present_frame(delay)?;
    animator.frame += 1;
    Ok(())
}

/// Cloneable flag for stopping the animation loop from another thread
#[derive(Debug, Clone)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask the loop to stop at the next frame boundary
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive frames until `token` stops the loop.
///
/// A stopped token ends the loop cleanly between frames; the first
/// surface failure ends it with that error instead of spinning on a
/// dead surface.
pub fn run_until_stopped<S: Surface>(
    animator: &mut Animator<S>,
    token: &StopToken,
) -> SurfaceResult<()> {
    while !token.is_stopped() {
        advance_frame(animator)?;
    }
    log::info!("animation stopped after {} frames", animator.frame);
    Ok(())
}
