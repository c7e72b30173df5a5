//! Animation session state
//!
//! Everything one running animation owns lives here: the surface, the
//! wand, the sparkle trail, and the parameters driving them.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::AnimatorConfig;
use crate::surface::{Bounds, Color, ShapeId, Surface, SurfaceResult};

/// The pointer-tracking rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wand {
    /// Rectangle shape on the surface
    pub shape: ShapeId,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Wand {
    /// Top-center point, where sparkles come from
    pub fn tip(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0, self.pos.y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// One running animation session.
///
/// Owns the drawing surface, the wand, and the sparkle trail. All
/// operations run on the calling thread; the only suspension is the
/// frame-delay sleep in [`Animator::present_frame`].
pub struct Animator<S: Surface> {
    /// Drawing surface receiving every shape
    pub surface: S,
    /// Surface dimensions, read once at creation
    pub size: Vec2,
    /// The pointer-tracking wand
    pub wand: Wand,
    /// Live sparkles, oldest at the front
    sparkles: VecDeque<ShapeId>,
    /// Animation parameters
    pub config: AnimatorConfig,
    /// Completed frames
    pub frame: u64,
}

impl<S: Surface> Animator<S> {
    /// Create a session over `surface`, placing the wand at the origin
    pub fn new(mut surface: S, config: AnimatorConfig) -> SurfaceResult<Self> {
        let size = surface.size();
        let shape =
            surface.create_rect(Bounds::new(0.0, 0.0, config.wand_width, config.wand_height))?;
        let wand = Wand {
            shape,
            pos: Vec2::ZERO,
            width: config.wand_width,
            height: config.wand_height,
        };
        Ok(Self {
            surface,
            size,
            wand,
            sparkles: VecDeque::new(),
            config,
            frame: 0,
        })
    }

    /// Snap the wand under the pointer: the pointer sits on the wand's
    /// bottom-right corner, so the tip leads it
    pub fn position_wand(&mut self) -> SurfaceResult<()> {
        let pointer = self.surface.pointer();
        let pos = pointer - Vec2::new(self.wand.width, self.wand.height);
        self.wand.pos = pos;
        self.surface.move_to(self.wand.shape, pos)
    }

    /// Drift one sparkle upward by `velocity` pixels
    pub fn advance_sparkle(&mut self, sparkle: ShapeId, velocity: f32) -> SurfaceResult<()> {
        self.surface.translate(sparkle, Vec2::new(0.0, -velocity))
    }

    /// Create a sparkle centered on the wand tip and append it to the
    /// trail, returning its handle
    pub fn spawn_sparkle(&mut self, radius: f32, color: Color) -> SurfaceResult<ShapeId> {
        let bounds = Bounds::centered(self.wand.tip(), radius, radius);
        let id = self.surface.create_oval(bounds, color)?;
        self.sparkles.push_back(id);
        Ok(id)
    }

    /// Wait out the frame delay, then flush the frame to the surface
    pub fn present_frame(&mut self, delay: Duration) -> SurfaceResult<()> {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.surface.present()
    }

    /// Live sparkle handles, oldest first
    pub fn sparkles(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.sparkles.iter().copied()
    }

    pub fn sparkle_count(&self) -> usize {
        self.sparkles.len()
    }

    /// Apply the retirement policy from the config: drop sparkles past
    /// the top edge, then enforce the cap from the oldest end
    pub fn retire_sparkles(&mut self) -> SurfaceResult<()> {
        if self.config.cull_offscreen {
            self.cull_offscreen()?;
        }
        if let Some(max) = self.config.max_sparkles {
            self.retire_over_cap(max)?;
        }
        Ok(())
    }

    fn cull_offscreen(&mut self) -> SurfaceResult<()> {
        let mut kept = VecDeque::with_capacity(self.sparkles.len());
        for id in std::mem::take(&mut self.sparkles) {
            let Some(bounds) = self.surface.bounds(id) else {
                // Shape already gone; drop the handle
                continue;
            };
            if bounds.bottom() < 0.0 {
                self.surface.remove(id)?;
                log::debug!("culled sparkle {:?} past the top edge", id);
            } else {
                kept.push_back(id);
            }
        }
        self.sparkles = kept;
        Ok(())
    }

    fn retire_over_cap(&mut self, max: usize) -> SurfaceResult<()> {
        while self.sparkles.len() > max {
            let Some(id) = self.sparkles.pop_front() else {
                break;
            };
            self.surface.remove(id)?;
            log::debug!("retired sparkle {:?} over cap {}", id, max);
        }
        Ok(())
    }
}
