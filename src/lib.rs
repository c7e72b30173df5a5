//! Sparkle Wand - a rectangle wand chases the pointer and sheds a trail
//! of circular sparkles that drift up and off the top of the scene.
//!
//! Core modules:
//! - `anim`: Frame loop (wand tracking, sparkle drift, trail retirement)
//! - `surface`: Drawing surface contract and the in-memory scene
//! - `config`: Animation parameters and their defaults

pub mod anim;
pub mod config;
pub mod surface;

pub use anim::{Animator, StopToken, Wand, advance_frame, run_until_stopped};
pub use config::AnimatorConfig;
pub use surface::{Bounds, Color, SceneSurface, ShapeId, Surface, SurfaceError, SurfaceResult};

/// Animation defaults
pub mod consts {
    use std::time::Duration;

    /// Wand rectangle width (pixels)
    pub const WAND_WIDTH: f32 = 5.0;
    /// Wand rectangle height (pixels)
    pub const WAND_HEIGHT: f32 = 50.0;

    /// Sparkle radius (pixels)
    pub const SPARKLE_RADIUS: f32 = 5.0;
    /// Upward sparkle drift per frame (pixels)
    pub const SPARKLE_VELOCITY: f32 = 10.0;

    /// Pause before presenting each frame (~60 fps)
    pub const FRAME_DELAY: Duration = Duration::from_nanos(1_000_000_000 / 60);
    /// Default cap on live sparkles
    pub const MAX_SPARKLES: usize = 1024;

    /// Default scene surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;
}
