//! Animation parameters and their defaults

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::surface::Color;

/// Animation parameters.
///
/// Everything the frame loop tunes lives here; `Default` reproduces the
/// classic look (thin 5x50 wand, yellow sparkles drifting 10 px per
/// frame at 60 fps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    /// Wand rectangle width (pixels)
    pub wand_width: f32,
    /// Wand rectangle height (pixels)
    pub wand_height: f32,

    /// Sparkle radius (pixels)
    pub sparkle_radius: f32,
    /// Upward sparkle drift per frame (pixels)
    pub sparkle_velocity: f32,
    /// Sparkle fill color
    pub sparkle_color: Color,

    /// Pause before presenting each frame
    pub frame_delay: Duration,

    /// Most sparkles kept alive at once; `None` lets the trail grow
    /// without bound
    pub max_sparkles: Option<usize>,
    /// Retire sparkles once they drift past the top edge
    pub cull_offscreen: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            wand_width: WAND_WIDTH,
            wand_height: WAND_HEIGHT,
            sparkle_radius: SPARKLE_RADIUS,
            sparkle_velocity: SPARKLE_VELOCITY,
            sparkle_color: Color::YELLOW,
            frame_delay: FRAME_DELAY,
            max_sparkles: Some(MAX_SPARKLES),
            cull_offscreen: true,
        }
    }
}

impl AnimatorConfig {
    /// Defaults with retirement disabled: every sparkle ever spawned
    /// stays in the trail
    pub fn unbounded() -> Self {
        Self {
            max_sparkles: None,
            cull_offscreen: false,
            ..Self::default()
        }
    }
}
