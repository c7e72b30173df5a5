//! Frame loop module
//!
//! The whole animation is a single-threaded per-frame sequence:
//! - Wand tracks the pointer, every sparkle drifts, one sparkle spawns
//!   at the wand tip, retired sparkles come off, the frame presents
//! - The trail keeps insertion order; retirement never reorders it
//! - Only the frame-delay sleep suspends; cancellation lands on frame
//!   boundaries via `StopToken`

pub mod frame;
pub mod state;

pub use frame::{StopToken, advance_frame, run_until_stopped};
pub use state::{Animator, Wand};
