//! Drawing surface contract
//!
//! The animation never talks to a real canvas directly; everything goes
//! through the `Surface` trait:
//! - Queries (dimensions, pointer, shape bounds) are infallible
//! - Shape creation/mutation/removal and present return `SurfaceError`
//! - Shape state is retained between frames; `present` only flushes it

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod scene;

pub use scene::{PointerScript, SceneSurface, ShapeKind, ShapeRecord};

/// Handle to a shape owned by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// Surface operation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface is no longer usable (window closed, host shut down)
    #[error("surface is closed")]
    Closed,
    /// The handle does not name a live shape on this surface
    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// RGBA color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Axis-aligned bounding box (top-left corner plus extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Box from (left, top) and (right, bottom) corners
    pub fn from_corners(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Box extending `rx`/`ry` out from `center` on each axis
    pub fn centered(center: Vec2, rx: f32, ry: f32) -> Self {
        Self {
            x: center.x - rx,
            y: center.y - ry,
            width: rx * 2.0,
            height: ry * 2.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shift the box by `delta`, keeping its extent
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// What the animation needs from a drawing surface.
///
/// Coordinates follow canvas convention: origin at the top-left corner,
/// y growing downward. Shapes keep their state across frames; mutating
/// calls take effect immediately and `present` flushes the frame.
pub trait Surface {
    /// Surface dimensions in pixels
    fn size(&self) -> Vec2;

    /// Last known pointer position (always answerable)
    fn pointer(&self) -> Vec2;

    /// Current bounding box of a shape, `None` for unknown handles
    fn bounds(&self, id: ShapeId) -> Option<Bounds>;

    /// Create a rectangle covering `bounds`
    fn create_rect(&mut self, bounds: Bounds) -> SurfaceResult<ShapeId>;

    /// Create an oval inscribed in `bounds`, filled with `color`
    fn create_oval(&mut self, bounds: Bounds, color: Color) -> SurfaceResult<ShapeId>;

    /// Shift a shape by `delta` relative to where it is
    fn translate(&mut self, id: ShapeId, delta: Vec2) -> SurfaceResult<()>;

    /// Move a shape so its top-left corner lands on `pos`
    fn move_to(&mut self, id: ShapeId, pos: Vec2) -> SurfaceResult<()>;

    /// Remove a shape from the surface
    fn remove(&mut self, id: ShapeId) -> SurfaceResult<()>;

    /// Flush pending shape state to the viewer
    fn present(&mut self) -> SurfaceResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_corners() {
        let b = Bounds::from_corners(92.5, 45.0, 102.5, 55.0);
        assert_eq!(b.x, 92.5);
        assert_eq!(b.y, 45.0);
        assert_eq!(b.width, 10.0);
        assert_eq!(b.height, 10.0);
        assert_eq!(b.right(), 102.5);
        assert_eq!(b.bottom(), 55.0);
    }

    #[test]
    fn test_bounds_centered() {
        let b = Bounds::centered(Vec2::new(97.5, 50.0), 5.0, 5.0);
        assert_eq!(b.x, 92.5);
        assert_eq!(b.y, 45.0);
        assert_eq!(b.width, 10.0);
        assert_eq!(b.height, 10.0);
        assert_eq!(b.center(), Vec2::new(97.5, 50.0));
    }

    #[test]
    fn test_bounds_translate() {
        let mut b = Bounds::new(10.0, 20.0, 4.0, 6.0);
        b.translate(Vec2::new(0.0, -10.0));
        assert_eq!(b.x, 10.0);
        assert_eq!(b.y, 10.0);
        assert_eq!(b.width, 4.0);
        assert_eq!(b.height, 6.0);
    }
}
