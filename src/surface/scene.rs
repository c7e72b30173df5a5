//! In-memory drawing surface
//!
//! `SceneSurface` retains every shape in a flat store and never renders
//! anything, which makes it usable both as the demo backend and as the
//! test double: tests script the pointer, inspect shape records, and
//! flip the surface closed to exercise failure paths.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Bounds, Color, ShapeId, Surface, SurfaceError, SurfaceResult};
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Shape geometry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Oval,
}

/// Everything the surface retains about one shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub kind: ShapeKind,
    pub bounds: Bounds,
    pub color: Color,
}

/// How the scripted pointer behaves between frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerScript {
    /// Pointer parked at a fixed position
    Hold(Vec2),
    /// Pointer sweeping an ellipse around `center`, advancing `step`
    /// radians per presented frame
    Orbit { center: Vec2, radius: Vec2, step: f32 },
}

/// Headless surface with a scriptable pointer.
///
/// The pointer script stands in for a human moving the mouse: `Hold`
/// keeps it still, `Orbit` sweeps it along an ellipse one step per
/// presented frame.
#[derive(Debug, Clone)]
pub struct SceneSurface {
    size: Vec2,
    script: PointerScript,
    /// Orbit angle, advanced on present
    phase: f32,
    shapes: HashMap<ShapeId, ShapeRecord>,
    next_id: u32,
    presented: u64,
    closed: bool,
}

impl Default for SceneSurface {
    fn default() -> Self {
        Self::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT))
    }
}

impl SceneSurface {
    /// Surface of the given size with the pointer held at its center
    pub fn new(size: Vec2) -> Self {
        Self::with_script(size, PointerScript::Hold(size * 0.5))
    }

    pub fn with_script(size: Vec2, script: PointerScript) -> Self {
        Self {
            size,
            script,
            phase: 0.0,
            shapes: HashMap::new(),
            next_id: 1,
            presented: 0,
            closed: false,
        }
    }

    /// Park the pointer at a fixed position
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.script = PointerScript::Hold(pos);
    }

    pub fn set_script(&mut self, script: PointerScript) {
        self.script = script;
    }

    /// Mark the surface unusable; fallible operations return
    /// `SurfaceError::Closed` from here on
    pub fn close(&mut self) {
        if !self.closed {
            log::debug!("scene surface closed after {} frames", self.presented);
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Frames flushed so far
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    fn alloc_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn ensure_open(&self) -> SurfaceResult<()> {
        if self.closed {
            Err(SurfaceError::Closed)
        } else {
            Ok(())
        }
    }

    fn record_mut(&mut self, id: ShapeId) -> SurfaceResult<&mut ShapeRecord> {
        self.shapes.get_mut(&id).ok_or(SurfaceError::UnknownShape(id))
    }
}

impl Surface for SceneSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn pointer(&self) -> Vec2 {
        match self.script {
            PointerScript::Hold(pos) => pos,
            PointerScript::Orbit { center, radius, .. } => {
                center + Vec2::new(self.phase.cos() * radius.x, self.phase.sin() * radius.y)
            }
        }
    }

    fn bounds(&self, id: ShapeId) -> Option<Bounds> {
        self.shapes.get(&id).map(|record| record.bounds)
    }

    fn create_rect(&mut self, bounds: Bounds) -> SurfaceResult<ShapeId> {
        self.ensure_open()?;
        let id = self.alloc_id();
        self.shapes.insert(
            id,
            ShapeRecord {
                kind: ShapeKind::Rect,
                bounds,
                color: Color::BLACK,
            },
        );
        Ok(id)
    }

    fn create_oval(&mut self, bounds: Bounds, color: Color) -> SurfaceResult<ShapeId> {
        self.ensure_open()?;
        let id = self.alloc_id();
        self.shapes.insert(
            id,
            ShapeRecord {
                kind: ShapeKind::Oval,
                bounds,
                color,
            },
        );
        Ok(id)
    }

    fn translate(&mut self, id: ShapeId, delta: Vec2) -> SurfaceResult<()> {
        self.ensure_open()?;
        self.record_mut(id)?.bounds.translate(delta);
        Ok(())
    }

    fn move_to(&mut self, id: ShapeId, pos: Vec2) -> SurfaceResult<()> {
        self.ensure_open()?;
        let record = self.record_mut(id)?;
        record.bounds.x = pos.x;
        record.bounds.y = pos.y;
        Ok(())
    }

    fn remove(&mut self, id: ShapeId) -> SurfaceResult<()> {
        self.ensure_open()?;
        self.shapes
            .remove(&id)
            .map(|_| ())
            .ok_or(SurfaceError::UnknownShape(id))
    }

    fn present(&mut self) -> SurfaceResult<()> {
        self.ensure_open()?;
        self.presented += 1;
        if let PointerScript::Orbit { step, .. } = self.script {
            self.phase += step;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_query_shapes() {
        let mut surface = SceneSurface::default();
        let rect = surface.create_rect(Bounds::new(0.0, 0.0, 5.0, 50.0)).unwrap();
        let oval = surface
            .create_oval(Bounds::new(92.5, 45.0, 10.0, 10.0), Color::YELLOW)
            .unwrap();

        assert_ne!(rect, oval);
        assert_eq!(surface.shape_count(), 2);

        let record = surface.shape(rect).unwrap();
        assert_eq!(record.kind, ShapeKind::Rect);
        assert_eq!(record.bounds, Bounds::new(0.0, 0.0, 5.0, 50.0));

        let record = surface.shape(oval).unwrap();
        assert_eq!(record.kind, ShapeKind::Oval);
        assert_eq!(record.color, Color::YELLOW);
        assert_eq!(surface.bounds(oval), Some(Bounds::new(92.5, 45.0, 10.0, 10.0)));
    }

    #[test]
    fn test_translate_and_move_to() {
        let mut surface = SceneSurface::default();
        let id = surface
            .create_oval(Bounds::new(100.0, 50.0, 10.0, 10.0), Color::YELLOW)
            .unwrap();

        surface.translate(id, Vec2::new(0.0, -10.0)).unwrap();
        assert_eq!(surface.bounds(id).unwrap().y, 40.0);
        assert_eq!(surface.bounds(id).unwrap().x, 100.0);

        surface.move_to(id, Vec2::new(7.0, 3.0)).unwrap();
        let b = surface.bounds(id).unwrap();
        assert_eq!((b.x, b.y), (7.0, 3.0));
        assert_eq!((b.width, b.height), (10.0, 10.0));
    }

    #[test]
    fn test_remove() {
        let mut surface = SceneSurface::default();
        let id = surface.create_rect(Bounds::new(0.0, 0.0, 1.0, 1.0)).unwrap();

        surface.remove(id).unwrap();
        assert_eq!(surface.shape_count(), 0);
        assert!(surface.bounds(id).is_none());
        assert_eq!(surface.remove(id), Err(SurfaceError::UnknownShape(id)));
    }

    #[test]
    fn test_unknown_shape_errors() {
        let mut surface = SceneSurface::default();
        let bogus = ShapeId(999);
        assert_eq!(
            surface.translate(bogus, Vec2::ZERO),
            Err(SurfaceError::UnknownShape(bogus))
        );
        assert_eq!(
            surface.move_to(bogus, Vec2::ZERO),
            Err(SurfaceError::UnknownShape(bogus))
        );
    }

    #[test]
    fn test_closed_surface_rejects_operations() {
        let mut surface = SceneSurface::default();
        let id = surface.create_rect(Bounds::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        surface.close();

        assert_eq!(
            surface.create_rect(Bounds::new(0.0, 0.0, 1.0, 1.0)),
            Err(SurfaceError::Closed)
        );
        assert_eq!(
            surface.create_oval(Bounds::new(0.0, 0.0, 1.0, 1.0), Color::WHITE),
            Err(SurfaceError::Closed)
        );
        assert_eq!(surface.translate(id, Vec2::ONE), Err(SurfaceError::Closed));
        assert_eq!(surface.remove(id), Err(SurfaceError::Closed));
        assert_eq!(surface.present(), Err(SurfaceError::Closed));

        // Queries keep answering from retained state
        assert!(surface.bounds(id).is_some());
        assert_eq!(surface.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_present_leaves_shapes_alone() {
        let mut surface = SceneSurface::default();
        let id = surface
            .create_oval(Bounds::new(10.0, 10.0, 10.0, 10.0), Color::YELLOW)
            .unwrap();

        for _ in 0..3 {
            surface.present().unwrap();
        }
        assert_eq!(surface.presented_frames(), 3);
        assert_eq!(surface.bounds(id), Some(Bounds::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_hold_pointer_is_stable() {
        let mut surface = SceneSurface::new(Vec2::new(400.0, 400.0));
        assert_eq!(surface.pointer(), Vec2::new(200.0, 200.0));
        surface.present().unwrap();
        assert_eq!(surface.pointer(), Vec2::new(200.0, 200.0));

        surface.set_pointer(Vec2::new(100.0, 100.0));
        assert_eq!(surface.pointer(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_orbit_pointer_advances_on_present() {
        let center = Vec2::new(200.0, 150.0);
        let mut surface = SceneSurface::with_script(
            Vec2::new(400.0, 300.0),
            PointerScript::Orbit {
                center,
                radius: Vec2::new(100.0, 50.0),
                step: std::f32::consts::FRAC_PI_2,
            },
        );

        // Phase 0: pointer sits at center + (radius.x, 0)
        assert!((surface.pointer() - Vec2::new(300.0, 150.0)).length() < 1e-4);

        surface.present().unwrap();
        // Quarter turn: center + (0, radius.y)
        assert!((surface.pointer() - Vec2::new(200.0, 200.0)).length() < 1e-3);
    }
}
