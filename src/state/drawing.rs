//! In-progress polygon drawing.
//!
//! A session lives inside draw mode and owns the open vertex chain, a
//! point-level redo stack, and the active draw color. The controller resets
//! it whenever draw mode ends, for whatever reason.

use crate::constants::{CLOSE_THRESHOLD, MIN_POLYGON_VERTICES};
use crate::model::{Color, Point, PolygonDraft, distance};

/// Coarse state of the open vertex chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No vertices yet.
    Empty,
    /// One or two vertices; clicks only add vertices.
    Open,
    /// Three or more vertices; a click near the first vertex closes.
    Closable,
}

/// Result of feeding a click into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The click became a new vertex.
    Added,
    /// The click landed on the first vertex and finished the polygon.
    Closed(PolygonDraft),
}

/// Result of a point-level undo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointUndo {
    /// The last vertex moved onto the redo stack.
    Removed(Point),
    /// Only one vertex was left; the caller should abandon drawing.
    CancelDrawing,
    /// Nothing to undo.
    Nothing,
}

/// The polygon being drawn: its open vertex chain, undone vertices and
/// draw color.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    points: Vec<Point>,
    redo_points: Vec<Point>,
    color: Color,
}

impl DrawingSession {
    pub fn new(color: Color) -> Self {
        Self {
            points: Vec::new(),
            redo_points: Vec::new(),
            color,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Change the color used for the polygon being drawn and the next ones.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn phase(&self) -> SessionPhase {
        match self.points.len() {
            0 => SessionPhase::Empty,
            n if n < MIN_POLYGON_VERTICES => SessionPhase::Open,
            _ => SessionPhase::Closable,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_points.is_empty()
    }

    /// Append a vertex. New forward history invalidates the redo stack.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.redo_points.clear();
        log::debug!(
            "Drawing: added vertex {} at ({:.4}, {:.4})",
            self.points.len(),
            point.x,
            point.y
        );
    }

    /// Treat `candidate` as either the closing click or a new vertex.
    ///
    /// Closing requires at least three vertices and a distance to the first
    /// vertex strictly below [`CLOSE_THRESHOLD`]. The session is left as is
    /// after closing; leaving draw mode is what clears it.
    pub fn test_close(&mut self, candidate: Point) -> ClickOutcome {
        if self.phase() == SessionPhase::Closable {
            let dist = distance(candidate, self.points[0]);
            if dist < CLOSE_THRESHOLD {
                log::info!(
                    "Drawing: closed polygon with {} vertices (snap distance {:.4})",
                    self.points.len(),
                    dist
                );
                return ClickOutcome::Closed(PolygonDraft {
                    points: self.points.clone(),
                    color: self.color.clone(),
                });
            }
        }
        self.add_point(candidate);
        ClickOutcome::Added
    }

    /// Step back one vertex.
    ///
    /// A single remaining vertex is not popped: abandoning the drawing is the
    /// only meaningful undo for it.
    pub fn undo_point(&mut self) -> PointUndo {
        match self.points.len() {
            0 => PointUndo::Nothing,
            1 => PointUndo::CancelDrawing,
            _ => match self.points.pop() {
                Some(point) => {
                    self.redo_points.push(point);
                    log::debug!("Drawing: undo vertex, {} left", self.points.len());
                    PointUndo::Removed(point)
                }
                None => PointUndo::Nothing,
            },
        }
    }

    /// Re-append the most recently undone vertex.
    pub fn redo_point(&mut self) -> Option<Point> {
        let point = self.redo_points.pop()?;
        self.points.push(point);
        log::debug!("Drawing: redo vertex, {} now", self.points.len());
        Some(point)
    }

    /// Drop all vertices and the redo stack. The color is kept.
    pub fn reset(&mut self) {
        self.points.clear();
        self.redo_points.clear();
    }
}
