//! Scenario tests for the interaction controller.
//!
//! Most tests drive a [`Harness`] that forwards every emitted intent to an
//! in-memory owner and publishes the result back, like a live host would.

mod keyboard_tests;

use super::RoiEditor;
use crate::message::{EditorAction, EditorEvent, EditorInput};
use crate::model::{CanvasRect, Color, Point, Polygon};
use crate::owner::PolygonOwner;

/// 1000x1000 canvas at the origin, so device pixels map to thousandths.
fn rect() -> CanvasRect {
    CanvasRect::new(0.0, 0.0, 1000.0, 1000.0)
}

fn square(id: &str, x: f64, y: f64, size: f64) -> Polygon {
    Polygon::new(
        id,
        vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ],
        "#FF3B30",
    )
}

struct Harness {
    editor: RoiEditor,
    owner: PolygonOwner,
}

impl Harness {
    fn new(input: EditorInput) -> Self {
        Self {
            editor: RoiEditor::new(input.clone()),
            owner: PolygonOwner::new(input),
        }
    }

    fn drawing() -> Self {
        Self::new(EditorInput::new("frame.jpg").with_draw_mode(true))
    }

    fn with_polygons(polygons: Vec<Polygon>) -> Self {
        Self::new(EditorInput::new("frame.jpg").with_polygons(polygons))
    }

    /// Hand an intent to the owner and publish the owner's new state.
    fn dispatch(&mut self, action: Option<EditorAction>) -> Option<EditorAction> {
        if let Some(action) = &action {
            self.owner.apply(action.clone());
            self.editor.sync(self.owner.input());
        }
        action
    }

    fn send(&mut self, event: EditorEvent) -> Option<EditorAction> {
        let action = self.editor.update(event);
        self.dispatch(action)
    }

    /// Canvas click in device pixels.
    fn click(&mut self, x: f64, y: f64) -> Option<EditorAction> {
        self.send(EditorEvent::CanvasClick { x, y, rect: rect() })
    }

    fn start_drawing(&mut self, color: &str) {
        let action = self.editor.start_drawing_with_color(Color::new(color));
        self.dispatch(Some(action));
    }

    /// Draw and close a right triangle with its corner at `(x, y)` pixels.
    fn draw_triangle(&mut self, x: f64, y: f64) -> Option<EditorAction> {
        if !self.editor.is_draw_mode() {
            self.start_drawing("#DF00FF");
        }
        self.click(x, y);
        self.click(x + 200.0, y);
        self.click(x + 200.0, y + 200.0);
        self.click(x, y)
    }
}
