//! In-memory owner of the polygon list.
//!
//! Honors every intent immediately, the way a typical host would. Used by
//! the replay tool and the scenario tests to close the loop around
//! [`RoiEditor`](crate::editor::RoiEditor).

use crate::constants::OWNER_ID_PREFIX;
use crate::message::{EditorAction, EditorInput};
use crate::model::{Polygon, PolygonId, PolygonSet, contains_id};

/// Holds the canonical polygon list and draw-mode flag, and assigns ids to
/// completed polygons.
#[derive(Debug, Clone)]
pub struct PolygonOwner {
    state: EditorInput,
    next_id: u64,
}

impl PolygonOwner {
    pub fn new(state: EditorInput) -> Self {
        Self { state, next_id: 1 }
    }

    /// Apply an intent from the editor.
    ///
    /// A completed polygon gets a fresh id and ends draw mode.
    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::DrawModeChange { is_draw_mode } => {
                self.state.is_draw_mode = is_draw_mode;
            }
            EditorAction::SetPolygons { polygons } => {
                log::debug!("Owner: replaced list with {} polygons", polygons.len());
                self.state.polygons = polygons;
            }
            EditorAction::PolygonComplete { polygon } => {
                let id = self.allocate_id();
                log::info!("Owner: stored polygon '{}'", id);
                self.state.polygons.push(polygon.into_polygon(id));
                self.state.is_draw_mode = false;
            }
        }
    }

    /// Replace the list from outside the editor, e.g. loading saved regions.
    pub fn load(&mut self, polygons: PolygonSet) {
        self.state.polygons = polygons;
    }

    /// Snapshot of the state to publish to the editor.
    pub fn input(&self) -> EditorInput {
        self.state.clone()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.state.polygons
    }

    pub fn is_draw_mode(&self) -> bool {
        self.state.is_draw_mode
    }

    fn allocate_id(&mut self) -> PolygonId {
        loop {
            let id = PolygonId::new(format!("{}-{}", OWNER_ID_PREFIX, self.next_id));
            self.next_id += 1;
            if !contains_id(&self.state.polygons, &id) {
                return id;
            }
        }
    }
}

impl Default for PolygonOwner {
    fn default() -> Self {
        Self::new(EditorInput::default())
    }
}
