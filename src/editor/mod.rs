//! The ROI editor interaction controller.
//!
//! [`RoiEditor`] combines the externally owned state (polygon list and
//! draw-mode flag) with local interaction state (drawing session, history,
//! selection, hover, color picker) and turns host events into intents for
//! the owner.
//!
//! Mode changes are owned by the caller of [`RoiEditor::sync`]. The editor
//! only requests them; the transition actions run when the new flag
//! actually arrives:
//!
//! ```text
//!   Select ──(flag true)──► Draw      clear selection, fresh session
//!   Draw   ──(flag false)─► Select    discard session, clear hover
//! ```
//!
//! Every handler reads mode, color and selection from `self` at the moment
//! it runs, so there is no captured state that could go stale between
//! registration and dispatch.

#[cfg(test)]
mod tests;

use crate::config::EditorConfig;
use crate::keybindings::{EditorCommand, KeyBindings, KeyCode, Modifiers};
use crate::message::{EditorAction, EditorEvent, EditorInput, KeyOutcome};
use crate::model::{
    CanvasRect, Color, Point, Polygon, PolygonId, PolygonSet, contains_id, hit_test, normalize,
    without,
};
use crate::state::{ClickOutcome, DrawingSession, HistoryManager, Observation, PointUndo};

/// Interaction mode, mirrored from the owner's draw-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Clicks select existing polygons
    #[default]
    Select,
    /// Clicks add vertices to a new polygon
    Draw,
}

impl EditorMode {
    fn from_flag(is_draw_mode: bool) -> Self {
        if is_draw_mode {
            EditorMode::Draw
        } else {
            EditorMode::Select
        }
    }
}

/// Interaction controller for one image and its polygon overlay.
///
/// Reads the owner's state through [`RoiEditor::sync`] and answers host
/// events with [`EditorAction`] intents.
#[derive(Debug, Clone)]
pub struct RoiEditor {
    image_url: String,
    mode: EditorMode,
    polygons: PolygonSet,
    session: DrawingSession,
    history: HistoryManager,
    selected: Option<PolygonId>,
    hover: Option<Point>,
    color_picker_open: bool,
    keybindings: KeyBindings,
}

impl RoiEditor {
    /// Create an editor over the owner's initial state with default settings.
    pub fn new(input: EditorInput) -> Self {
        Self::with_config(input, &EditorConfig::default())
    }

    /// Create an editor using the draw color and keybindings from `config`.
    pub fn with_config(input: EditorInput, config: &EditorConfig) -> Self {
        log::info!(
            "Editor: opened '{}' with {} polygons, draw mode {}",
            input.image_url,
            input.polygons.len(),
            input.is_draw_mode
        );
        Self {
            history: HistoryManager::new(&input.polygons),
            image_url: input.image_url,
            mode: EditorMode::from_flag(input.is_draw_mode),
            polygons: input.polygons,
            session: DrawingSession::new(config.preferences.default_color.clone()),
            selected: None,
            hover: None,
            color_picker_open: false,
            keybindings: config.keybindings.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Owner state
    // ------------------------------------------------------------------

    /// Take in newly published owner state.
    ///
    /// Runs mode transition actions, lets the history classify the polygon
    /// list, and drops a selection whose polygon disappeared.
    pub fn sync(&mut self, input: EditorInput) -> Observation {
        let next_mode = EditorMode::from_flag(input.is_draw_mode);
        match (self.mode, next_mode) {
            (EditorMode::Draw, EditorMode::Select) => self.on_exit_draw_mode(),
            (EditorMode::Select, EditorMode::Draw) => self.on_enter_draw_mode(),
            _ => {}
        }
        self.mode = next_mode;
        self.image_url = input.image_url;

        let observation = self.history.observe(&input.polygons);
        self.polygons = input.polygons;

        let polygons = &self.polygons;
        if let Some(id) = self.selected.take_if(|id| !contains_id(polygons, id)) {
            log::debug!("Selection: '{}' no longer present, cleared", id);
        }
        observation
    }

    fn on_enter_draw_mode(&mut self) {
        log::info!("Mode: Select -> Draw");
        self.selected = None;
        self.session.reset();
        self.color_picker_open = false;
    }

    fn on_exit_draw_mode(&mut self) {
        log::info!("Mode: Draw -> Select");
        self.session.reset();
        self.hover = None;
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Track the hover position for the preview line while drawing.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64, rect: &CanvasRect) {
        if !self.is_draw_mode() {
            return;
        }
        let Some(point) = normalize(x, y, rect) else {
            return;
        };
        self.hover = point.is_in_unit_square().then_some(point);
    }

    pub fn handle_pointer_leave(&mut self) {
        self.hover = None;
    }

    /// Click on bare canvas.
    ///
    /// In select mode this clears the selection. In draw mode the click is
    /// either a new vertex or, near the first vertex, the closing click.
    pub fn handle_canvas_click(&mut self, x: f64, y: f64, rect: &CanvasRect) -> Option<EditorAction> {
        if !self.is_draw_mode() {
            if self.selected.take().is_some() {
                log::debug!("Selection: cleared by canvas click");
            }
            return None;
        }

        let Some(point) = normalize(x, y, rect) else {
            log::trace!("Click ignored: canvas has no area ({:?})", rect);
            return None;
        };

        match self.session.test_close(point) {
            ClickOutcome::Added => None,
            ClickOutcome::Closed(draft) => Some(EditorAction::PolygonComplete { polygon: draft }),
        }
    }

    /// Click on a rendered polygon. Toggles selection; ignored while drawing
    /// and for ids missing from the current polygon list.
    pub fn handle_polygon_click(&mut self, id: &PolygonId) {
        if self.is_draw_mode() {
            return;
        }
        if !contains_id(&self.polygons, id) {
            log::debug!("Selection: click on unknown polygon '{}' ignored", id);
            return;
        }
        if self.selected.as_ref() == Some(id) {
            log::debug!("Selection: '{}' deselected", id);
            self.selected = None;
        } else {
            log::debug!("Selection: '{}' selected", id);
            self.selected = Some(id.clone());
        }
    }

    /// Click for hosts that do not hit-test polygons themselves.
    ///
    /// In select mode the topmost polygon under the pointer receives a
    /// polygon click; anything else is a canvas click.
    pub fn handle_click(&mut self, x: f64, y: f64, rect: &CanvasRect) -> Option<EditorAction> {
        if !self.is_draw_mode() {
            let hit = normalize(x, y, rect)
                .and_then(|point| hit_test(&self.polygons, point))
                .map(|polygon| polygon.id.clone());
            if let Some(id) = hit {
                self.handle_polygon_click(&id);
                return None;
            }
        }
        self.handle_canvas_click(x, y, rect)
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyCode, modifiers: Modifiers) -> KeyOutcome {
        match self.keybindings.command_for(key, modifiers) {
            Some(EditorCommand::CancelDrawing) => {
                if self.is_draw_mode() {
                    KeyOutcome::passthrough(Some(self.exit_draw_mode()))
                } else {
                    KeyOutcome::ignored()
                }
            }
            Some(EditorCommand::DeleteSelected) => {
                if self.is_draw_mode() || self.selected.is_none() {
                    KeyOutcome::ignored()
                } else {
                    KeyOutcome::consumed(self.delete_selected())
                }
            }
            Some(EditorCommand::Undo) => KeyOutcome::consumed(self.undo()),
            Some(EditorCommand::Redo) => KeyOutcome::consumed(self.redo()),
            // The focused canvas must not activate or scroll on these
            None if matches!(key, KeyCode::Enter | KeyCode::Space) => KeyOutcome::consumed(None),
            None => KeyOutcome::ignored(),
        }
    }

    /// Ask the owner to drop the selected polygon and clear the selection.
    ///
    /// A selection that no longer matches a polygon is cleared without
    /// emitting anything.
    pub fn delete_selected(&mut self) -> Option<EditorAction> {
        if self.is_draw_mode() {
            return None;
        }
        let id = self.selected.take()?;
        if !contains_id(&self.polygons, &id) {
            log::debug!("Delete: stale selection '{}' cleared", id);
            return None;
        }
        let polygons = without(&self.polygons, &id);
        log::info!("Delete: polygon '{}', {} left", id, polygons.len());
        Some(EditorAction::SetPolygons { polygons })
    }

    // ------------------------------------------------------------------
    // Undo / redo
    // ------------------------------------------------------------------

    /// Point-level undo while drawing, operation-level undo otherwise.
    pub fn undo(&mut self) -> Option<EditorAction> {
        if self.is_draw_mode() {
            match self.session.undo_point() {
                PointUndo::CancelDrawing => Some(self.exit_draw_mode()),
                PointUndo::Removed(_) | PointUndo::Nothing => None,
            }
        } else {
            self.history
                .undo()
                .map(|polygons| EditorAction::SetPolygons { polygons })
        }
    }

    /// Point-level redo while drawing, operation-level redo otherwise.
    pub fn redo(&mut self) -> Option<EditorAction> {
        if self.is_draw_mode() {
            self.session.redo_point();
            None
        } else {
            self.history
                .redo()
                .map(|polygons| EditorAction::SetPolygons { polygons })
        }
    }

    pub fn can_undo(&self) -> bool {
        if self.is_draw_mode() {
            self.session.can_undo()
        } else {
            self.history.can_undo()
        }
    }

    pub fn can_redo(&self) -> bool {
        if self.is_draw_mode() {
            self.session.can_redo()
        } else {
            self.history.can_redo()
        }
    }

    // ------------------------------------------------------------------
    // Mode and color
    // ------------------------------------------------------------------

    /// Request leaving draw mode. The session is discarded once the owner
    /// publishes the new flag.
    pub fn exit_draw_mode(&self) -> EditorAction {
        EditorAction::DrawModeChange {
            is_draw_mode: false,
        }
    }

    /// Change the draw color without touching the mode.
    pub fn change_color(&mut self, color: Color) {
        log::debug!("Color: {}", color);
        self.session.set_color(color);
    }

    /// Set the draw color and request draw mode.
    pub fn start_drawing_with_color(&mut self, color: Color) -> EditorAction {
        self.change_color(color);
        EditorAction::DrawModeChange { is_draw_mode: true }
    }

    /// Color choice from the toolbar: recolor while drawing, otherwise
    /// start drawing with the color.
    pub fn select_color(&mut self, color: Color) -> Option<EditorAction> {
        if self.is_draw_mode() {
            self.change_color(color);
            None
        } else {
            Some(self.start_drawing_with_color(color))
        }
    }

    // ------------------------------------------------------------------
    // Toolbar
    // ------------------------------------------------------------------

    /// Pencil button: leaves draw mode, or toggles the color picker.
    pub fn pencil_click(&mut self) -> Option<EditorAction> {
        if self.is_draw_mode() {
            self.color_picker_open = false;
            Some(self.exit_draw_mode())
        } else {
            self.color_picker_open = !self.color_picker_open;
            None
        }
    }

    /// Swatch chosen from the open picker.
    pub fn pick_color(&mut self, color: Color) -> Option<EditorAction> {
        self.color_picker_open = false;
        self.select_color(color)
    }

    pub fn dismiss_color_picker(&mut self) {
        self.color_picker_open = false;
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Route a host event to its handler.
    pub fn update(&mut self, event: EditorEvent) -> Option<EditorAction> {
        log::trace!("Event: {:?} (mode {:?})", event, self.mode);
        match event {
            EditorEvent::PointerMove { x, y, rect } => {
                self.handle_pointer_move(x, y, &rect);
                None
            }
            EditorEvent::PointerLeave => {
                self.handle_pointer_leave();
                None
            }
            EditorEvent::CanvasClick { x, y, rect } => self.handle_canvas_click(x, y, &rect),
            EditorEvent::PolygonClick { id } => {
                self.handle_polygon_click(&id);
                None
            }
            EditorEvent::Click { x, y, rect } => self.handle_click(x, y, &rect),
            EditorEvent::Key { key, modifiers } => self.handle_key(key, modifiers).action,
            EditorEvent::Undo => self.undo(),
            EditorEvent::Redo => self.redo(),
            EditorEvent::PencilClick => self.pencil_click(),
            EditorEvent::PickColor { color } => self.pick_color(color),
            EditorEvent::OutsidePickerClick => {
                self.dismiss_color_picker();
                None
            }
            EditorEvent::ChangeColor { color } => {
                self.change_color(color);
                None
            }
            EditorEvent::ExitDrawMode => Some(self.exit_draw_mode()),
        }
    }

    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_draw_mode(&self) -> bool {
        self.mode == EditorMode::Draw
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn current_points(&self) -> &[Point] {
        self.session.points()
    }

    pub fn current_color(&self) -> &Color {
        self.session.color()
    }

    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    pub fn selected(&self) -> Option<&PolygonId> {
        self.selected.as_ref()
    }

    pub fn selected_polygon(&self) -> Option<&Polygon> {
        let id = self.selected.as_ref()?;
        self.polygons.iter().find(|p| &p.id == id)
    }

    pub fn is_color_picker_open(&self) -> bool {
        self.color_picker_open
    }

    /// Rubber-band segment from the last vertex to the pointer.
    pub fn preview_segment(&self) -> Option<(Point, Point)> {
        if !self.is_draw_mode() {
            return None;
        }
        let last = *self.session.points().last()?;
        Some((last, self.hover?))
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }
}
