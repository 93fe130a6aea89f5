//! Messages exchanged between the editor and the owner of the polygon list.
//!
//! The owner pushes [`EditorInput`] in; the editor answers with
//! [`EditorAction`] intents. Interaction events from the host arrive as
//! [`EditorEvent`]s in the Elm architecture style.

use serde::{Deserialize, Serialize};

use crate::keybindings::{KeyCode, Modifiers};
use crate::model::{CanvasRect, Color, PolygonDraft, PolygonId, PolygonSet};

/// State published by the owner. The editor treats it as the only source
/// of truth for the polygon list and the draw-mode flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInput {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_draw_mode: bool,
    #[serde(default)]
    pub polygons: PolygonSet,
}

impl EditorInput {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Default::default()
        }
    }

    pub fn with_polygons(mut self, polygons: PolygonSet) -> Self {
        self.polygons = polygons;
        self
    }

    pub fn with_draw_mode(mut self, is_draw_mode: bool) -> Self {
        self.is_draw_mode = is_draw_mode;
        self
    }
}

/// Intents sent to the owner. The owner may honor, delay, alter or ignore
/// them; the editor only learns the outcome from the next [`EditorInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditorAction {
    /// Enter or leave draw mode
    DrawModeChange {
        #[serde(rename = "isDrawMode")]
        is_draw_mode: bool,
    },
    /// Replace the polygon list wholesale (undo, redo, delete)
    SetPolygons { polygons: PolygonSet },
    /// Append a newly drawn polygon; the owner assigns its id
    PolygonComplete { polygon: PolygonDraft },
}

impl EditorAction {
    /// Short description for logs.
    pub fn description(&self) -> String {
        match self {
            EditorAction::DrawModeChange { is_draw_mode: true } => "Enter draw mode".to_string(),
            EditorAction::DrawModeChange { is_draw_mode: false } => "Exit draw mode".to_string(),
            EditorAction::SetPolygons { polygons } => format!("Set {} polygons", polygons.len()),
            EditorAction::PolygonComplete { polygon } => {
                format!("Complete polygon with {} vertices", polygon.points.len())
            }
        }
    }
}

/// Interaction events delivered by the host.
///
/// Pointer events carry device coordinates together with the canvas
/// bounding box measured at the moment the event fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Pointer moved over the canvas
    PointerMove { x: f64, y: f64, rect: CanvasRect },
    /// Pointer left the canvas
    PointerLeave,
    /// Click on bare canvas (not on a polygon)
    CanvasClick { x: f64, y: f64, rect: CanvasRect },
    /// Click on a rendered polygon
    PolygonClick { id: PolygonId },
    /// Click the editor should hit-test itself
    Click { x: f64, y: f64, rect: CanvasRect },
    /// Key pressed while the editor has focus
    Key {
        key: KeyCode,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Undo,
    Redo,
    /// Toolbar pencil button
    PencilClick,
    /// Swatch chosen in the color picker
    PickColor { color: Color },
    /// Pointer pressed outside the color picker
    OutsidePickerClick,
    /// Change the draw color without touching the mode
    ChangeColor { color: Color },
    /// Explicit request to leave draw mode
    ExitDrawMode,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    /// Intent to send to the owner
    pub action: Option<EditorAction>,
    /// Whether the host should suppress the key's default behavior
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed(action: Option<EditorAction>) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }

    pub fn passthrough(action: Option<EditorAction>) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }
}
