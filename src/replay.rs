//! Scripted editor sessions.
//!
//! A script is a JSON document with the owner's initial state and a list of
//! host events:
//!
//! ```json
//! {
//!   "input": { "imageUrl": "cam1.jpg", "isDrawMode": true, "polygons": [] },
//!   "events": [
//!     { "kind": "canvas_click", "x": 100, "y": 100,
//!       "rect": { "left": 0, "top": 0, "width": 1000, "height": 1000 } }
//!   ]
//! }
//! ```
//!
//! Every event goes through [`RoiEditor::update`]; emitted intents are
//! applied by a [`PolygonOwner`] and the new state is published back.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EditorConfig};
use crate::editor::RoiEditor;
use crate::message::{EditorAction, EditorEvent, EditorInput};
use crate::model::PolygonSet;
use crate::owner::PolygonOwner;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub input: EditorInput,
    #[serde(default)]
    pub events: Vec<EditorEvent>,
}

impl SessionScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// What a replay produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Intents in the order the editor emitted them
    pub actions: Vec<EditorAction>,
    /// The owner's polygon list after the last event
    pub polygons: PolygonSet,
    pub is_draw_mode: bool,
}

/// Errors that can occur while loading or running a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run every event of `script` against a fresh editor and owner.
pub fn run(script: SessionScript, config: &EditorConfig) -> ReplayReport {
    let mut editor = RoiEditor::with_config(script.input.clone(), config);
    let mut owner = PolygonOwner::new(script.input);
    let mut actions = Vec::new();

    for (index, event) in script.events.into_iter().enumerate() {
        let Some(action) = editor.update(event) else {
            continue;
        };
        log::debug!("Replay: event {} -> {}", index, action.description());
        owner.apply(action.clone());
        editor.sync(owner.input());
        actions.push(action);
    }

    log::info!(
        "Replay: {} actions, {} polygons",
        actions.len(),
        owner.polygons().len()
    );
    ReplayReport {
        actions,
        polygons: owner.polygons().to_vec(),
        is_draw_mode: owner.is_draw_mode(),
    }
}
