//! Keyboard shortcuts for the ROI editor.
//!
//! Bindings map a key plus modifier state to an [`EditorCommand`]. The
//! controller decides whether the command applies in the current mode.

use serde::{Deserialize, Serialize};

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Escape,
    Backspace,
    Delete,
    Enter,
    Space,
    Tab,
    Y,
    Z,
    /// Any other key, by character
    Char(char),
}

/// Modifier state accompanying a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    /// Cmd on macOS, Super elsewhere
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        shift: true,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// The platform command modifier: Ctrl, or Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key together with the modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCombo {
    pub key: KeyCode,
    /// Requires the command modifier (Ctrl or Cmd)
    #[serde(default)]
    pub command: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyCombo {
    pub const fn plain(key: KeyCode) -> Self {
        Self {
            key,
            command: false,
            shift: false,
        }
    }

    pub const fn command(key: KeyCode) -> Self {
        Self {
            key,
            command: true,
            shift: false,
        }
    }

    pub const fn command_shift(key: KeyCode) -> Self {
        Self {
            key,
            command: true,
            shift: true,
        }
    }

    /// Exact match on the key, the command modifier and shift.
    ///
    /// Plain combos ignore shift so that e.g. Shift+Delete still deletes.
    pub fn matches(&self, key: KeyCode, modifiers: Modifiers) -> bool {
        if key != self.key || modifiers.command() != self.command {
            return false;
        }
        !self.command || modifiers.shift == self.shift
    }
}

/// Editor-level commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorCommand {
    /// Leave draw mode, discarding the polygon in progress
    CancelDrawing,
    /// Remove the selected polygon
    DeleteSelected,
    Undo,
    Redo,
}

impl EditorCommand {
    /// Get the display name for this command.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::CancelDrawing => "Cancel drawing",
            EditorCommand::DeleteSelected => "Delete polygon",
            EditorCommand::Undo => "Undo",
            EditorCommand::Redo => "Redo",
        }
    }
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_cancel")]
    pub cancel_drawing: Vec<KeyCombo>,
    #[serde(default = "default_delete")]
    pub delete_selected: Vec<KeyCombo>,
    #[serde(default = "default_undo")]
    pub undo: Vec<KeyCombo>,
    #[serde(default = "default_redo")]
    pub redo: Vec<KeyCombo>,
}

fn default_cancel() -> Vec<KeyCombo> {
    vec![KeyCombo::plain(KeyCode::Escape)]
}

fn default_delete() -> Vec<KeyCombo> {
    vec![
        KeyCombo::plain(KeyCode::Backspace),
        KeyCombo::plain(KeyCode::Delete),
    ]
}

fn default_undo() -> Vec<KeyCombo> {
    vec![KeyCombo::command(KeyCode::Z)]
}

fn default_redo() -> Vec<KeyCombo> {
    vec![
        KeyCombo::command_shift(KeyCode::Z),
        KeyCombo::command(KeyCode::Y),
    ]
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            cancel_drawing: default_cancel(),
            delete_selected: default_delete(),
            undo: default_undo(),
            redo: default_redo(),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the command bound to a key press, if any.
    pub fn command_for(&self, key: KeyCode, modifiers: Modifiers) -> Option<EditorCommand> {
        let hit = |combos: &[KeyCombo]| combos.iter().any(|c| c.matches(key, modifiers));
        if hit(&self.redo) {
            Some(EditorCommand::Redo)
        } else if hit(&self.undo) {
            Some(EditorCommand::Undo)
        } else if hit(&self.cancel_drawing) {
            Some(EditorCommand::CancelDrawing)
        } else if hit(&self.delete_selected) {
            Some(EditorCommand::DeleteSelected)
        } else {
            None
        }
    }

    fn table(&self) -> [(EditorCommand, &[KeyCombo]); 4] {
        [
            (EditorCommand::CancelDrawing, self.cancel_drawing.as_slice()),
            (EditorCommand::DeleteSelected, self.delete_selected.as_slice()),
            (EditorCommand::Undo, self.undo.as_slice()),
            (EditorCommand::Redo, self.redo.as_slice()),
        ]
    }

    /// Check if a combo is already bound to a command other than `except`.
    pub fn conflict(&self, combo: &KeyCombo, except: Option<EditorCommand>) -> Option<EditorCommand> {
        self.table()
            .into_iter()
            .find(|(command, combos)| Some(*command) != except && combos.contains(combo))
            .map(|(command, _)| command)
    }

    /// First combo bound to two different commands, if any.
    pub fn find_conflict(&self) -> Option<(KeyCombo, EditorCommand, EditorCommand)> {
        self.table().into_iter().find_map(|(command, combos)| {
            combos.iter().find_map(|combo| {
                self.conflict(combo, Some(command))
                    .map(|other| (*combo, command, other))
            })
        })
    }
}

/// Convert a KeyCode to a display string.
pub fn key_to_string(key: KeyCode) -> String {
    match key {
        KeyCode::Escape => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Space => "Space".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Y => "Y".to_string(),
        KeyCode::Z => "Z".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
    }
}

/// Display string for a combo, e.g. `Ctrl+Shift+Z`.
pub fn combo_to_string(combo: &KeyCombo) -> String {
    let mut out = String::new();
    if combo.command {
        out.push_str("Ctrl+");
    }
    if combo.shift {
        out.push_str("Shift+");
    }
    out.push_str(&key_to_string(combo.key));
    out
}
