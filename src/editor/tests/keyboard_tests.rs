//! Keyboard shortcuts per mode.

use super::{Harness, square};
use crate::config::EditorConfig;
use crate::editor::RoiEditor;
use crate::keybindings::{KeyCode, KeyCombo, Modifiers};
use crate::message::{EditorAction, EditorInput, KeyOutcome};

const EXIT: EditorAction = EditorAction::DrawModeChange {
    is_draw_mode: false,
};

#[test]
fn test_escape_leaves_draw_mode() {
    let mut h = Harness::drawing();
    h.click(100.0, 100.0);

    let outcome = h.editor.handle_key(KeyCode::Escape, Modifiers::NONE);
    assert_eq!(outcome.action, Some(EXIT));
    assert!(!outcome.prevent_default);

    h.dispatch(outcome.action);
    assert!(!h.editor.is_draw_mode());
    assert!(h.editor.current_points().is_empty());
}

#[test]
fn test_escape_ignored_in_select_mode() {
    let mut h = Harness::with_polygons(vec![square("a", 0.1, 0.1, 0.2)]);
    assert_eq!(
        h.editor.handle_key(KeyCode::Escape, Modifiers::NONE),
        KeyOutcome::ignored()
    );
}

#[test]
fn test_delete_and_backspace_remove_selection() {
    for key in [KeyCode::Delete, KeyCode::Backspace] {
        let mut h = Harness::with_polygons(vec![
            square("a", 0.1, 0.1, 0.2),
            square("b", 0.5, 0.5, 0.2),
        ]);
        h.editor.handle_polygon_click(&"b".into());

        let outcome = h.editor.handle_key(key, Modifiers::NONE);
        assert!(outcome.prevent_default);
        let Some(EditorAction::SetPolygons { polygons }) = outcome.action else {
            panic!("expected SetPolygons for {:?}", key);
        };
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].id.as_str(), "a");
        assert_eq!(h.editor.selected(), None);
    }
}

#[test]
fn test_delete_passes_through_without_selection() {
    let mut h = Harness::with_polygons(vec![square("a", 0.1, 0.1, 0.2)]);
    let outcome = h.editor.handle_key(KeyCode::Backspace, Modifiers::NONE);
    assert_eq!(outcome, KeyOutcome::ignored());
}

#[test]
fn test_delete_ignored_while_drawing() {
    let mut h = Harness::drawing();
    h.click(100.0, 100.0);
    h.click(200.0, 100.0);
    let outcome = h.editor.handle_key(KeyCode::Backspace, Modifiers::NONE);
    assert_eq!(outcome, KeyOutcome::ignored());
    assert_eq!(h.editor.current_points().len(), 2);
}

#[test]
fn test_enter_and_space_are_swallowed() {
    let mut h = Harness::drawing();
    for key in [KeyCode::Enter, KeyCode::Space] {
        let outcome = h.editor.handle_key(key, Modifiers::NONE);
        assert_eq!(outcome.action, None);
        assert!(outcome.prevent_default);
    }
}

#[test]
fn test_unbound_key_ignored() {
    let mut h = Harness::drawing();
    assert_eq!(
        h.editor.handle_key(KeyCode::Tab, Modifiers::NONE),
        KeyOutcome::ignored()
    );
    assert_eq!(
        h.editor.handle_key(KeyCode::Char('a'), Modifiers::NONE),
        KeyOutcome::ignored()
    );
}

#[test]
fn test_command_z_undoes_points_while_drawing() {
    let mut h = Harness::drawing();
    h.click(100.0, 100.0);
    h.click(200.0, 100.0);

    let outcome = h.editor.handle_key(KeyCode::Z, Modifiers::CTRL);
    assert_eq!(outcome, KeyOutcome::consumed(None));
    assert_eq!(h.editor.current_points().len(), 1);

    let outcome = h.editor.handle_key(KeyCode::Z, Modifiers::CTRL_SHIFT);
    assert_eq!(outcome, KeyOutcome::consumed(None));
    assert_eq!(h.editor.current_points().len(), 2);

    // Last remaining vertex: undo becomes an exit request
    h.editor.handle_key(KeyCode::Z, Modifiers::CTRL);
    let outcome = h.editor.handle_key(KeyCode::Z, Modifiers::CTRL);
    assert_eq!(outcome.action, Some(EXIT));
}

#[test]
fn test_command_shortcuts_undo_redo_history() {
    let mut h = Harness::drawing();
    h.draw_triangle(100.0, 100.0);
    assert_eq!(h.editor.polygons().len(), 1);

    let outcome = h.editor.handle_key(KeyCode::Z, Modifiers::CTRL);
    assert!(outcome.prevent_default);
    assert_eq!(
        outcome.action,
        Some(EditorAction::SetPolygons { polygons: vec![] })
    );
    h.dispatch(outcome.action);
    assert!(h.editor.polygons().is_empty());

    let outcome = h.editor.handle_key(KeyCode::Y, Modifiers::CTRL);
    h.dispatch(outcome.action);
    assert_eq!(h.editor.polygons().len(), 1);
}

#[test]
fn test_command_z_with_empty_history_is_still_consumed() {
    let mut editor = RoiEditor::new(EditorInput::new("frame.jpg"));
    assert_eq!(
        editor.handle_key(KeyCode::Z, Modifiers::CTRL),
        KeyOutcome::consumed(None)
    );
}

#[test]
fn test_custom_cancel_binding() {
    let mut config = EditorConfig::default();
    config.keybindings.cancel_drawing = vec![KeyCombo::plain(KeyCode::Char('q'))];
    let mut editor =
        RoiEditor::with_config(EditorInput::new("frame.jpg").with_draw_mode(true), &config);

    assert_eq!(
        editor.handle_key(KeyCode::Escape, Modifiers::NONE),
        KeyOutcome::ignored()
    );
    assert_eq!(
        editor.handle_key(KeyCode::Char('q'), Modifiers::NONE).action,
        Some(EXIT)
    );
}
