//! Action registry: maps declared action identifiers to behaviors.
//!
//! Every behavior is a zero-argument closure over the edit-mode context,
//! bound to a widget at load time and fired at event-dispatch time. The two
//! moments are deliberately decoupled so tests can invoke a binding directly
//! without simulating input events.

use crate::layout::ElementRecord;

/// Active terrain editing tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerrainEdit {
    #[default]
    None,
    Raise,
    Lower,
}

/// Process-wide edit-mode state, owned by the host and threaded mutably
/// through action dispatch. Keeping it an explicit parameter (instead of a
/// global) is what makes the action table testable without a live game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditState {
    pub terrain_edit: TerrainEdit,
    pub demolish_mode: bool,
    /// Currently selected tile type; empty means no selection.
    pub tile_type_selection: String,
    pub highlight_selection: bool,
    /// Set by the QuitGame action; the host polls this to shut down.
    pub quit_requested: bool,
}

/// A behavior bound to a widget, fired on activation.
pub type ActionCallback = Box<dyn FnMut(&mut EditState)>;

/// Resolve a declared action identifier to a callback.
///
/// An empty identifier means the widget is decorative (or toggles a group
/// only) and gets no callback. Unrecognized non-empty identifiers are ignored
/// silently; they are not an error.
///
/// Each recognized identifier toggles its own slice of the edit state:
/// activating the same mode twice returns to neutral, activating a different
/// mode switches directly. The mechanism is intentionally per-identifier
/// rather than one shared comparison across all identifiers; the families
/// (terrain, demolish, tile type) do not know about each other.
pub fn resolve(action_id: &str, record: &ElementRecord) -> Option<ActionCallback> {
    match action_id {
        "RaiseTerrain" => Some(Box::new(|state| {
            state.terrain_edit = match state.terrain_edit {
                TerrainEdit::Raise => TerrainEdit::None,
                _ => TerrainEdit::Raise,
            };
            state.highlight_selection = state.terrain_edit != TerrainEdit::None;
        })),

        "LowerTerrain" => Some(Box::new(|state| {
            state.terrain_edit = match state.terrain_edit {
                TerrainEdit::Lower => TerrainEdit::None,
                _ => TerrainEdit::Lower,
            };
            state.highlight_selection = state.terrain_edit != TerrainEdit::None;
        })),

        "Demolish" => Some(Box::new(|state| {
            state.demolish_mode = !state.demolish_mode;
            state.highlight_selection = state.demolish_mode;
        })),

        "ChangeTileType" => {
            // The tile type is captured from the element record at bind time.
            let tile_type = record.tile_type.clone();
            Some(Box::new(move |state| {
                if state.tile_type_selection == tile_type {
                    state.tile_type_selection.clear();
                } else {
                    state.tile_type_selection.clone_from(&tile_type);
                }
                state.highlight_selection = !state.tile_type_selection.is_empty();
            }))
        }

        "QuitGame" => Some(Box::new(|state| {
            state.quit_requested = true;
        })),

        _ => None,
    }
}
