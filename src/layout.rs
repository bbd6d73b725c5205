//! Layout document model.
//!
//! The UI is described declaratively in a JSON document: an ordered mapping
//! from group name to a sequence of element records. This module owns the
//! typed view of that document and the (synchronous, once-at-startup) load.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One declarative widget description inside a group.
///
/// Every field except `Type` has a documented default, so sparse records are
/// fine. `Type` and `groupVisibility` stay `Option` because "absent" means
/// something different from any concrete value for them: an absent `Type`
/// produces no widget, and an absent `groupVisibility` inherits the running
/// value of the surrounding group.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ElementRecord {
    #[serde(rename = "Type")]
    pub element_type: Option<String>,
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Action", default)]
    pub action: String,
    #[serde(rename = "ParentOfGroup", default)]
    pub parent_of: String,
    #[serde(rename = "TooltipText", default)]
    pub tooltip_text: String,
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "SpriteID", default)]
    pub sprite_id: String,
    #[serde(rename = "TileType", default)]
    pub tile_type: String,
    #[serde(rename = "groupVisibility")]
    pub group_visibility: Option<bool>,
    #[serde(rename = "ToggleButton", default)]
    pub toggle_button: bool,
    #[serde(rename = "DrawFrame", default)]
    pub draw_frame: bool,
    #[serde(rename = "Position_x", default)]
    pub x: i32,
    #[serde(rename = "Position_y", default)]
    pub y: i32,
    #[serde(rename = "Width", default)]
    pub width: i32,
    #[serde(rename = "Height", default)]
    pub height: i32,
}

/// The parsed layout document.
///
/// `IndexMap` rather than `HashMap` because the document's group order is
/// draw order (and therefore z-order); it must survive parsing intact.
pub type UiLayout = IndexMap<String, Vec<ElementRecord>>;

/// Ways the layout document can fail to load.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot read UI layout file {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing UI layout file {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the layout document at `path`.
///
/// Both failure cases are non-fatal to the UI layer: `UiManager::init` logs
/// them and carries on with an empty document. Callers that want a missing
/// layout to be fatal can match on the error themselves.
pub fn load_document(path: &Path) -> Result<UiLayout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let layout: UiLayout =
        serde_json::from_str(&text).map_err(|source| LayoutError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        "Loaded UI layout from {:?}: {} group(s), {} element record(s)",
        path,
        layout.len(),
        layout.values().map(Vec::len).sum::<usize>()
    );

    Ok(layout)
}
