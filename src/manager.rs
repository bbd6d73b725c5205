//! UI registry: owns every widget and runs the load, draw, and event passes.
//!
//! The manager is the only owner of the widget collection for the lifetime
//! of the application; lookups hand out transient borrows. Widgets live in a
//! `Vec` in document order because insertion order is z-order: later
//! elements paint over earlier ones (frames behind buttons), so any reorder
//! would be a visual bug.

use std::path::Path;
use std::time::Duration;

use crate::actions::{self, EditState};
use crate::config::Settings;
use crate::factory;
use crate::layout::{self, UiLayout};
use crate::render::{Renderer, UiRect};
use crate::widgets::{Label, Tooltip, Widget};

/// A pointer event from the host's windowing layer, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
}

pub struct UiManager {
    widgets: Vec<Widget>,
    tooltip: Tooltip,
    fps_counter: Label,
    show_debug_menu: bool,
}

impl UiManager {
    pub fn new() -> Self {
        let mut fps_counter = Label::new(UiRect::new(4, 4, 64, 16));
        fps_counter.base.visible = true;

        Self {
            widgets: Vec::new(),
            tooltip: Tooltip::new(),
            fps_counter,
            show_debug_menu: false,
        }
    }

    /// Load the layout document named by the settings and build all widgets.
    ///
    /// Failures degrade rather than abort: an unreadable or malformed
    /// document leaves the registry empty (logged); per-element failures
    /// skip that element and continue. Deciding whether an empty registry is
    /// fatal is the caller's call, not ours.
    pub fn init(&mut self, settings: &Settings) {
        let path = settings.ui_layout_file.as_path();
        let layout = match layout::load_document(path) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::error!("{err}");
                UiLayout::new()
            }
        };

        self.show_debug_menu = settings.show_debug_menu;
        self.load_layout(&layout, path);
    }

    /// Build widgets from an already parsed layout document.
    ///
    /// `source` only feeds diagnostics, so skipped elements can name the
    /// file they came from.
    pub fn load_layout(&mut self, layout: &UiLayout, source: &Path) {
        for (group, records) in layout {
            // `groupVisibility` is a running default: it applies to this
            // record and everything after it in the group until overridden.
            let mut visible = false;

            for record in records {
                if let Some(group_visibility) = record.group_visibility {
                    visible = group_visibility;
                }

                let Some(type_tag) = record.element_type.as_deref() else {
                    tracing::warn!(
                        "Element record without a Type in group '{group}' of {source:?} \
                         produces no widget"
                    );
                    continue;
                };

                let mut widget = match factory::build(type_tag, group, record, visible) {
                    Ok(widget) => widget,
                    Err(err) => {
                        tracing::error!("{err} (group '{group}' of {source:?})");
                        continue;
                    }
                };

                widget.base_mut().callback = actions::resolve(&record.action, record);
                self.widgets.push(widget);
            }
        }

        self.tooltip.reset();
        tracing::debug!(
            "UI load pass complete: {} widget(s) from {:?}",
            self.widgets.len(),
            source
        );
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// First widget (in insertion order) whose identifier matches, if any.
    pub fn widget_by_id(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.base().id == id)
    }

    pub fn widget_by_id_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.base().id == id)
    }

    /// Flip the visibility of every widget belonging to `group`.
    /// Applying this twice restores the original state.
    pub fn toggle_group_visibility(&mut self, group: &str) {
        for widget in &mut self.widgets {
            if widget.base().group == group {
                let base = widget.base_mut();
                base.visible = !base.visible;
            }
        }
    }

    /// Per-frame draw pass: visible widgets in insertion order, then the FPS
    /// counter if the debug menu is on, then the tooltip unconditionally
    /// (it draws nothing while idle).
    pub fn draw_ui(&self, renderer: &mut dyn Renderer) {
        for widget in &self.widgets {
            if widget.base().visible {
                widget.draw(renderer);
            }
        }

        if self.show_debug_menu {
            self.fps_counter.draw(renderer);
        }
        self.tooltip.draw(renderer);
    }

    /// Per-frame update pass; currently only the tooltip timer needs it.
    pub fn update(&mut self, dt: Duration) {
        self.tooltip.update(dt);
    }

    pub fn set_debug_menu(&mut self, show: bool) {
        self.show_debug_menu = show;
    }

    pub fn set_fps_text(&mut self, fps: &str) {
        self.fps_counter.set_text(fps);
    }

    /// Arm the tooltip with the given text at the event's position.
    pub fn start_tooltip(&mut self, event: &PointerEvent, tooltip_text: &str) {
        self.tooltip.arm(tooltip_text, event.x, event.y);
    }

    /// Return the tooltip to its idle state.
    pub fn stop_tooltip(&mut self) {
        self.tooltip.reset();
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Dispatch a click: hit-test visible widgets topmost-first (reverse
    /// insertion order) and activate the hit widget. Returns whether the
    /// click was consumed by the UI.
    pub fn handle_click(&mut self, event: &PointerEvent, state: &mut EditState) -> bool {
        let hit = self
            .widgets
            .iter()
            .rposition(|w| w.base().visible && w.base().rect.contains(event.x, event.y));

        match hit {
            Some(index) => {
                self.activate(index, state);
                true
            }
            None => false,
        }
    }

    /// Activate the first widget with the given identifier. Returns false if
    /// no widget matches.
    pub fn activate_by_id(&mut self, id: &str, state: &mut EditState) -> bool {
        match self.widgets.iter().position(|w| w.base().id == id) {
            Some(index) => {
                self.activate(index, state);
                true
            }
            None => false,
        }
    }

    fn activate(&mut self, index: usize, state: &mut EditState) {
        self.widgets[index].on_activate();

        if let Some(callback) = self.widgets[index].base_mut().callback.as_mut() {
            callback(state);
        }

        // The group toggle is independent of any action binding; both fire.
        let parent_of = self.widgets[index].base().parent_of.clone();
        if !parent_of.is_empty() {
            self.toggle_group_visibility(&parent_of);
        }
    }
}

impl Default for UiManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TerrainEdit;
    use crate::widgets::TOOLTIP_DELAY;
    use std::io::Write;

    /// Renderer that records draw calls so tests can assert on order.
    #[derive(Default)]
    struct RecordingRenderer {
        ops: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_sprite(&mut self, _rect: UiRect, sprite_id: &str) {
            self.ops.push(format!("sprite:{sprite_id}"));
        }

        fn draw_text(&mut self, _rect: UiRect, text: &str) {
            self.ops.push(format!("text:{text}"));
        }

        fn draw_frame(&mut self, _rect: UiRect) {
            self.ops.push("frame".to_string());
        }
    }

    fn manager_from_json(json: &str) -> UiManager {
        let layout: UiLayout = serde_json::from_str(json).unwrap();
        let mut manager = UiManager::new();
        manager.load_layout(&layout, Path::new("test://layout"));
        manager
    }

    #[test]
    fn test_group_visibility_is_sticky() {
        let manager = manager_from_json(
            r#"{"g": [
                {"Type": "Frame", "groupVisibility": true},
                {"Type": "Frame"},
                {"Type": "Frame", "groupVisibility": false},
                {"Type": "Frame"}
            ]}"#,
        );

        let visibilities: Vec<bool> =
            manager.widgets().iter().map(|w| w.base().visible).collect();
        assert_eq!(visibilities, [true, true, false, false]);
    }

    #[test]
    fn test_visibility_defaults_to_false_per_group() {
        let manager = manager_from_json(
            r#"{
                "a": [{"Type": "Frame", "groupVisibility": true}],
                "b": [{"Type": "Frame"}]
            }"#,
        );

        // The running value does not leak across groups.
        assert!(manager.widgets()[0].base().visible);
        assert!(!manager.widgets()[1].base().visible);
    }

    #[test]
    fn test_records_without_type_produce_no_widget() {
        let manager = manager_from_json(
            r#"{"g": [
                {"ID": "orphan"},
                {"Type": "Bogus", "ID": "alien"},
                {"Type": "Frame", "ID": "survivor", "groupVisibility": true}
            ]}"#,
        );

        // Both bad records are skipped, the load pass continues.
        assert_eq!(manager.widget_count(), 1);
        assert!(manager.widget_by_id("survivor").is_some());
        assert!(manager.widget_by_id("orphan").is_none());
        assert!(manager.widget_by_id("alien").is_none());
    }

    #[test]
    fn test_empty_type_tag_skipped() {
        let manager = manager_from_json(
            r#"{"g": [
                {"Type": ""},
                {"Type": "Frame"}
            ]}"#,
        );
        assert_eq!(manager.widget_count(), 1);
    }

    #[test]
    fn test_empty_group_is_legal() {
        let manager = manager_from_json(r#"{"empty": [], "g": [{"Type": "Frame"}]}"#);
        assert_eq!(manager.widget_count(), 1);
    }

    #[test]
    fn test_draw_order_follows_document_order() {
        let mut manager = manager_from_json(
            r#"{
                "A": [
                    {"Type": "ImageButton", "SpriteID": "a0", "groupVisibility": true},
                    {"Type": "ImageButton", "SpriteID": "a1"}
                ],
                "B": [
                    {"Type": "ImageButton", "SpriteID": "b0", "groupVisibility": true}
                ]
            }"#,
        );

        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert_eq!(renderer.ops, ["sprite:a0", "sprite:a1", "sprite:b0"]);

        // Hidden widgets are skipped but order is otherwise unchanged.
        manager.toggle_group_visibility("A");
        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert_eq!(renderer.ops, ["sprite:b0"]);
    }

    #[test]
    fn test_fps_counter_drawn_only_with_debug_menu() {
        let mut manager = UiManager::new();
        manager.set_fps_text("60 FPS");

        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert!(renderer.ops.is_empty());

        manager.set_debug_menu(true);
        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert_eq!(renderer.ops, ["text:60 FPS"]);
    }

    #[test]
    fn test_toggle_group_visibility_is_involution() {
        let mut manager = manager_from_json(
            r#"{
                "G": [
                    {"Type": "Frame", "groupVisibility": true},
                    {"Type": "Frame", "groupVisibility": false}
                ],
                "other": [{"Type": "Frame", "groupVisibility": true}]
            }"#,
        );

        let snapshot: Vec<bool> = manager.widgets().iter().map(|w| w.base().visible).collect();

        manager.toggle_group_visibility("G");
        assert_eq!(
            manager
                .widgets()
                .iter()
                .map(|w| w.base().visible)
                .collect::<Vec<_>>(),
            [false, true, true] // "other" untouched
        );

        manager.toggle_group_visibility("G");
        let restored: Vec<bool> = manager.widgets().iter().map(|w| w.base().visible).collect();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_widget_by_id_first_match_wins() {
        let manager = manager_from_json(
            r#"{"g": [
                {"Type": "TextButton", "ID": "dup", "Text": "first"},
                {"Type": "TextButton", "ID": "dup", "Text": "second"}
            ]}"#,
        );

        let widget = manager.widget_by_id("dup").unwrap();
        assert!(matches!(widget, Widget::Button(b) if b.label == "first"));
    }

    #[test]
    fn test_widget_by_id_not_found() {
        let manager = manager_from_json(r#"{"g": [{"Type": "Frame", "ID": "frame"}]}"#);
        assert!(manager.widget_by_id("missing").is_none());
        // No widget has an empty id here, so an empty query finds nothing.
        assert!(manager.widget_by_id("").is_none());
    }

    #[test]
    fn test_widget_by_empty_id_on_unnamed_widget() {
        // Widgets may legitimately have an empty identifier; an empty query
        // finds the first of them rather than inventing a placeholder.
        let manager = manager_from_json(r#"{"g": [{"Type": "Frame"}]}"#);
        assert!(manager.widget_by_id("").is_some());

        let empty = UiManager::new();
        assert!(empty.widget_by_id("").is_none());
    }

    #[test]
    fn test_action_and_group_toggle_both_fire() {
        let mut manager = manager_from_json(
            r#"{
                "toolbar": [{
                    "Type": "ImageButton", "ID": "raise",
                    "Action": "RaiseTerrain", "ParentOfGroup": "terrainTools",
                    "groupVisibility": true
                }],
                "terrainTools": [{"Type": "Frame", "groupVisibility": false}]
            }"#,
        );

        let mut state = EditState::default();
        assert!(manager.activate_by_id("raise", &mut state));

        assert_eq!(state.terrain_edit, TerrainEdit::Raise);
        assert!(state.highlight_selection);
        assert!(manager.widgets()[1].base().visible);

        // Second activation: mode back to NONE, group hidden again.
        assert!(manager.activate_by_id("raise", &mut state));
        assert_eq!(state.terrain_edit, TerrainEdit::None);
        assert!(!state.highlight_selection);
        assert!(!manager.widgets()[1].base().visible);
    }

    #[test]
    fn test_group_toggle_without_action() {
        let mut manager = manager_from_json(
            r#"{
                "menu": [{
                    "Type": "TextButton", "ID": "build", "Text": "Build",
                    "ParentOfGroup": "buildMenu", "groupVisibility": true
                }],
                "buildMenu": [{"Type": "Frame"}]
            }"#,
        );

        let mut state = EditState::default();
        manager.activate_by_id("build", &mut state);

        assert!(manager.widgets()[1].base().visible);
        assert_eq!(state, EditState::default()); // no action bound, state untouched
    }

    #[test]
    fn test_activate_by_unknown_id() {
        let mut manager = UiManager::new();
        let mut state = EditState::default();
        assert!(!manager.activate_by_id("ghost", &mut state));
    }

    #[test]
    fn test_handle_click_hits_topmost_visible() {
        let mut manager = manager_from_json(
            r#"{"g": [
                {"Type": "ImageButton", "ID": "below", "Action": "RaiseTerrain",
                 "Position_x": 0, "Position_y": 0, "Width": 100, "Height": 100,
                 "groupVisibility": true},
                {"Type": "ImageButton", "ID": "above", "Action": "LowerTerrain",
                 "Position_x": 40, "Position_y": 40, "Width": 20, "Height": 20}
            ]}"#,
        );

        let mut state = EditState::default();

        // Overlap region: the later-declared widget is painted on top and
        // must win the hit test.
        assert!(manager.handle_click(&PointerEvent { x: 50, y: 50 }, &mut state));
        assert_eq!(state.terrain_edit, TerrainEdit::Lower);

        // Outside the small button but inside the big one.
        assert!(manager.handle_click(&PointerEvent { x: 10, y: 10 }, &mut state));
        assert_eq!(state.terrain_edit, TerrainEdit::Raise);

        // Outside everything: not consumed.
        assert!(!manager.handle_click(&PointerEvent { x: 500, y: 500 }, &mut state));
    }

    #[test]
    fn test_handle_click_skips_invisible() {
        let mut manager = manager_from_json(
            r#"{"g": [
                {"Type": "ImageButton", "ID": "hidden", "Action": "Demolish",
                 "Width": 100, "Height": 100}
            ]}"#,
        );

        let mut state = EditState::default();
        assert!(!manager.handle_click(&PointerEvent { x: 10, y: 10 }, &mut state));
        assert!(!state.demolish_mode);
    }

    #[test]
    fn test_quit_game_requests_shutdown() {
        let mut manager = manager_from_json(
            r#"{"menu": [{
                "Type": "TextButton", "ID": "quit", "Text": "Quit",
                "Action": "QuitGame", "groupVisibility": true
            }]}"#,
        );

        let mut state = EditState::default();
        manager.activate_by_id("quit", &mut state);
        assert!(state.quit_requested);
    }

    #[test]
    fn test_tooltip_start_stop() {
        let mut manager = manager_from_json(r#"{"g": [{"Type": "Frame"}]}"#);

        manager.start_tooltip(&PointerEvent { x: 120, y: 80 }, "Raise terrain");
        assert!(manager.tooltip().is_armed());

        manager.stop_tooltip();
        assert!(!manager.tooltip().is_armed());
        assert!(!manager.tooltip().is_visible());
        assert_eq!(manager.tooltip().text(), "");

        // Nothing residual shows up in the draw pass either.
        manager.update(TOOLTIP_DELAY * 2);
        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert!(renderer.ops.is_empty());
    }

    #[test]
    fn test_tooltip_draws_after_delay() {
        let mut manager = UiManager::new();
        manager.start_tooltip(&PointerEvent { x: 10, y: 10 }, "hint");
        manager.update(TOOLTIP_DELAY);

        let mut renderer = RecordingRenderer::default();
        manager.draw_ui(&mut renderer);
        assert_eq!(renderer.ops, ["frame", "text:hint"]);
    }

    #[test]
    fn test_init_with_missing_file_leaves_registry_empty() {
        let settings = Settings {
            ui_layout_file: "/nonexistent/ui_layout.json".into(),
            show_debug_menu: false,
        };

        let mut manager = UiManager::new();
        manager.init(&settings);
        assert_eq!(manager.widget_count(), 0);
    }

    #[test]
    fn test_init_with_malformed_file_leaves_registry_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ this is not json").unwrap();

        let settings = Settings {
            ui_layout_file: file.path().to_path_buf(),
            show_debug_menu: false,
        };

        let mut manager = UiManager::new();
        manager.init(&settings);
        assert_eq!(manager.widget_count(), 0);
    }

    #[test]
    fn test_init_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"toolbar": [
                {{"Type": "ImageButton", "ID": "raiseBtn", "SpriteID": "raise",
                  "Action": "RaiseTerrain", "groupVisibility": true}}
            ]}}"#
        )
        .unwrap();

        let settings = Settings {
            ui_layout_file: file.path().to_path_buf(),
            show_debug_menu: true,
        };

        let mut manager = UiManager::new();
        manager.init(&settings);

        assert_eq!(manager.widget_count(), 1);
        let widget = manager.widget_by_id("raiseBtn").unwrap();
        assert!(widget.base().visible);
        assert_eq!(widget.base().action_id, "RaiseTerrain");
    }
}
