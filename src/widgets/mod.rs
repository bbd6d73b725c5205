//! Runtime widget types.
//!
//! The widget set is closed: the layout document can only ever declare the
//! types listed in `Widget`, so a plain enum with exhaustive dispatch beats
//! an open trait-object hierarchy here. Each concrete widget lives in its own
//! file and embeds a `WidgetBase` for the capabilities shared by all of them.

mod button;
mod checkbox;
mod combo_box;
mod frame;
mod label;
mod tooltip;

pub use button::Button;
pub use checkbox::Checkbox;
pub use combo_box::ComboBox;
pub use frame::Frame;
pub use label::Label;
pub use tooltip::{Tooltip, TOOLTIP_DELAY};

use crate::actions::ActionCallback;
use crate::render::{Renderer, UiRect};

/// State every widget carries regardless of its concrete type.
///
/// These are the cross-cutting attributes the load pass applies uniformly
/// after construction: geometry, visibility, identity, grouping, tooltip
/// text, and the optional action callback.
pub struct WidgetBase {
    pub rect: UiRect,
    pub visible: bool,
    /// Identifier for direct lookup. May be empty; uniqueness is not
    /// enforced, lookup returns the first match in insertion order.
    pub id: String,
    /// Name of the owning group from the layout document.
    pub group: String,
    /// Name of another group whose visibility this widget toggles when
    /// activated. Empty means no toggling behavior.
    pub parent_of: String,
    pub tooltip_text: String,
    /// Action identifier as declared in the layout document.
    pub action_id: String,
    /// Buttons with this flag stay pressed until activated again.
    pub toggle_button: bool,
    /// Draw a decorative border around the widget.
    pub draw_frame: bool,
    /// Bound behavior, fired on activation. At most one per widget.
    pub callback: Option<ActionCallback>,
}

impl WidgetBase {
    pub fn new(rect: UiRect) -> Self {
        Self {
            rect,
            visible: false,
            id: String::new(),
            group: String::new(),
            parent_of: String::new(),
            tooltip_text: String::new(),
            action_id: String::new(),
            toggle_button: false,
            draw_frame: false,
            callback: None,
        }
    }
}

/// Enum to hold the different widget types.
pub enum Widget {
    Button(Button),
    Label(Label),
    Frame(Frame),
    Checkbox(Checkbox),
    ComboBox(ComboBox),
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Widget::Button(_) => "Button",
            Widget::Label(_) => "Label",
            Widget::Frame(_) => "Frame",
            Widget::Checkbox(_) => "Checkbox",
            Widget::ComboBox(_) => "ComboBox",
        })
    }
}

impl Widget {
    /// Shared state, readable across all variants.
    pub fn base(&self) -> &WidgetBase {
        match self {
            Widget::Button(w) => &w.base,
            Widget::Label(w) => &w.base,
            Widget::Frame(w) => &w.base,
            Widget::Checkbox(w) => &w.base,
            Widget::ComboBox(w) => &w.base,
        }
    }

    /// Shared state, mutable.
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            Widget::Button(w) => &mut w.base,
            Widget::Label(w) => &mut w.base,
            Widget::Frame(w) => &mut w.base,
            Widget::Checkbox(w) => &mut w.base,
            Widget::ComboBox(w) => &mut w.base,
        }
    }

    /// Draw this widget through the host renderer.
    ///
    /// Visibility is the caller's concern; `UiManager::draw_ui` skips
    /// invisible widgets before getting here.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            Widget::Button(w) => w.draw(renderer),
            Widget::Label(w) => w.draw(renderer),
            Widget::Frame(w) => w.draw(renderer),
            Widget::Checkbox(w) => w.draw(renderer),
            Widget::ComboBox(w) => w.draw(renderer),
        }
    }

    /// Flip widget-local state on activation (pressed, checked, active item).
    ///
    /// Runs before any bound callback so the callback observes the new state.
    pub fn on_activate(&mut self) {
        match self {
            Widget::Button(w) => {
                if w.base.toggle_button {
                    w.pressed = !w.pressed;
                }
            }
            Widget::Checkbox(w) => w.checked = !w.checked,
            Widget::ComboBox(w) => w.cycle_active(),
            Widget::Label(_) | Widget::Frame(_) => {}
        }
    }
}
