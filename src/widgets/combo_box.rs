use crate::render::{Renderer, UiRect};
use crate::widgets::WidgetBase;

/// A combo box showing one of a list of items. The layout document only
/// declares the display text; items are pushed in by the host at runtime
/// (via `UiManager::widget_by_id_mut`) and activation cycles through them.
pub struct ComboBox {
    pub base: WidgetBase,
    /// Display text shown while no items are set.
    pub text: String,
    pub items: Vec<String>,
    pub active_item: usize,
}

impl ComboBox {
    pub fn new(rect: UiRect) -> Self {
        Self {
            base: WidgetBase::new(rect),
            text: String::new(),
            items: Vec::new(),
            active_item: 0,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Advance the active item, wrapping around. No-op without items.
    pub fn cycle_active(&mut self) {
        if !self.items.is_empty() {
            self.active_item = (self.active_item + 1) % self.items.len();
        }
    }

    /// The text currently shown: the active item, or the declared display
    /// text while the item list is empty.
    pub fn displayed_text(&self) -> &str {
        self.items.get(self.active_item).map_or(&self.text, String::as_str)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_frame(self.base.rect);
        renderer.draw_text(self.base.rect, self.displayed_text());
    }
}
