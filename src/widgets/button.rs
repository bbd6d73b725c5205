use crate::render::{Renderer, UiRect};
use crate::widgets::WidgetBase;

/// A clickable button, constructed from either an `ImageButton` or a
/// `TextButton` element record. The two tags differ only in initialization:
/// image buttons carry a sprite reference, text buttons a label.
pub struct Button {
    pub base: WidgetBase,
    /// Texture reference for image buttons. Empty for text buttons.
    pub sprite_id: String,
    /// Display label for text buttons. Empty for image buttons.
    pub label: String,
    /// Pressed state. Only latches when `base.toggle_button` is set.
    pub pressed: bool,
}

impl Button {
    pub fn new(rect: UiRect) -> Self {
        Self {
            base: WidgetBase::new(rect),
            sprite_id: String::new(),
            label: String::new(),
            pressed: false,
        }
    }

    pub fn set_sprite_id(&mut self, sprite_id: impl Into<String>) {
        self.sprite_id = sprite_id.into();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if self.base.draw_frame {
            renderer.draw_frame(self.base.rect);
        }
        if self.sprite_id.is_empty() {
            renderer.draw_text(self.base.rect, &self.label);
        } else {
            renderer.draw_sprite(self.base.rect, &self.sprite_id);
        }
    }
}
