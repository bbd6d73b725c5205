use crate::render::{Renderer, UiRect};
use crate::widgets::WidgetBase;

/// A static text element (the layout document's `Text` type).
pub struct Label {
    pub base: WidgetBase,
    pub text: String,
}

impl Label {
    pub fn new(rect: UiRect) -> Self {
        Self {
            base: WidgetBase::new(rect),
            text: String::new(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_text(self.base.rect, &self.text);
    }
}
