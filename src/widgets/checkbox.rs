use crate::render::{Renderer, UiRect};
use crate::widgets::WidgetBase;

/// A two-state checkbox. Activation flips `checked`.
pub struct Checkbox {
    pub base: WidgetBase,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(rect: UiRect) -> Self {
        Self {
            base: WidgetBase::new(rect),
            checked: false,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_frame(self.base.rect);
        if self.checked {
            renderer.draw_text(self.base.rect, "x");
        }
    }
}
