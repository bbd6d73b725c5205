use crate::render::{Renderer, UiRect};
use crate::widgets::WidgetBase;

/// A decorative frame, usually declared before the buttons it sits behind
/// (earlier in the document means further back in z-order).
pub struct Frame {
    pub base: WidgetBase,
}

impl Frame {
    pub fn new(rect: UiRect) -> Self {
        Self {
            base: WidgetBase::new(rect),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_frame(self.base.rect);
    }
}
