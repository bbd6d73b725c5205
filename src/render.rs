//! Rendering seam between the widget layer and the host's graphics backend.
//!
//! The UI layer never paints pixels itself. Widgets describe what they need
//! drawn through the `Renderer` trait and the host (SDL, wgpu, a test
//! recorder) decides what that means.

/// Screen-space rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl UiRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point falls inside this rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Drawing operations a widget can request from the host backend.
///
/// Implementations are expected to be cheap; `UiManager::draw_ui` calls into
/// this once per visible widget every frame.
pub trait Renderer {
    /// Draw the sprite with the given texture ID into `rect`.
    fn draw_sprite(&mut self, rect: UiRect, sprite_id: &str);

    /// Draw text into `rect`.
    fn draw_text(&mut self, rect: UiRect, text: &str);

    /// Draw a decorative frame around `rect`.
    fn draw_frame(&mut self, rect: UiRect);
}
