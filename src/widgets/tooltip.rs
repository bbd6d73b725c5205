//! Hover tooltip with a timed show delay.
//!
//! The tooltip is a singleton owned by `UiManager`, outside the main widget
//! collection. Its externally visible lifecycle has exactly two transitions:
//! `arm` (pointer hovered something with tooltip text) and `reset` (pointer
//! left). The delay before it actually becomes visible is internal, an
//! elapsed-time counter polled once per frame, not a preemptive timer.

use std::time::Duration;

use crate::render::{Renderer, UiRect};

/// How long the pointer has to rest on a widget before the tooltip shows.
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(500);

// Size estimate for the tooltip box; the backend does the real text layout.
const CHAR_WIDTH: i32 = 8;
const LINE_HEIGHT: i32 = 16;
const PADDING: i32 = 4;

pub struct Tooltip {
    rect: UiRect,
    text: String,
    armed: bool,
    visible: bool,
    elapsed: Duration,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            rect: UiRect::default(),
            text: String::new(),
            armed: false,
            visible: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Arm the tooltip: remember the text and position it centered above the
    /// pointer (horizontal center on the pointer, bottom edge at the
    /// pointer's y), then restart the show timer.
    pub fn arm(&mut self, text: &str, pointer_x: i32, pointer_y: i32) {
        self.text.clear();
        self.text.push_str(text);

        // Characters, not bytes: multi-byte text must not widen the box.
        let width = self.text.chars().count() as i32 * CHAR_WIDTH + 2 * PADDING;
        let height = LINE_HEIGHT + 2 * PADDING;
        self.rect = UiRect::new(pointer_x - width / 2, pointer_y - height, width, height);

        self.armed = true;
        self.visible = false;
        self.elapsed = Duration::ZERO;
    }

    /// Return to the idle state: invisible, no pending text, timer cleared.
    pub fn reset(&mut self) {
        self.armed = false;
        self.visible = false;
        self.text.clear();
        self.elapsed = Duration::ZERO;
    }

    /// Advance the show timer. Called once per frame by `UiManager::update`.
    pub fn update(&mut self, dt: Duration) {
        if self.armed && !self.visible {
            self.elapsed += dt;
            if self.elapsed >= TOOLTIP_DELAY {
                self.visible = true;
            }
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rect(&self) -> UiRect {
        self.rect
    }

    /// Draw if visible. Safe to call unconditionally every frame; the
    /// tooltip is responsible for being invisible when inactive.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if self.visible {
            renderer.draw_frame(self.rect);
            renderer.draw_text(self.rect, &self.text);
        }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_positions_above_and_centered() {
        let mut tooltip = Tooltip::new();
        tooltip.arm("Raise", 100, 200);

        let rect = tooltip.rect();
        // Horizontal center on the pointer, bottom edge at the pointer's y.
        assert_eq!(rect.x + rect.width / 2, 100);
        assert_eq!(rect.y + rect.height, 200);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let mut tooltip = Tooltip::new();
        // "Tür" is 3 characters but 4 bytes in UTF-8.
        tooltip.arm("Tür", 100, 200);

        let rect = tooltip.rect();
        assert_eq!(rect.width, 3 * CHAR_WIDTH + 2 * PADDING);
        assert_eq!(rect.x + rect.width / 2, 100);
    }

    #[test]
    fn test_not_visible_before_delay() {
        let mut tooltip = Tooltip::new();
        tooltip.arm("Lower", 50, 50);
        assert!(tooltip.is_armed());
        assert!(!tooltip.is_visible());

        tooltip.update(TOOLTIP_DELAY / 2);
        assert!(!tooltip.is_visible());

        tooltip.update(TOOLTIP_DELAY);
        assert!(tooltip.is_visible());
    }

    #[test]
    fn test_arm_then_reset_is_idle() {
        let mut tooltip = Tooltip::new();
        tooltip.arm("Demolish", 10, 10);
        tooltip.update(TOOLTIP_DELAY * 2);
        tooltip.reset();

        assert!(!tooltip.is_armed());
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.text(), "");
        // Re-arming starts a fresh timer rather than inheriting elapsed time.
        tooltip.arm("Demolish", 10, 10);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_idle_tooltip_ignores_time() {
        let mut tooltip = Tooltip::new();
        tooltip.update(TOOLTIP_DELAY * 10);
        assert!(!tooltip.is_visible());
    }
}
