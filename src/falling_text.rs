//! Falling text entities and their per-tick motion
//!
//! Entities live in pixel space with the origin at the bottom-left of the
//! window, +y up: they spawn near the top and fall toward y = 0, where they
//! are removed. Only the registry mutates them after spawn.

use sdl2::pixels::Color;

/// Color of text spawned from the hazard file; contact with it drains health.
pub const HAZARD_COLOR: Color = Color::RGB(255, 0, 0);

/// Color of text spawned from the benign file; harmless on contact.
pub const BENIGN_COLOR: Color = Color::RGB(0, 255, 0);

/// One line of text falling down the screen.
#[derive(Debug, Clone)]
pub struct FallingText {
    pub text: String,
    /// Left edge, pixels from the left of the window.
    pub x: f32,
    /// Bottom edge, pixels from the bottom of the window.
    pub y: f32,
    /// Downward speed in pixels per second.
    pub speed: f32,
    /// Hazard or benign, encoded as the rendered RGB color.
    pub color: Color,
}

impl FallingText {
    pub fn is_hazard(&self) -> bool {
        self.color == HAZARD_COLOR
    }
}

/// Moves every entity down by `speed * dt`, then removes the ones that have
/// fallen off screen (y strictly below 0).
pub fn advance(texts: &mut Vec<FallingText>, dt: f32) {
    for entity in texts.iter_mut() {
        entity.y -= entity.speed * dt;
    }
    texts.retain(|entity| entity.y >= 0.0);
}
