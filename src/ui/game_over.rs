//! Game-over overlay

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::render::sim_to_screen_y;
use crate::text;

/// Configuration for the end-of-game message.
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub message: String,
    pub color: Color,
    pub scale: f32,
    /// Message position in bottom-origin pixel space, like falling text.
    pub x: f32,
    pub y: f32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            message: "Git Gud".to_string(),
            color: Color::RGB(255, 0, 0),
            scale: 1.5,
            x: 450.0,
            y: 600.0,
        }
    }
}

/// Draws the fixed end-of-game message once the run is over.
pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    #[allow(dead_code)] // Reserved for alternate messages
    pub fn with_style(style: GameOverStyle) -> Self {
        GameOverScreen { style }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let screen_y = sim_to_screen_y(self.style.y, text::text_height(self.style.scale));
        text::draw_text(
            canvas,
            &self.style.message,
            self.style.x,
            screen_y,
            self.style.scale,
            self.style.color,
        )
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
