//! Presentation adapter: draws one frame of the simulated state
//!
//! This is the only module that knows SDL's screen space has its origin at
//! the top-left with +y down. Everything it consumes (player NDC position,
//! falling-text pixel positions) uses the simulation's +y-up conventions
//! and is flipped here.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::text;
use crate::ui::{GameOverScreen, HealthBar};
use crate::world::World;
use crate::{SCREEN_PIXELS, TEXT_SCALE};

/// Half-extent of the white arena border in NDC.
const OUTER_BORDER: f32 = 0.8;

/// Border thickness in NDC; the black interior starts this far in.
const BORDER_THICKNESS: f32 = 0.05;

const BACKGROUND_COLOR: Color = Color::RGB(26, 26, 26);
const BORDER_COLOR: Color = Color::RGB(255, 255, 255);
const INTERIOR_COLOR: Color = Color::RGB(0, 0, 0);
const PLAYER_COLOR: Color = Color::RGB(128, 128, 128);
const PLAYER_CONTACT_COLOR: Color = Color::RGB(255, 0, 0);

/// Converts a centered NDC box (+y up) to a screen-space `Rect`.
pub fn ndc_box(center_x: f32, center_y: f32, half_width: f32, half_height: f32) -> Rect {
    let scale = SCREEN_PIXELS / 2.0;
    let left = (center_x - half_width) * scale + scale;
    let top = scale - (center_y + half_height) * scale;
    Rect::new(
        left.round() as i32,
        top.round() as i32,
        (half_width * 2.0 * scale).round() as u32,
        (half_height * 2.0 * scale).round() as u32,
    )
}

/// Maps a bottom-origin simulation y (the lower edge of a box of
/// `box_height` pixels) to the box's top edge in screen space.
pub fn sim_to_screen_y(sim_y: f32, box_height: f32) -> f32 {
    SCREEN_PIXELS - (sim_y + box_height)
}

/// Draws the whole scene for the current frame. The caller presents.
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    world: &World,
    health_bar: &HealthBar,
    game_over_screen: &GameOverScreen,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    // Arena border: white square with a black interior
    canvas.set_draw_color(BORDER_COLOR);
    canvas.fill_rect(ndc_box(0.0, 0.0, OUTER_BORDER, OUTER_BORDER))?;
    let inner = OUTER_BORDER - BORDER_THICKNESS;
    canvas.set_draw_color(INTERIOR_COLOR);
    canvas.fill_rect(ndc_box(0.0, 0.0, inner, inner))?;

    // Player square, flushed red while touching any text
    let player_color = if world.contact.any {
        PLAYER_CONTACT_COLOR
    } else {
        PLAYER_COLOR
    };
    canvas.set_draw_color(player_color);
    canvas.fill_rect(ndc_box(
        world.player.x,
        world.player.y,
        world.player.half_size,
        world.player.half_size,
    ))?;

    health_bar.render(canvas, world.health.percentage())?;

    for entity in &world.falling_texts {
        let screen_y = sim_to_screen_y(entity.y, text::text_height(TEXT_SCALE));
        text::draw_text(canvas, &entity.text, entity.x, screen_y, TEXT_SCALE, entity.color)?;
    }

    if world.is_game_over() {
        game_over_screen.render(canvas)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_box_centers_the_origin() {
        let rect = ndc_box(0.0, 0.0, 0.5, 0.5);
        assert_eq!(rect, Rect::new(300, 300, 600, 600));
    }

    #[test]
    fn test_ndc_box_flips_y() {
        // A box near the NDC top lands near the screen top
        let rect = ndc_box(0.0, 0.85, 0.6, 0.05);
        assert_eq!(rect.y(), 60);
        assert_eq!(rect.height(), 60);
        assert_eq!(rect.x(), 240);
        assert_eq!(rect.width(), 720);
    }

    #[test]
    fn test_sim_to_screen_y_flips_around_screen_height() {
        // A 24 px tall line whose bottom edge sits at sim y = 850 has its
        // top edge 326 px down the screen
        assert_eq!(sim_to_screen_y(850.0, 24.0), 326.0);
        // At the kill line, the box bottoms out at the screen's lower edge
        assert_eq!(sim_to_screen_y(0.0, 24.0), 1176.0);
    }
}
