//! Health bar component at the top of the screen

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::combat::HealthLevel;
use crate::render::ndc_box;

/// Configuration for health bar appearance.
///
/// Geometry is in normalized device coordinates so the bar scales with the
/// arena, like every other fixed scene element.
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Half the bar's width in NDC.
    pub half_width: f32,

    /// Half the bar's height in NDC.
    pub half_height: f32,

    /// Vertical center of the bar in NDC.
    pub center_y: f32,

    /// Background color, visible where health is depleted.
    pub background_color: Color,

    /// Fill color while health is above the warning bracket.
    pub safe_color: Color,

    /// Fill color in the warning bracket.
    pub warning_color: Color,

    /// Fill color in the critical bracket.
    pub critical_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            half_width: 0.6,
            half_height: 0.05,
            center_y: 0.85,
            background_color: Color::RGB(51, 51, 51),
            safe_color: Color::RGB(0, 255, 0),
            warning_color: Color::RGB(255, 255, 0),
            critical_color: Color::RGB(255, 0, 0),
        }
    }
}

/// A stateless health bar: create once, render every frame with the current
/// health percentage.
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    #[allow(dead_code)] // Reserved for alternate bar placements
    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    #[allow(dead_code)] // Used by tests
    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Draws the bar. The filled portion grows from the left edge and its
    /// color follows the health brackets: green above 66%, yellow above
    /// 33%, red below.
    pub fn render(&self, canvas: &mut Canvas<Window>, health_percentage: f32) -> Result<(), String> {
        let background = ndc_box(
            0.0,
            self.style.center_y,
            self.style.half_width,
            self.style.half_height,
        );
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(background)?;

        let fraction = health_percentage.clamp(0.0, 1.0);
        let fill_width = (background.width() as f32 * fraction) as u32;
        if fill_width > 0 {
            let fill_color = match HealthLevel::classify(health_percentage) {
                HealthLevel::Safe => self.style.safe_color,
                HealthLevel::Warning => self.style.warning_color,
                HealthLevel::Critical => self.style.critical_color,
            };
            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(
                background.x(),
                background.y(),
                fill_width,
                background.height(),
            ))?;
        }

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}
