//! Pixel-space AABB collision between the player and falling text
//!
//! The player lives in normalized device coordinates and falling text in
//! bottom-origin pixel space, so both are converted into pixel-space boxes
//! before testing. Text box widths come from the glyph metrics in
//! [`crate::text`], so collision matches what is actually drawn.

use crate::falling_text::FallingText;
use crate::player::Player;
use crate::text;
use crate::{SCREEN_PIXELS, TEXT_SCALE};

/// An axis-aligned box as a pair of numeric intervals: `top < bottom`
/// numerically, regardless of which way the screen's y axis points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Strict-inequality overlap test: boxes that merely touch along an edge do
/// not collide.
pub fn aabb_intersect(a: &Aabb, b: &Aabb) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

/// The player square in pixel coordinates.
///
/// NDC maps to pixels as `ndc * SCREEN_PIXELS/2 + SCREEN_PIXELS/2` on both
/// axes (the screen is square).
pub fn player_bounds(player: &Player) -> Aabb {
    let center_x = player.x * SCREEN_PIXELS / 2.0 + SCREEN_PIXELS / 2.0;
    let center_y = player.y * SCREEN_PIXELS / 2.0 + SCREEN_PIXELS / 2.0;
    let half = player.half_size * SCREEN_PIXELS / 2.0;

    Aabb {
        left: center_x - half,
        right: center_x + half,
        top: center_y - half,
        bottom: center_y + half,
    }
}

/// Bounding box of a falling line of text at the fixed text scale.
///
/// Width is the sum of per-character advances; height is the fixed glyph
/// line height. The entity's y is the lower edge of the box.
pub fn text_bounds(entity: &FallingText) -> Aabb {
    Aabb {
        left: entity.x,
        right: entity.x + text::text_width(&entity.text, TEXT_SCALE),
        top: entity.y,
        bottom: entity.y + text::text_height(TEXT_SCALE),
    }
}

/// Result of scanning all live entities against the player for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// The player overlaps at least one entity of any kind.
    pub any: bool,
    /// The player overlaps at least one hazard entity.
    pub hazard: bool,
}

/// Tests every entity against the player and reports what it touched.
pub fn scan_contacts(player: &Player, texts: &[FallingText]) -> Contact {
    let player_box = player_bounds(player);
    let mut contact = Contact::default();

    for entity in texts {
        if aabb_intersect(&player_box, &text_bounds(entity)) {
            contact.any = true;
            if entity.is_hazard() {
                contact.hazard = true;
            }
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::falling_text::{BENIGN_COLOR, HAZARD_COLOR};

    fn boxed(left: f32, top: f32, size: f32) -> Aabb {
        Aabb {
            left,
            right: left + size,
            top,
            bottom: top + size,
        }
    }

    fn entity(text: &str, x: f32, y: f32, color: sdl2::pixels::Color) -> FallingText {
        FallingText {
            text: text.to_string(),
            x,
            y,
            speed: 50.0,
            color,
        }
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = boxed(0.0, 0.0, 32.0);
        let b = boxed(16.0, 16.0, 32.0);
        assert!(aabb_intersect(&a, &b));
        assert!(aabb_intersect(&b, &a));
    }

    #[test]
    fn test_separated_boxes_do_not_intersect() {
        let a = boxed(0.0, 0.0, 32.0);
        let b = boxed(100.0, 100.0, 32.0);
        assert!(!aabb_intersect(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        // Sharing only the x = 32 edge: strict inequalities rule it out
        let a = boxed(0.0, 0.0, 32.0);
        let b = boxed(32.0, 0.0, 32.0);
        assert!(!aabb_intersect(&a, &b));

        // Same along y
        let c = boxed(0.0, 32.0, 32.0);
        assert!(!aabb_intersect(&a, &c));
    }

    #[test]
    fn test_contained_box_intersects() {
        let large = boxed(0.0, 0.0, 100.0);
        let small = boxed(25.0, 25.0, 50.0);
        assert!(aabb_intersect(&large, &small));
    }

    #[test]
    fn test_player_bounds_transform() {
        // Centered player: pixel center (600, 180), half size 30
        let player = Player::new();
        let bounds = player_bounds(&player);
        assert_eq!(bounds.left, 570.0);
        assert_eq!(bounds.right, 630.0);
        assert_eq!(bounds.top, 150.0);
        assert_eq!(bounds.bottom, 210.0);
    }

    #[test]
    fn test_text_bounds_use_glyph_metrics() {
        let e = entity("abcd", 150.0, 850.0, BENIGN_COLOR);
        let bounds = text_bounds(&e);
        assert_eq!(bounds.left, 150.0);
        // 4 chars * 36 px advance * 0.5 scale
        assert_eq!(bounds.right, 150.0 + 72.0);
        assert_eq!(bounds.top, 850.0);
        assert_eq!(bounds.bottom, 850.0 + 24.0);
    }

    #[test]
    fn test_scan_reports_hazard_and_benign_separately() {
        let player = Player::new();
        // Player box spans x 570..630, y 150..210
        let overlapping_benign = entity("xxxx", 560.0, 160.0, BENIGN_COLOR);
        let far_hazard = entity("xxxx", 0.0, 850.0, HAZARD_COLOR);

        let contact = scan_contacts(&player, &[overlapping_benign.clone(), far_hazard.clone()]);
        assert!(contact.any);
        assert!(!contact.hazard);

        let overlapping_hazard = entity("xxxx", 560.0, 160.0, HAZARD_COLOR);
        let contact = scan_contacts(&player, &[overlapping_benign, overlapping_hazard, far_hazard]);
        assert!(contact.any);
        assert!(contact.hazard);
    }

    #[test]
    fn test_scan_with_no_entities_is_clear() {
        let player = Player::new();
        assert_eq!(scan_contacts(&player, &[]), Contact::default());
    }
}
