//! Timed spawning of falling text, alternating between the two sources

use crate::falling_text::{BENIGN_COLOR, FallingText, HAZARD_COLOR};
use crate::line_source::LineSource;

/// Seconds between spawn attempts.
pub const SPAWN_INTERVAL: f32 = 0.5;

/// Fixed spawn point (bottom-origin pixel space) and fall speed.
pub const SPAWN_X: f32 = 150.0;
pub const SPAWN_Y: f32 = 850.0;
pub const FALL_SPEED: f32 = 50.0;

/// Emits a new falling-text entity every [`SPAWN_INTERVAL`] seconds,
/// strictly alternating between the hazard and benign sources.
///
/// The turn flips after every firing whether or not a line came out, so the
/// cadence of whose turn it is never depends on file contents.
pub struct Spawner {
    spawn_timer: f32,
    use_hazard: bool,
}

impl Spawner {
    /// The hazard source gets the first turn.
    pub fn new() -> Self {
        Spawner {
            spawn_timer: 0.0,
            use_hazard: true,
        }
    }

    /// Accumulates `dt`; on reaching the interval, resets the timer, pulls
    /// the next line from the active source, and emits an entity if the
    /// source produced one.
    pub fn tick(
        &mut self,
        dt: f32,
        hazard: &mut LineSource,
        benign: &mut LineSource,
    ) -> Option<FallingText> {
        self.spawn_timer += dt;
        if self.spawn_timer < SPAWN_INTERVAL {
            return None;
        }
        self.spawn_timer = 0.0;

        let (line, color) = if self.use_hazard {
            (hazard.next(), HAZARD_COLOR)
        } else {
            (benign.next(), BENIGN_COLOR)
        };
        // The flip is unconditional, even when the pull came up empty
        self.use_hazard = !self.use_hazard;

        line.map(|text| FallingText {
            text,
            x: SPAWN_X,
            y: SPAWN_Y,
            speed: FALL_SPEED,
            color,
        })
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
