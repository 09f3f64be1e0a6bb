//! Player square and its movement

/// Horizontal speed in normalized device coordinates per second.
pub const MOVE_SPEED: f32 = 1.0;

/// The player's x position is clamped to `[-MAX_X, MAX_X]` every tick.
pub const MAX_X: f32 = 0.7;

/// Fixed vertical position, near the bottom of the arena.
pub const PLAYER_Y: f32 = -0.7;

/// Half the side length of the player square, in NDC.
pub const PLAYER_HALF_SIZE: f32 = 0.05;

/// Current press state of the movement controls, sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
}

/// The player-controlled square.
///
/// Position is in normalized device coordinates (+y up); only `x` ever
/// changes. There is no acceleration or friction, just a constant speed
/// while a direction is held.
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub half_size: f32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            x: 0.0,
            y: PLAYER_Y,
            half_size: PLAYER_HALF_SIZE,
        }
    }

    /// Applies one tick of movement. Holding both directions cancels out.
    pub fn update(&mut self, input: MoveInput, dt: f32) {
        if input.left {
            self.x -= MOVE_SPEED * dt;
        }
        if input.right {
            self.x += MOVE_SPEED * dt;
        }
        self.x = self.x.clamp(-MAX_X, MAX_X);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
