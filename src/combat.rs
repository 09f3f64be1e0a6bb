//! Health pool and the hazard-contact damage state machine

/// Starting and maximum health.
pub const MAX_HEALTH: f32 = 100.0;

/// Seconds of sustained hazard contact per damage quantum.
pub const DAMAGE_INTERVAL: f32 = 0.5;

/// Health removed per damage quantum.
pub const DAMAGE_AMOUNT: f32 = 1.0;

/// A health pool clamped to `[0, max]`.
#[derive(Debug, Clone)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates a full health pool.
    pub fn new(max: f32) -> Self {
        Health { current: max, max }
    }

    #[allow(dead_code)] // Used by tests
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Current health as a fraction of max, in `[0, 1]`.
    pub fn percentage(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Removes `amount` health, clamping at zero. Returns true if the pool
    /// is now empty.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.current = (self.current - amount).max(0.0);
        self.current <= 0.0
    }
}

/// Health-bar bracket for presentation: which warning color applies.
///
/// Brackets are exclusive on their upper bound except the top one:
/// `> 66%` is safe, `> 33%` warns, the rest is critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Safe,
    Warning,
    Critical,
}

impl HealthLevel {
    pub fn classify(percent: f32) -> Self {
        if percent > 0.66 {
            HealthLevel::Safe
        } else if percent > 0.33 {
            HealthLevel::Warning
        } else {
            HealthLevel::Critical
        }
    }
}

/// Contact state of the damage engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageState {
    /// No hazard contact; the damage timer is discarded.
    Safe,
    /// In hazard contact, accumulating toward the next damage quantum.
    Contact { timer: f32 },
    /// Health hit zero. Terminal: no transition ever leaves this state.
    GameOver,
}

/// Drives health depletion from the per-frame hazard-contact flag.
///
/// While contact holds, a timer accumulates `dt`; each time it reaches
/// [`DAMAGE_INTERVAL`] it resets to zero (overshoot discarded) and one
/// [`DAMAGE_AMOUNT`] is applied. Losing contact resets the timer
/// immediately, so partial progress never carries across a contact
/// boundary. Emptying the pool transitions to [`DamageState::GameOver`].
pub struct DamageEngine {
    state: DamageState,
}

impl DamageEngine {
    pub fn new() -> Self {
        DamageEngine {
            state: DamageState::Safe,
        }
    }

    #[allow(dead_code)] // Used by tests
    pub fn state(&self) -> DamageState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == DamageState::GameOver
    }

    /// Advances the state machine by one frame.
    pub fn update(&mut self, hazard_contact: bool, dt: f32, health: &mut Health) {
        if self.is_game_over() {
            return;
        }

        if !hazard_contact {
            self.state = DamageState::Safe;
            return;
        }

        let mut timer = match self.state {
            DamageState::Contact { timer } => timer,
            _ => 0.0,
        };

        timer += dt;
        if timer >= DAMAGE_INTERVAL {
            timer = 0.0;
            if health.take_damage(DAMAGE_AMOUNT) {
                self.state = DamageState::GameOver;
                return;
            }
        }

        self.state = DamageState::Contact { timer };
    }
}

impl Default for DamageEngine {
    fn default() -> Self {
        Self::new()
    }
}
