//! Screen-space HUD components
//!
//! Stateless components drawn on top of the arena each frame using SDL2
//! primitives: the health bar at the top of the screen and the game-over
//! overlay. Each carries a style struct so appearance stays separate from
//! drawing logic.

pub mod game_over;
pub mod health_bar;

pub use game_over::GameOverScreen;
pub use health_bar::{HealthBar, HealthBarStyle};
