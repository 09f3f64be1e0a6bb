//! The simulation state owned by the main loop
//!
//! `World` owns every piece of game state and runs the whole per-frame
//! pipeline in one `update` call. The renderer only ever reads it.

use std::path::Path;

use crate::collision::{self, Contact};
use crate::combat::{DamageEngine, Health, MAX_HEALTH};
use crate::falling_text::{self, FallingText};
use crate::line_source::LineSource;
use crate::player::{MoveInput, Player};
use crate::spawner::Spawner;

/// Seconds between re-reads of both input files.
pub const RELOAD_INTERVAL: f32 = 10.0;

/// All simulation state for one run of the game.
pub struct World {
    pub player: Player,
    pub falling_texts: Vec<FallingText>,
    pub health: Health,
    /// What the player touched this frame; drives damage and player color.
    pub contact: Contact,
    hazard_lines: LineSource,
    benign_lines: LineSource,
    spawner: Spawner,
    damage: DamageEngine,
    reload_timer: f32,
}

impl World {
    pub fn new(hazard_path: &Path, benign_path: &Path) -> Self {
        World {
            player: Player::new(),
            falling_texts: Vec::new(),
            health: Health::new(MAX_HEALTH),
            contact: Contact::default(),
            hazard_lines: LineSource::open(hazard_path),
            benign_lines: LineSource::open(benign_path),
            spawner: Spawner::new(),
            damage: DamageEngine::new(),
            reload_timer: 0.0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.damage.is_game_over()
    }

    pub fn loaded_line_counts(&self) -> (usize, usize) {
        (self.hazard_lines.len(), self.benign_lines.len())
    }

    /// Advances the simulation by one frame.
    ///
    /// Component order is fixed: player movement, file reload, spawning,
    /// entity motion and pruning, then contact scan and damage.
    pub fn update(&mut self, input: MoveInput, dt: f32) {
        self.player.update(input, dt);

        self.reload_timer += dt;
        if self.reload_timer >= RELOAD_INTERVAL {
            self.reload_timer = 0.0;
            self.hazard_lines.reload();
            self.benign_lines.reload();
        }

        // Once the game is over nothing new spawns (the spawn timer is
        // frozen), but entities already on screen keep falling.
        if !self.damage.is_game_over() {
            if let Some(entity) =
                self.spawner
                    .tick(dt, &mut self.hazard_lines, &mut self.benign_lines)
            {
                self.falling_texts.push(entity);
            }
        }

        falling_text::advance(&mut self.falling_texts, dt);

        self.contact = collision::scan_contacts(&self.player, &self.falling_texts);
        self.damage
            .update(self.contact.hazard, dt, &mut self.health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::falling_text::HAZARD_COLOR;
    use crate::spawner::SPAWN_INTERVAL;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn text_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    fn pinned_hazard(world: &mut World) {
        // Park a hazard line on top of the player, falling so slowly the
        // test's few frames cannot move it off.
        world.falling_texts.push(FallingText {
            text: "xxxx".to_string(),
            x: 560.0,
            y: 160.0,
            speed: 0.001,
            color: HAZARD_COLOR,
        });
    }

    #[test]
    fn test_spawns_accumulate_over_intervals() {
        let hazard = text_file("h1\nh2\n");
        let benign = text_file("b1\nb2\n");
        let mut world = World::new(hazard.path(), benign.path());

        for _ in 0..4 {
            world.update(MoveInput::default(), SPAWN_INTERVAL);
        }
        assert_eq!(world.falling_texts.len(), 4);
    }

    #[test]
    fn test_game_over_stops_spawning() {
        let hazard = text_file("h1\nh2\nh3\nh4\nh5\nh6\nh7\nh8\n");
        let benign = text_file("");
        let mut world = World::new(hazard.path(), benign.path());
        world.health = Health::new(1.0);
        pinned_hazard(&mut world);

        // One damage interval of sustained contact empties the pool
        world.update(MoveInput::default(), 0.25);
        world.update(MoveInput::default(), 0.25);
        assert!(world.is_game_over());

        let count_at_game_over = world.falling_texts.len();
        for _ in 0..4 {
            world.update(MoveInput::default(), SPAWN_INTERVAL);
        }
        // Entities still fall (and may prune), but none are added
        assert!(world.falling_texts.len() <= count_at_game_over);
    }

    #[test]
    fn test_contact_flags_follow_entity_positions() {
        let hazard = text_file("");
        let benign = text_file("");
        let mut world = World::new(hazard.path(), benign.path());
        pinned_hazard(&mut world);

        world.update(MoveInput::default(), 0.01);
        assert!(world.contact.any);
        assert!(world.contact.hazard);

        world.falling_texts.clear();
        world.update(MoveInput::default(), 0.01);
        assert!(!world.contact.any);
    }

    #[test]
    fn test_health_depletes_only_during_hazard_contact() {
        let hazard = text_file("");
        let benign = text_file("");
        let mut world = World::new(hazard.path(), benign.path());

        for _ in 0..10 {
            world.update(MoveInput::default(), 0.25);
        }
        assert_eq!(world.health.current(), MAX_HEALTH);

        pinned_hazard(&mut world);
        for _ in 0..8 {
            world.update(MoveInput::default(), 0.25);
        }
        assert_eq!(world.health.current(), MAX_HEALTH - 4.0);
    }

    #[test]
    fn test_missing_files_spawn_nothing_but_run_fine() {
        let missing = PathBuf::from("/nonexistent/lines.txt");
        let mut world = World::new(&missing, &missing);

        for _ in 0..10 {
            world.update(MoveInput::default(), SPAWN_INTERVAL);
        }
        assert!(world.falling_texts.is_empty());
        assert!(!world.is_game_over());
    }
}
