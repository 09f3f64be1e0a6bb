//! Textfall: dodge the falling text
//!
//! A square at the bottom of the arena dodges lines of text read from two
//! files. Red lines (first file) drain health on contact; green lines
//! (second file) are harmless. Both files are re-read every ten seconds,
//! so they can be edited while the game runs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

mod collision;
mod combat;
mod falling_text;
mod line_source;
mod player;
mod render;
mod spawner;
mod text;
mod ui;
mod world;

use player::MoveInput;
use ui::{GameOverScreen, HealthBar};
use world::World;

/// Window edge length; the screen is square.
pub const SCREEN_PIXELS: f32 = 1200.0;

/// Scale applied to falling text, for both drawing and collision.
pub const TEXT_SCALE: f32 = 0.5;

#[derive(Parser)]
#[command(name = "textfall", about = "Dodge falling lines of text")]
struct Args {
    /// File of hazard lines (drawn red, drain health on contact)
    hazard_file: PathBuf,

    /// File of benign lines (drawn green, harmless)
    benign_file: PathBuf,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("Textfall", SCREEN_PIXELS as u32, SCREEN_PIXELS as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut world = World::new(&args.hazard_file, &args.benign_file);
    let health_bar = HealthBar::new();
    let game_over_screen = GameOverScreen::new();

    let (hazard_count, benign_count) = world.loaded_line_counts();
    log::info!(
        "loaded {} hazard lines from {} and {} benign lines from {}",
        hazard_count,
        args.hazard_file.display(),
        benign_count,
        args.benign_file.display()
    );

    let mut last_frame = Instant::now();
    let mut announced_game_over = false;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let keyboard_state = event_pump.keyboard_state();
        let input = MoveInput {
            left: keyboard_state.is_scancode_pressed(Scancode::Left),
            right: keyboard_state.is_scancode_pressed(Scancode::Right),
        };

        world.update(input, dt);

        if world.is_game_over() && !announced_game_over {
            announced_game_over = true;
            log::info!("health depleted, game over");
        }

        render::draw_frame(&mut canvas, &world, &health_bar, &game_over_screen)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
