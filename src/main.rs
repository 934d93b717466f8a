use anyhow::Result;
use glam::Vec2;
use log::info;

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::Action;
use game::player::ControllerConfig;
use game::GameWorld;

/// Length of the scripted demo in fixed updates (~8 seconds)
const DEMO_FRAMES: u64 = 480;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting ladder-runner demo...");

    let mut world = GameWorld::new(ControllerConfig::default(), Vec2::ZERO)?;

    // A small level: a long floor (top surface at the player's feet) and a
    // ladder a short run to the right
    world.add_platform(0.0, 20.0, 600.0, 10.0);
    world.add_ladder(150.0, -30.0, 10.0, 120.0);
    info!("Level built: floor and one ladder at x = 150");

    let mut game_loop = GameLoop::new();
    let mut frame: u64 = 0;

    while frame < DEMO_FRAMES {
        let updates = game_loop.begin_frame();
        for _ in 0..updates {
            script_input(&mut world, frame);
            world.update(game_loop.fixed_timestep());

            if frame % 60 == 0 {
                let pos = world.player_position().unwrap_or(Vec2::ZERO);
                info!(
                    "frame {:3}: pos=({:7.1}, {:7.1}) on_floor={} on_ladder={}",
                    frame,
                    pos.x,
                    pos.y,
                    world.is_on_floor(),
                    world.controller().on_ladder()
                );
            }

            frame += 1;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    info!("Demo finished after {} updates", game_loop.update_count());
    Ok(())
}

/// Scripted input: run right with a hop, coast to a stop at the ladder,
/// climb it until the volume ends, then crouch after landing
fn script_input(world: &mut GameWorld, frame: u64) {
    let input = world.input_mut();
    match frame {
        0 => input.press(Action::MoveRight),
        30 => input.press(Action::Jump),
        31 => input.release(Action::Jump),
        // Released here, the decay brings the player to rest around x = 150
        60 => input.release(Action::MoveRight),
        150 => input.press(Action::Up),
        330 => {
            input.release(Action::Up);
            input.press(Action::Down);
        }
        420 => input.release(Action::Down),
        _ => {}
    }
}
