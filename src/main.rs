//! Stagecore demo entry point.
//!
//! Boots the four core engines around one stage, registers the demo managers
//! (backdrop, player, floor tiles), tiles the screen, and runs the frame
//! loop headless for a fixed number of ticks with synthetic input driving
//! the player on a square patrol.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --frames 240
//! ```

use std::path::PathBuf;

use clap::Parser;

use stagecore::app::App;
use stagecore::components::actor::{ActorData, ActorId, ActorKind};
use stagecore::components::hitbox::Hitbox;
use stagecore::engines::collision::CollisionEngine;
use stagecore::engines::factory::{create_actor, register_manager, FactoryEngine};
use stagecore::engines::render::{NullSurface, RenderEngine};
use stagecore::engines::update::UpdateEngine;
use stagecore::error::StageResult;
use stagecore::geom::Rect;
use stagecore::managers::backdrop::BackdropManager;
use stagecore::managers::player::PlayerManager;
use stagecore::managers::wall::WallManager;
use stagecore::resources::input::InputDirections;
use stagecore::resources::stageconfig::StageConfig;

const KIND_PLAYER: ActorKind = 0;
const KIND_BACKDROP: ActorKind = 1;
const KIND_WALL: ActorKind = 2;

const MASK_SOLID: u32 = 0b01;
const TILE: f32 = 16.0;

const PLAYER_ID: ActorId = 0;
const FIRST_WALL_ID: ActorId = 2;

/// Stagecore 2D demo
#[derive(Parser)]
#[command(version, about = "Headless demo scene for the stagecore runtime")]
struct Cli {
    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 240)]
    frames: u64,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> StageResult<()> {
    let mut config = match cli.config {
        Some(path) => StageConfig::with_path(path),
        None => StageConfig::new(),
    };
    config.load_from_file().ok(); // missing file: keep defaults
    let (screen_w, screen_h) = config.screen_size();

    let mut app = App::create(
        vec![
            Box::new(FactoryEngine::new()),
            Box::new(UpdateEngine::new()),
            Box::new(CollisionEngine::new()),
            Box::new(RenderEngine::new(Box::new(NullSurface))),
        ],
        config,
    )?;

    let stage = app.stage_mut();
    register_manager(stage, Box::new(BackdropManager::new(KIND_BACKDROP)))?;
    register_manager(stage, Box::new(PlayerManager::new(KIND_PLAYER)))?;
    register_manager(stage, Box::new(WallManager::new(KIND_WALL)))?;

    create_actor(
        stage,
        ActorData::new(PLAYER_ID, KIND_PLAYER)
            .with_pos(2.0 * TILE, 4.0 * TILE)
            .with_hitbox(Hitbox::symmetric(
                MASK_SOLID,
                Rect::new(0.0, 0.0, TILE, TILE),
            )),
    )?;

    // Tile every row but the first with floor; the wall manager picks image
    // and z-order per tile at start.
    let cols = (screen_w as f32 / TILE) as usize;
    let rows = (screen_h as f32 / TILE) as usize - 1;
    let mut id = FIRST_WALL_ID;
    for row in 0..rows {
        for col in 0..cols {
            create_actor(
                stage,
                ActorData::new(id, KIND_WALL)
                    .with_pos(col as f32 * TILE, TILE + row as f32 * TILE)
                    .with_hitbox(Hitbox::symmetric(
                        MASK_SOLID,
                        Rect::new(0.0, 0.0, TILE, TILE),
                    )),
            )?;
            id += 1;
        }
    }
    log::info!(
        "Scene ready: {} actors on a {}x{} screen",
        app.stage().actors.active_count(),
        screen_w,
        screen_h
    );

    app.start()?;

    for frame in 0..cli.frames {
        // Square patrol: one direction per 60-frame leg.
        app.stage_mut().input = match (frame / 60) % 4 {
            0 => InputDirections {
                right: true,
                ..Default::default()
            },
            1 => InputDirections {
                down: true,
                ..Default::default()
            },
            2 => InputDirections {
                left: true,
                ..Default::default()
            },
            _ => InputDirections {
                up: true,
                ..Default::default()
            },
        };

        app.tick()?;

        if (frame + 1) % 60 == 0 {
            let stage = app.stage();
            if let Some(player) = stage.actors.get(PLAYER_ID) {
                log::info!(
                    "frame {}: player at ({:.1}, {:.1}), {} overlaps, {} active actors",
                    stage.frame,
                    player.pos.x,
                    player.pos.y,
                    stage.collisions.len(),
                    stage.actors.active_count()
                );
            }
        }
    }

    app.shutdown()?;
    log::info!("Simulated {} frames", cli.frames);
    Ok(())
}
