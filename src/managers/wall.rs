//! Floor/wall tile manager.
//!
//! Tiles pick their image and z-order from where they sit in the grid:
//! column edges and top corners render above everything, the top/bottom rows
//! depth-sort against the player, plain floor stays underneath.

use crate::components::actor::{ActorId, ActorKind};
use crate::engines::factory::Manager;
use crate::error::StageResult;
use crate::resources::imagestore::ImageHandle;
use crate::stage::Stage;

const TILE: f32 = 16.0;
const WALL_IMAGES: [&str; 5] = [
    "floor-0001",
    "floor-0002",
    "floor-0003",
    "floor-0004",
    "floor-0005",
];

pub struct WallManager {
    kind: ActorKind,
    images: Vec<ImageHandle>,
}

impl WallManager {
    pub fn new(kind: ActorKind) -> Self {
        Self {
            kind,
            images: Vec::new(),
        }
    }
}

impl Manager for WallManager {
    fn id(&self) -> ActorKind {
        self.kind
    }

    fn register(&mut self, stage: &mut Stage) -> StageResult<()> {
        for name in WALL_IMAGES {
            self.images.push(stage.images.load(name)?);
        }
        Ok(())
    }

    fn start_actor(&mut self, stage: &mut Stage, id: ActorId) -> StageResult<()> {
        let (screen_w, screen_h) = stage.config.screen_size();
        let right_col = screen_w as f32 - TILE;
        let top_row = TILE;
        let bottom_row = screen_h as f32 - TILE;

        let Some(actor) = stage.actors.get_mut(id) else {
            return Ok(());
        };
        let x = actor.pos.x;
        let y = actor.pos.y;

        let shape = if (x == 0.0 || x == right_col) && y == top_row {
            4
        } else if x == 0.0 || x == right_col {
            3
        } else if y == top_row || y == bottom_row {
            2
        } else if y == 2.0 * TILE {
            1
        } else {
            0
        };

        actor.image = self.images.get(shape).cloned();
        actor.z_index = if shape < 2 {
            1000
        } else if shape == 2 {
            -(y as i32)
        } else {
            -1000
        };
        if shape >= 2 {
            // Tall tiles are two tiles high; anchor on the lower tile.
            actor.image_offset.y = -TILE;
        }
        Ok(())
    }
}
